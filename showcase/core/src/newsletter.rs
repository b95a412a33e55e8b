//! Newsletter signup
//!
//! A local simulation of the subscription form: validation, a timed
//! "submitting" state and a confirmation. Nothing leaves the process.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::scheduler::{Clock, Scheduler, SystemClock};

/// How long the simulated submission takes
pub const SUBMIT_DELAY: Duration = Duration::from_millis(1500);

/// Longest address the field accepts
pub const MAX_ADDRESS_LEN: usize = 254;

/// Why a submission was refused
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubscribeError {
    /// Empty address or missing `@`
    #[error("Please enter a valid email address")]
    InvalidEmail,

    /// A submission is already in flight or has completed
    #[error("subscription already submitted")]
    Busy,
}

/// Form state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionState {
    /// Accepting input
    Editing,
    /// Waiting for the simulated submission to finish
    Submitting,
    /// Done; shows the thank-you message
    Subscribed,
}

/// Timer payload for [`Subscription`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubmissionFinished;

/// The newsletter form
#[derive(Debug)]
pub struct Subscription<C: Clock = SystemClock> {
    address: String,
    error: Option<SubscribeError>,
    state: SubscriptionState,
    submit_delay: Duration,
    scheduler: Scheduler<SubmissionFinished, C>,
}

impl<C: Clock> Subscription<C> {
    /// Empty form; a valid submission completes after `submit_delay`
    pub fn new(submit_delay: Duration, scheduler: Scheduler<SubmissionFinished, C>) -> Self {
        Self {
            address: String::new(),
            error: None,
            state: SubscriptionState::Editing,
            submit_delay,
            scheduler,
        }
    }

    /// Current address text
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Validation error to display, if any
    pub fn error(&self) -> Option<SubscribeError> {
        self.error
    }

    /// Form state
    pub fn state(&self) -> SubscriptionState {
        self.state
    }

    /// Underline fill for the input, 5% per character up to 100%
    pub fn input_meter(&self) -> f32 {
        let chars = self.address.chars().count().min(20);
        #[allow(clippy::cast_precision_loss)]
        let meter = chars as f32 * 0.05;
        meter
    }

    /// Append a typed character
    ///
    /// Control characters, input past [`MAX_ADDRESS_LEN`] and input outside
    /// the editing state are ignored.
    pub fn push_char(&mut self, character: char) {
        if self.state != SubscriptionState::Editing || character.is_control() {
            return;
        }
        if self.address.chars().count() >= MAX_ADDRESS_LEN {
            return;
        }
        self.address.push(character);
        self.error = None;
    }

    /// Remove the last character
    pub fn backspace(&mut self) {
        if self.state != SubscriptionState::Editing {
            return;
        }
        if self.address.pop().is_some() {
            self.error = None;
        }
    }

    /// Validate and start the simulated submission
    ///
    /// # Errors
    ///
    /// [`SubscribeError::InvalidEmail`] if the address is empty or has no
    /// `@` (the error is also kept for display), [`SubscribeError::Busy`]
    /// when not editing.
    pub fn submit(&mut self) -> Result<(), SubscribeError> {
        if self.state != SubscriptionState::Editing {
            return Err(SubscribeError::Busy);
        }
        if self.address.is_empty() || !self.address.contains('@') {
            debug!(len = self.address.len(), "Rejected newsletter address");
            self.error = Some(SubscribeError::InvalidEmail);
            return Err(SubscribeError::InvalidEmail);
        }

        self.error = None;
        self.state = SubscriptionState::Submitting;
        self.scheduler.schedule(self.submit_delay, SubmissionFinished);
        debug!("Newsletter submission started");
        Ok(())
    }

    /// Finish the submission once its delay has elapsed
    pub fn poll(&mut self) -> usize {
        let mut fired = 0;
        while self.scheduler.pop_due().is_some() {
            fired += 1;
            if self.state == SubscriptionState::Submitting {
                self.state = SubscriptionState::Subscribed;
                self.address.clear();
                info!("Newsletter subscription confirmed");
            }
        }
        fired
    }

    /// Abandon any in-flight submission
    pub fn dispose(&mut self) {
        self.scheduler.cancel_all();
    }
}
