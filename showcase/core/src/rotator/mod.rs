//! Rotator - Carousel State Machine
//!
//! Advances a single active index over a fixed [`ItemSet`], either on
//! request or on a timer, with cross-fade bookkeeping and autoplay
//! pause/resume semantics. The testimonial carousel, the featured-product
//! tabs and the service category tabs are all instances of this one type
//! with different [`RotatorConfig`]s.
//!
//! # State Machine
//!
//! ```text
//!              go_to(i)                      transition elapsed
//!   Idle ─────────────────► Transitioning ─────────────────────► Idle
//!    ▲                        │   ▲                                │
//!    │                        └───┘ go_to(j): retarget, no queue   │
//!    └─────────────────────────────────────────────────────────────┘
//!
//!   Transitioning ──── go_to(current) ────► Idle   (fade cancelled)
//!
//!   Autoplaying ◄──── resume / cooldown elapsed ──── Paused
//!        │                                             ▲
//!        └──── pause / hover / manual navigation ──────┘
//! ```
//!
//! # Timers
//!
//! A rotator owns its [`Scheduler`] and holds at most one timer of each
//! kind (transition, autoplay, cooldown). Every new timer of a kind cancels
//! the previous one first, and [`Rotator::dispose`] cancels them all. Since
//! timers are only delivered through [`Rotator::poll`], nothing can act on
//! a rotator after it is disposed or dropped.

mod config;

pub use config::{
    RotatorConfig, TAB_TRANSITION, TESTIMONIAL_AUTOPLAY_INTERVAL, TESTIMONIAL_COOLDOWN,
    TESTIMONIAL_TRANSITION,
};

use std::num::NonZeroUsize;
use std::time::Duration;

use tracing::{debug, trace};

use crate::events::RotatorEvent;
use crate::items::ItemSet;
use crate::messages::{Motion, PauseReason, Playback, RotatorNotice, RotatorPhase, RotatorSnapshot};
use crate::scheduler::{Clock, Scheduler, SystemClock, TimerId, MIN_TIMER_DELAY};

/// Timer payloads owned by a rotator
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RotatorTimer {
    /// The cross-fade window elapsed
    TransitionComplete,
    /// Time for an automatic advance
    AutoAdvance,
    /// The post-navigation pause elapsed
    CooldownElapsed,
}

/// Carousel controller over `len` items
#[derive(Debug)]
pub struct Rotator<C: Clock = SystemClock> {
    len: usize,
    config: RotatorConfig,
    scheduler: Scheduler<RotatorTimer, C>,

    current_index: usize,
    pending_target: Option<usize>,
    transition_timer: Option<TimerId>,

    autoplay_enabled: bool,
    autoplay_timer: Option<TimerId>,
    cooldown_timer: Option<TimerId>,
    pointer_inside: bool,

    disposed: bool,
    notices: Vec<RotatorNotice>,
}

impl<C: Clock> Rotator<C> {
    /// Create a rotator over `len` items
    ///
    /// Starts idle at index 0. With `config.autoplay` the first automatic
    /// advance is scheduled immediately.
    pub fn new(len: NonZeroUsize, config: RotatorConfig, scheduler: Scheduler<RotatorTimer, C>) -> Self {
        let mut rotator = Self {
            len: len.get(),
            config,
            scheduler,
            current_index: 0,
            pending_target: None,
            transition_timer: None,
            autoplay_enabled: false,
            autoplay_timer: None,
            cooldown_timer: None,
            pointer_inside: false,
            disposed: false,
            notices: Vec::new(),
        };

        if config.autoplay {
            rotator.autoplay_enabled = true;
            rotator.schedule_autoplay();
        }

        debug!(
            len = rotator.len,
            autoplay = config.autoplay,
            transition_ms = config.transition.as_millis() as u64,
            "Rotator mounted"
        );
        rotator
    }

    /// Create a rotator sized to `items`
    pub fn for_items<T>(items: &ItemSet<T>, config: RotatorConfig, scheduler: Scheduler<RotatorTimer, C>) -> Self {
        Self::new(items.count(), config, scheduler)
    }

    // =========================================================================
    // Read-only projections
    // =========================================================================

    /// Number of items
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`; a rotator has at least one item
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Item currently rendered
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Item that becomes current when the in-flight fade ends
    pub fn pending_target(&self) -> Option<usize> {
        self.pending_target
    }

    /// Whether a fade is in flight
    pub fn is_transitioning(&self) -> bool {
        self.pending_target.is_some()
    }

    /// Whether autoplay is advancing
    pub fn autoplay_enabled(&self) -> bool {
        self.autoplay_enabled
    }

    /// Whether autoplay will resume by itself after a manual navigation
    pub fn cooldown_active(&self) -> bool {
        self.cooldown_timer.is_some()
    }

    /// Whether [`dispose`](Self::dispose) has been called
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Timing configuration
    pub fn config(&self) -> &RotatorConfig {
        &self.config
    }

    /// The rotator's timer queue (read-only)
    pub fn scheduler(&self) -> &Scheduler<RotatorTimer, C> {
        &self.scheduler
    }

    /// Index navigation is relative to: the in-flight target, else the current index
    pub fn effective_index(&self) -> usize {
        self.pending_target.unwrap_or(self.current_index)
    }

    /// Current state machine position
    pub fn phase(&self) -> RotatorPhase {
        RotatorPhase {
            motion: match self.pending_target {
                Some(target) => Motion::Transitioning { target },
                None => Motion::Idle,
            },
            playback: if self.autoplay_enabled {
                Playback::Autoplaying
            } else {
                Playback::Paused
            },
        }
    }

    /// Fraction of the autoplay countdown that has elapsed
    pub fn autoplay_progress(&self) -> Option<f32> {
        let id = self.autoplay_timer?;
        Some(self.progress_of(id, self.config.autoplay_interval))
    }

    /// Fraction of the cross-fade that has elapsed
    pub fn transition_progress(&self) -> Option<f32> {
        let id = self.transition_timer?;
        Some(self.progress_of(id, self.config.transition))
    }

    /// Snapshot for rendering
    pub fn snapshot(&self) -> RotatorSnapshot {
        RotatorSnapshot {
            len: self.len,
            current_index: self.current_index,
            pending_target: self.pending_target,
            is_transitioning: self.is_transitioning(),
            autoplay_enabled: self.autoplay_enabled,
            cooldown_active: self.cooldown_active(),
        }
    }

    /// Take the notices accumulated since the last call
    pub fn drain_notices(&mut self) -> Vec<RotatorNotice> {
        std::mem::take(&mut self.notices)
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Request a cross-fade to `index`
    ///
    /// Out-of-range indices and the index already being faded to are
    /// ignored, as is the current index while idle. A request that arrives
    /// during a fade replaces the pending target instead of queueing behind
    /// it; one that points back at the current index stops the fade. The
    /// autoplay countdown restarts from this moment.
    ///
    /// Returns whether the request was accepted.
    pub fn go_to(&mut self, index: usize) -> bool {
        if self.disposed {
            return false;
        }
        if index >= self.len {
            trace!(index, len = self.len, "Ignoring out-of-range navigation");
            return false;
        }
        if self.pending_target == Some(index) {
            return false;
        }
        if index == self.current_index {
            let Some(dropped) = self.pending_target.take() else {
                return false;
            };
            if let Some(id) = self.transition_timer.take() {
                self.scheduler.cancel(id);
            }
            debug!(from = dropped, index, "Transition cancelled");
            self.notices.push(RotatorNotice::TransitionCancelled {
                from: dropped,
                index,
            });
            self.cancel_autoplay_timer();
            if self.autoplay_enabled {
                self.schedule_autoplay();
            }
            return true;
        }

        match self.pending_target.replace(index) {
            Some(previous) => {
                debug!(from = previous, to = index, "Transition retargeted");
                self.notices.push(RotatorNotice::TransitionRetargeted {
                    from: previous,
                    to: index,
                });
            }
            None => {
                let id = self
                    .scheduler
                    .schedule(self.config.transition, RotatorTimer::TransitionComplete);
                self.transition_timer = Some(id);
                debug!(from = self.current_index, to = index, "Transition started");
                self.notices.push(RotatorNotice::TransitionStarted {
                    from: self.current_index,
                    to: index,
                });
            }
        }

        self.cancel_autoplay_timer();
        if self.autoplay_enabled {
            self.schedule_autoplay();
        }
        true
    }

    /// Advance to the following item, wrapping at the end
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> bool {
        let target = (self.effective_index() + 1) % self.len;
        self.go_to(target)
    }

    /// Go back to the preceding item, wrapping at the start
    pub fn previous(&mut self) -> bool {
        let target = (self.effective_index() + self.len - 1) % self.len;
        self.go_to(target)
    }

    // =========================================================================
    // Autoplay
    // =========================================================================

    /// Stop automatic advancing until [`resume_autoplay`](Self::resume_autoplay)
    ///
    /// Also cancels a pending cooldown, so an explicit pause is never undone
    /// behind the caller's back.
    pub fn pause_autoplay(&mut self) {
        if self.disposed {
            return;
        }
        self.cancel_cooldown_timer();
        self.halt_autoplay(PauseReason::Requested);
    }

    /// Start (or keep) advancing automatically
    ///
    /// If a fade is in flight the countdown starts when it completes.
    pub fn resume_autoplay(&mut self) {
        if self.disposed {
            return;
        }
        self.cancel_cooldown_timer();

        let was_enabled = self.autoplay_enabled;
        self.autoplay_enabled = true;
        if !self.is_transitioning() && self.autoplay_timer.is_none() {
            self.schedule_autoplay();
        }

        if !was_enabled {
            debug!(index = self.current_index, "Autoplay resumed");
            self.notices.push(RotatorNotice::AutoplayResumed);
        }
    }

    /// Apply direct user input
    ///
    /// Manual navigation pauses autoplay for the configured cooldown; pointer
    /// enter/leave pause and resume it. Autoplay behaviour only applies to
    /// rotators configured with autoplay.
    pub fn handle_event(&mut self, event: RotatorEvent) {
        if self.disposed {
            return;
        }

        match event {
            RotatorEvent::Next => {
                if self.next() {
                    self.start_cooldown();
                }
            }
            RotatorEvent::Previous => {
                if self.previous() {
                    self.start_cooldown();
                }
            }
            RotatorEvent::GoTo(index) => {
                if self.go_to(index) {
                    self.start_cooldown();
                }
            }
            RotatorEvent::PointerEnter => {
                self.pointer_inside = true;
                if self.config.autoplay {
                    self.halt_autoplay(PauseReason::Hover);
                }
            }
            RotatorEvent::PointerLeave => {
                self.pointer_inside = false;
                if self.config.autoplay {
                    self.resume_autoplay();
                }
            }
        }
    }

    // =========================================================================
    // Timer delivery & lifecycle
    // =========================================================================

    /// Deliver every timer that has come due, in deadline order
    ///
    /// Returns the number of timers delivered.
    pub fn poll(&mut self) -> usize {
        let mut delivered = 0;
        while let Some((id, timer)) = self.scheduler.pop_due() {
            delivered += 1;
            trace!(?timer, "Rotator timer fired");
            match timer {
                RotatorTimer::TransitionComplete => self.complete_transition(id),
                RotatorTimer::AutoAdvance => self.auto_advance(id),
                RotatorTimer::CooldownElapsed => self.cooldown_elapsed(id),
            }
        }
        delivered
    }

    /// Tear down: cancel every timer and ignore all further input
    ///
    /// An in-flight fade is abandoned; `current_index` keeps the item that
    /// was on screen.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        let cancelled = self.scheduler.cancel_all();
        self.transition_timer = None;
        self.autoplay_timer = None;
        self.cooldown_timer = None;
        self.pending_target = None;
        self.autoplay_enabled = false;
        self.notices.clear();
        self.disposed = true;
        debug!(cancelled, index = self.current_index, "Rotator disposed");
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn complete_transition(&mut self, id: TimerId) {
        if self.transition_timer != Some(id) {
            return;
        }
        self.transition_timer = None;

        if let Some(target) = self.pending_target.take() {
            self.current_index = target;
            debug!(index = target, "Transition completed");
            self.notices
                .push(RotatorNotice::TransitionCompleted { index: target });
        }

        // A resume that arrived mid-fade deferred its countdown until now
        if self.autoplay_enabled && self.autoplay_timer.is_none() {
            self.schedule_autoplay();
        }
    }

    fn auto_advance(&mut self, id: TimerId) {
        if self.autoplay_timer != Some(id) {
            return;
        }
        self.autoplay_timer = None;

        if self.autoplay_enabled {
            // go_to reschedules the countdown from this firing instant
            self.next();
        }
    }

    fn cooldown_elapsed(&mut self, id: TimerId) {
        if self.cooldown_timer != Some(id) {
            return;
        }
        self.cooldown_timer = None;

        if self.pointer_inside {
            debug!("Cooldown elapsed while hovered; waiting for pointer to leave");
            return;
        }
        self.resume_autoplay();
    }

    fn start_cooldown(&mut self) {
        if !self.config.autoplay {
            return;
        }
        self.halt_autoplay(PauseReason::Cooldown);
        self.cancel_cooldown_timer();
        let id = self
            .scheduler
            .schedule(self.config.cooldown, RotatorTimer::CooldownElapsed);
        self.cooldown_timer = Some(id);
    }

    fn halt_autoplay(&mut self, reason: PauseReason) {
        let was_enabled = self.autoplay_enabled;
        self.autoplay_enabled = false;
        self.cancel_autoplay_timer();

        if was_enabled {
            debug!(?reason, index = self.current_index, "Autoplay paused");
            self.notices.push(RotatorNotice::AutoplayPaused { reason });
        }
    }

    fn schedule_autoplay(&mut self) {
        self.cancel_autoplay_timer();
        // A zero interval would re-fire within the same poll forever
        let interval = self.config.autoplay_interval.max(MIN_TIMER_DELAY);
        let id = self.scheduler.schedule(interval, RotatorTimer::AutoAdvance);
        self.autoplay_timer = Some(id);
    }

    fn cancel_autoplay_timer(&mut self) {
        if let Some(id) = self.autoplay_timer.take() {
            self.scheduler.cancel(id);
        }
    }

    fn cancel_cooldown_timer(&mut self) {
        if let Some(id) = self.cooldown_timer.take() {
            self.scheduler.cancel(id);
        }
    }

    fn progress_of(&self, id: TimerId, window: Duration) -> f32 {
        let Some(deadline) = self.scheduler.deadline(id) else {
            return 1.0;
        };
        if window.is_zero() {
            return 1.0;
        }
        let remaining = deadline.saturating_sub(self.scheduler.now());
        (1.0 - remaining.as_secs_f32() / window.as_secs_f32()).clamp(0.0, 1.0)
    }
}
