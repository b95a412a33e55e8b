//! Hero animations
//!
//! [`Typewriter`] types and deletes a cycle of phrases one character at a
//! time. [`LineReveal`] uncovers a code snippet chunk by chunk. Both are
//! driven by their own [`Scheduler`] and hold at most one pending timer.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::items::ItemSet;
use crate::scheduler::{Clock, Scheduler, SystemClock, MIN_TIMER_DELAY};

/// Delay between typed characters
pub const TYPE_DELAY: Duration = Duration::from_millis(100);

/// How long a fully typed phrase stays on screen
pub const HOLD_DELAY: Duration = Duration::from_millis(2000);

/// Delay between deleted characters
pub const DELETE_DELAY: Duration = Duration::from_millis(50);

/// Delay between revealed code chunks
pub const CODE_STEP_DELAY: Duration = Duration::from_millis(700);

/// Typewriter pacing
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypewriterConfig {
    /// Delay between typed characters
    pub type_delay: Duration,
    /// Pause once a phrase is complete
    pub hold: Duration,
    /// Delay between deleted characters
    pub delete_delay: Duration,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            type_delay: TYPE_DELAY,
            hold: HOLD_DELAY,
            delete_delay: DELETE_DELAY,
        }
    }
}

/// What the typewriter is doing right now
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypewriterPhase {
    /// Adding characters
    Typing,
    /// Showing the complete phrase
    Holding,
    /// Removing characters
    Deleting,
}

/// Timer payload for the hero animations
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Keystroke;

/// Cycles through phrases, typing and deleting them
#[derive(Debug)]
pub struct Typewriter<C: Clock = SystemClock> {
    phrases: ItemSet<&'static str>,
    config: TypewriterConfig,
    scheduler: Scheduler<Keystroke, C>,
    phrase_index: usize,
    visible_chars: usize,
    phase: TypewriterPhase,
    disposed: bool,
}

impl<C: Clock> Typewriter<C> {
    /// Start typing the first phrase
    pub fn new(phrases: ItemSet<&'static str>, config: TypewriterConfig, scheduler: Scheduler<Keystroke, C>) -> Self {
        let mut typewriter = Self {
            phrases,
            config,
            scheduler,
            phrase_index: 0,
            visible_chars: 0,
            phase: TypewriterPhase::Typing,
            disposed: false,
        };
        typewriter.scheduler.schedule(config.type_delay, Keystroke);
        typewriter
    }

    /// Index of the phrase being typed or deleted
    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    /// Current phase
    pub fn phase(&self) -> TypewriterPhase {
        self.phase
    }

    /// The on-screen prefix of the current phrase
    pub fn visible_text(&self) -> &'static str {
        let phrase = self.current_phrase();
        match phrase.char_indices().nth(self.visible_chars) {
            Some((end, _)) => &phrase[..end],
            None => phrase,
        }
    }

    /// Whether [`dispose`](Self::dispose) has been called
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Apply every keystroke that has come due
    pub fn poll(&mut self) -> usize {
        let mut steps = 0;
        while self.scheduler.pop_due().is_some() {
            steps += 1;
            let delay = self.step().max(MIN_TIMER_DELAY);
            self.scheduler.schedule(delay, Keystroke);
        }
        steps
    }

    /// Stop animating; the visible text freezes
    pub fn dispose(&mut self) {
        self.scheduler.cancel_all();
        self.disposed = true;
    }

    fn current_phrase(&self) -> &'static str {
        self.phrases
            .get(self.phrase_index)
            .copied()
            .unwrap_or_else(|| *self.phrases.first())
    }

    /// Perform one keystroke and return the delay until the next one
    fn step(&mut self) -> Duration {
        let phrase_len = self.current_phrase().chars().count();

        match self.phase {
            TypewriterPhase::Typing => {
                if self.visible_chars < phrase_len {
                    self.visible_chars += 1;
                }
                if self.visible_chars >= phrase_len {
                    self.phase = TypewriterPhase::Holding;
                    trace!(phrase = self.phrase_index, "Phrase typed");
                    self.config.hold
                } else {
                    self.config.type_delay
                }
            }
            TypewriterPhase::Holding => {
                self.phase = TypewriterPhase::Deleting;
                self.config.delete_delay
            }
            TypewriterPhase::Deleting => {
                self.visible_chars = self.visible_chars.saturating_sub(1);
                if self.visible_chars > 0 {
                    return self.config.delete_delay;
                }
                self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
                self.phase = TypewriterPhase::Typing;
                debug!(phrase = self.phrase_index, "Typewriter moved to next phrase");
                self.config.type_delay
            }
        }
    }
}

/// Reveals a code snippet one chunk at a time
#[derive(Debug)]
pub struct LineReveal<C: Clock = SystemClock> {
    lines: ItemSet<&'static str>,
    step: Duration,
    scheduler: Scheduler<Keystroke, C>,
    visible: usize,
    disposed: bool,
}

impl<C: Clock> LineReveal<C> {
    /// Start with nothing visible; the first chunk appears after `step`
    pub fn new(lines: ItemSet<&'static str>, step: Duration, scheduler: Scheduler<Keystroke, C>) -> Self {
        let mut reveal = Self {
            lines,
            step,
            scheduler,
            visible: 0,
            disposed: false,
        };
        reveal.scheduler.schedule(step, Keystroke);
        reveal
    }

    /// Number of chunks on screen
    pub fn visible_lines(&self) -> usize {
        self.visible
    }

    /// The revealed chunks concatenated
    pub fn visible_text(&self) -> String {
        self.lines.iter().take(self.visible).copied().collect()
    }

    /// Whether every chunk is visible
    pub fn is_complete(&self) -> bool {
        self.visible >= self.lines.len()
    }

    /// Whether [`dispose`](Self::dispose) has been called
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Reveal every chunk that has come due
    pub fn poll(&mut self) -> usize {
        if self.disposed {
            return 0;
        }
        let mut revealed = 0;
        while self.scheduler.pop_due().is_some() {
            revealed += 1;
            self.visible += 1;
            if !self.is_complete() {
                self.scheduler.schedule(self.step, Keystroke);
            }
        }
        revealed
    }

    /// Stop revealing; the visible chunks freeze
    pub fn dispose(&mut self) {
        self.scheduler.cancel_all();
        self.disposed = true;
    }
}
