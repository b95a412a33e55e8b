//! Entrance-on-scroll latch
//!
//! Sections fade in the first time enough of them scrolls into view and
//! stay revealed afterwards.

use std::time::Duration;

/// Visible fraction that triggers a reveal
pub const DEFAULT_THRESHOLD: f32 = 0.1;

/// Duration of the entrance fade surfaces animate after a reveal
pub const ENTRANCE_DURATION: Duration = Duration::from_millis(1000);

/// One-way latch fed with visibility observations
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealLatch {
    threshold: f32,
    revealed: bool,
}

impl RevealLatch {
    /// Latch that trips once `threshold` of the section is visible
    #[must_use]
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            revealed: false,
        }
    }

    /// Feed a visibility observation; returns `true` on the observation that reveals
    pub fn observe(&mut self, fraction: f32) -> bool {
        if self.revealed || fraction.is_nan() || fraction <= 0.0 {
            return false;
        }
        if fraction >= self.threshold {
            self.revealed = true;
            return true;
        }
        false
    }

    /// Whether the section has been revealed
    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }
}

impl Default for RevealLatch {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}
