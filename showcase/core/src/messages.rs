//! Messages from the core to presentation surfaces
//!
//! Read-only projections of state machine state. Surfaces render from
//! these; they never mutate the core through them.

use serde::{Deserialize, Serialize};

/// Why autoplay stopped
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PauseReason {
    /// Explicit `pause_autoplay` call
    Requested,
    /// Pointer is over the rotator
    Hover,
    /// Temporary pause after manual navigation
    Cooldown,
}

/// Something observable changed inside a rotator
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RotatorNotice {
    /// A cross-fade began
    TransitionStarted {
        /// Index being faded out
        from: usize,
        /// Index that becomes current when the fade ends
        to: usize,
    },
    /// A request arrived mid-fade and replaced the pending target
    TransitionRetargeted {
        /// Target that was replaced
        from: usize,
        /// New target
        to: usize,
    },
    /// A request mid-fade pointed back at the current item, so the fade stopped
    TransitionCancelled {
        /// Target that was dropped
        from: usize,
        /// Index that stays current
        index: usize,
    },
    /// The fade finished and `index` is now current
    TransitionCompleted {
        /// New current index
        index: usize,
    },
    /// Autoplay stopped advancing
    AutoplayPaused {
        /// Cause of the pause
        reason: PauseReason,
    },
    /// Autoplay is advancing again
    AutoplayResumed,
}

/// Transition half of the rotator state machine
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Motion {
    /// Showing `current_index`, nothing in flight
    Idle,
    /// Fading towards `target`
    Transitioning {
        /// Index that becomes current when the fade ends
        target: usize,
    },
}

/// Autoplay half of the rotator state machine
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Playback {
    /// Advancing on its own
    Autoplaying,
    /// Waiting for input (or for a cooldown to elapse)
    Paused,
}

/// Combined rotator state: `{Idle, Transitioning} × {Autoplaying, Paused}`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotatorPhase {
    /// Transition state
    pub motion: Motion,
    /// Autoplay state
    pub playback: Playback,
}

/// Point-in-time view of a rotator for rendering
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotatorSnapshot {
    /// Number of items
    pub len: usize,
    /// Item currently rendered
    pub current_index: usize,
    /// Item that becomes current when the in-flight fade ends
    pub pending_target: Option<usize>,
    /// Whether a fade is in flight
    pub is_transitioning: bool,
    /// Whether autoplay is advancing
    pub autoplay_enabled: bool,
    /// Whether autoplay will resume by itself after a manual navigation
    pub cooldown_active: bool,
}
