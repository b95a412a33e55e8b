//! Easing curves for cross-fades and reveals
//!
//! Surfaces receive raw progress values (0.0 to 1.0) from the rotators and
//! reveal latches and shape them with these curves before turning them into
//! opacity or offset.

use serde::{Deserialize, Serialize};

/// Easing functions for smooth animation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// Constant speed
    Linear,

    /// Slow start, fast end
    EaseIn,

    /// Fast start, slow end
    EaseOut,

    /// Slow start and end (default for cross-fades)
    #[default]
    EaseInOut,

    /// Strong deceleration, used for section reveals
    EaseOutCubic,
}

impl Easing {
    /// Apply the curve to a progress value
    ///
    /// Input is clamped to `0.0..=1.0`, so the output is too.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };

        match self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => 1.0 - (1.0 - t).powi(2),
            Self::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Self::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
        }
    }
}

/// Opacity pair for a cross-fade between an outgoing and incoming item
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CrossFade {
    /// Opacity of the item being replaced
    pub outgoing: f32,
    /// Opacity of the item taking its place
    pub incoming: f32,
}

impl CrossFade {
    /// Opacities at `progress` through the fade
    #[must_use]
    pub fn at(progress: f32, easing: Easing) -> Self {
        let incoming = easing.apply(progress);
        Self {
            outgoing: 1.0 - incoming,
            incoming,
        }
    }
}
