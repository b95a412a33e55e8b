//! Rotator timing configuration

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

/// Cross-fade window for the testimonial carousel
pub const TESTIMONIAL_TRANSITION: Duration = Duration::from_millis(500);

/// Autoplay countdown for the testimonial carousel
pub const TESTIMONIAL_AUTOPLAY_INTERVAL: Duration = Duration::from_millis(6000);

/// How long autoplay stays paused after the user navigates manually
pub const TESTIMONIAL_COOLDOWN: Duration = Duration::from_millis(8000);

/// Swap window for tab switchers (products, service categories)
pub const TAB_TRANSITION: Duration = Duration::from_millis(300);

/// Timing parameters for a [`Rotator`](super::Rotator)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotatorConfig {
    /// Delay between a navigation request and the new index becoming current
    pub transition: Duration,

    /// Delay between automatic advances
    pub autoplay_interval: Duration,

    /// Pause after a user-initiated navigation before autoplay resumes
    pub cooldown: Duration,

    /// Whether the rotator advances on its own
    pub autoplay: bool,
}

impl RotatorConfig {
    /// Autoplaying carousel used for client testimonials
    #[must_use]
    pub const fn testimonials() -> Self {
        Self {
            transition: TESTIMONIAL_TRANSITION,
            autoplay_interval: TESTIMONIAL_AUTOPLAY_INTERVAL,
            cooldown: TESTIMONIAL_COOLDOWN,
            autoplay: true,
        }
    }

    /// Manual-only tab switcher used for featured products
    #[must_use]
    pub const fn product_tabs() -> Self {
        Self {
            transition: TAB_TRANSITION,
            autoplay_interval: TESTIMONIAL_AUTOPLAY_INTERVAL,
            cooldown: Duration::ZERO,
            autoplay: false,
        }
    }

    /// Manual-only tab switcher used for service categories
    #[must_use]
    pub const fn service_tabs() -> Self {
        Self::product_tabs()
    }

    /// Set the transition window
    #[must_use]
    pub const fn with_transition(mut self, transition: Duration) -> Self {
        self.transition = transition;
        self
    }

    /// Set the autoplay interval
    #[must_use]
    pub const fn with_autoplay_interval(mut self, interval: Duration) -> Self {
        self.autoplay_interval = interval;
        self
    }

    /// Set the manual-navigation cooldown
    #[must_use]
    pub const fn with_cooldown(mut self, cooldown: Duration) -> Self {
        self.cooldown = cooldown;
        self
    }

    /// Enable or disable autoplay
    #[must_use]
    pub const fn with_autoplay(mut self, autoplay: bool) -> Self {
        self.autoplay = autoplay;
        self
    }

    /// Check the configuration is usable
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] when autoplay is enabled with
    /// a zero interval (the rotator would spin without ever resting).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.autoplay && self.autoplay_interval.is_zero() {
            return Err(ConfigError::ValidationError(
                "autoplay interval must be greater than zero when autoplay is enabled".into(),
            ));
        }
        Ok(())
    }
}

impl Default for RotatorConfig {
    fn default() -> Self {
        Self::testimonials()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        let testimonials = RotatorConfig::testimonials();
        assert_eq!(testimonials.transition, Duration::from_millis(500));
        assert_eq!(testimonials.autoplay_interval, Duration::from_millis(6000));
        assert_eq!(testimonials.cooldown, Duration::from_millis(8000));
        assert!(testimonials.autoplay);

        let tabs = RotatorConfig::product_tabs();
        assert_eq!(tabs.transition, Duration::from_millis(300));
        assert!(!tabs.autoplay);
        assert_eq!(RotatorConfig::service_tabs(), tabs);
    }

    #[test]
    fn test_zero_interval_rejected_only_with_autoplay() {
        let spinning = RotatorConfig::testimonials().with_autoplay_interval(Duration::ZERO);
        assert!(matches!(
            spinning.validate(),
            Err(ConfigError::ValidationError(_))
        ));

        let manual = spinning.with_autoplay(false);
        assert!(manual.validate().is_ok());
    }
}
