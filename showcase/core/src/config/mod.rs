//! TOML Configuration File Support
//!
//! Timing for every animated piece of the page can be tuned from a TOML
//! file at `~/.config/pycoder-showcase/showcase.toml`.
//!
//! # Configuration Priority
//!
//! Configuration values are loaded with the following priority (highest first):
//! 1. CLI arguments (via [`ConfigOverrides`])
//! 2. Environment variables
//! 3. TOML configuration file
//! 4. Default values
//!
//! # Example Configuration
//!
//! ```toml
//! [testimonials]
//! transition_ms = 500
//! autoplay_interval_ms = 6000
//! cooldown_ms = 8000
//! autoplay = true
//!
//! [products]
//! transition_ms = 300
//!
//! [services]
//! transition_ms = 300
//!
//! [hero]
//! type_ms = 100
//! hold_ms = 2000
//! delete_ms = 50
//! code_step_ms = 700
//!
//! [newsletter]
//! submit_delay_ms = 1500
//! ```

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::newsletter::SUBMIT_DELAY;
use crate::rotator::RotatorConfig;
use crate::typewriter::{TypewriterConfig, CODE_STEP_DELAY};

// =============================================================================
// Error Types
// =============================================================================

/// Errors that can occur when loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file at {path}: {source}")]
    ReadError {
        /// The path that was attempted
        path: PathBuf,
        /// The underlying IO error
        source: std::io::Error,
    },

    /// Failed to parse TOML
    #[error("Failed to parse TOML config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

// =============================================================================
// Configuration Source Tracking
// =============================================================================

/// Tracks where a configuration value came from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Value from command-line argument
    Cli,
    /// Value from environment variable
    Env,
    /// Value from TOML configuration file
    File,
    /// Default value
    Default,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cli => write!(f, "CLI"),
            Self::Env => write!(f, "environment"),
            Self::File => write!(f, "config file"),
            Self::Default => write!(f, "default"),
        }
    }
}

// =============================================================================
// TOML Configuration Structures
// =============================================================================

/// `[testimonials]` section
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselToml {
    /// Cross-fade duration in milliseconds
    pub transition_ms: Option<u64>,

    /// Delay between automatic advances in milliseconds
    pub autoplay_interval_ms: Option<u64>,

    /// Autoplay pause after manual navigation in milliseconds
    pub cooldown_ms: Option<u64>,

    /// Whether the carousel advances on its own
    pub autoplay: Option<bool>,
}

/// `[products]` and `[services]` sections
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TabsToml {
    /// Tab swap duration in milliseconds
    pub transition_ms: Option<u64>,
}

/// `[hero]` section
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroToml {
    /// Delay between typed characters in milliseconds
    pub type_ms: Option<u64>,

    /// Pause on a completed phrase in milliseconds
    pub hold_ms: Option<u64>,

    /// Delay between deleted characters in milliseconds
    pub delete_ms: Option<u64>,

    /// Delay between revealed code chunks in milliseconds
    pub code_step_ms: Option<u64>,
}

/// `[newsletter]` section
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsletterToml {
    /// Simulated submission time in milliseconds
    pub submit_delay_ms: Option<u64>,
}

/// Top-level TOML configuration structure
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShowcaseToml {
    /// Testimonial carousel
    pub testimonials: CarouselToml,

    /// Featured product tabs
    pub products: TabsToml,

    /// Service category tabs
    pub services: TabsToml,

    /// Hero animations
    pub hero: HeroToml,

    /// Newsletter form
    pub newsletter: NewsletterToml,
}

// =============================================================================
// Main Configuration Struct
// =============================================================================

/// Resolved configuration for the whole page
#[derive(Clone, Debug)]
pub struct ShowcaseConfig {
    /// Testimonial carousel timing
    pub testimonials: RotatorConfig,

    /// Featured product tab timing
    pub products: RotatorConfig,

    /// Service category tab timing
    pub services: RotatorConfig,

    /// Hero typewriter pacing
    pub typewriter: TypewriterConfig,

    /// Delay between revealed code chunks
    pub code_step: Duration,

    /// Simulated newsletter submission time
    pub submit_delay: Duration,

    /// Path to the config file that was loaded (if any)
    pub config_file_path: Option<PathBuf>,

    /// Source of configuration values
    source: ConfigSource,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            testimonials: RotatorConfig::testimonials(),
            products: RotatorConfig::product_tabs(),
            services: RotatorConfig::service_tabs(),
            typewriter: TypewriterConfig::default(),
            code_step: CODE_STEP_DELAY,
            submit_delay: SUBMIT_DELAY,
            config_file_path: None,
            source: ConfigSource::Default,
        }
    }
}

impl ShowcaseConfig {
    /// Create a new configuration with default values
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the primary source of this configuration
    #[must_use]
    pub fn source(&self) -> ConfigSource {
        self.source
    }

    /// Set the configuration source
    pub fn set_source(&mut self, source: ConfigSource) {
        self.source = source;
    }

    /// Check every timing is usable
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] naming the first bad value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.testimonials.validate()?;
        self.products.validate()?;
        self.services.validate()?;

        if self.typewriter.type_delay.is_zero() || self.typewriter.delete_delay.is_zero() {
            return Err(ConfigError::ValidationError(
                "hero type and delete delays must be greater than zero".into(),
            ));
        }
        if self.code_step.is_zero() {
            return Err(ConfigError::ValidationError(
                "hero code step must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

// =============================================================================
// Configuration Loading
// =============================================================================

/// Get the default configuration file path
///
/// Returns `$XDG_CONFIG_HOME/pycoder-showcase/showcase.toml` or
/// `~/.config/pycoder-showcase/showcase.toml` if `XDG_CONFIG_HOME` is not set.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("pycoder-showcase").join("showcase.toml"))
}

/// Load configuration from all sources with proper priority
///
/// # Errors
///
/// Returns an error if the config file exists but cannot be parsed, or if
/// the resulting values fail validation. A missing config file is not an
/// error (defaults are used).
pub fn load_config() -> Result<ShowcaseConfig, ConfigError> {
    load_config_from_path(default_config_path())
}

/// Load configuration from a specific path
///
/// # Errors
///
/// Returns an error if the specified config file cannot be read or parsed,
/// or if the resulting values fail validation.
pub fn load_config_from_path(path: Option<PathBuf>) -> Result<ShowcaseConfig, ConfigError> {
    let mut config = ShowcaseConfig::default();

    if let Some(ref config_path) = path {
        if config_path.exists() {
            let toml_content =
                std::fs::read_to_string(config_path).map_err(|e| ConfigError::ReadError {
                    path: config_path.clone(),
                    source: e,
                })?;

            let toml_config: ShowcaseToml = toml::from_str(&toml_content)?;
            apply_toml_config(&mut config, &toml_config);
            config.config_file_path = Some(config_path.clone());
            config.source = ConfigSource::File;

            tracing::info!(
                path = %config_path.display(),
                "Loaded configuration from file"
            );
        } else {
            tracing::debug!(
                path = %config_path.display(),
                "Config file not found, using defaults"
            );
        }
    }

    apply_env_config(&mut config);
    config.validate()?;

    Ok(config)
}

fn apply_toml_config(config: &mut ShowcaseConfig, toml: &ShowcaseToml) {
    let carousel = &toml.testimonials;
    if let Some(ms) = carousel.transition_ms {
        config.testimonials.transition = Duration::from_millis(ms);
    }
    if let Some(ms) = carousel.autoplay_interval_ms {
        config.testimonials.autoplay_interval = Duration::from_millis(ms);
    }
    if let Some(ms) = carousel.cooldown_ms {
        config.testimonials.cooldown = Duration::from_millis(ms);
    }
    if let Some(autoplay) = carousel.autoplay {
        config.testimonials.autoplay = autoplay;
    }

    if let Some(ms) = toml.products.transition_ms {
        config.products.transition = Duration::from_millis(ms);
    }
    if let Some(ms) = toml.services.transition_ms {
        config.services.transition = Duration::from_millis(ms);
    }

    if let Some(ms) = toml.hero.type_ms {
        config.typewriter.type_delay = Duration::from_millis(ms);
    }
    if let Some(ms) = toml.hero.hold_ms {
        config.typewriter.hold = Duration::from_millis(ms);
    }
    if let Some(ms) = toml.hero.delete_ms {
        config.typewriter.delete_delay = Duration::from_millis(ms);
    }
    if let Some(ms) = toml.hero.code_step_ms {
        config.code_step = Duration::from_millis(ms);
    }

    if let Some(ms) = toml.newsletter.submit_delay_ms {
        config.submit_delay = Duration::from_millis(ms);
    }
}

fn env_millis(name: &str) -> Option<Duration> {
    let value = std::env::var(name).ok()?;
    match value.trim().parse::<u64>() {
        Ok(ms) => Some(Duration::from_millis(ms)),
        Err(_) => {
            tracing::warn!(var = name, value = %value, "Ignoring non-numeric environment override");
            None
        }
    }
}

fn apply_env_config(config: &mut ShowcaseConfig) {
    if let Some(transition) = env_millis("SHOWCASE_TRANSITION_MS") {
        config.testimonials.transition = transition;
        config.source = ConfigSource::Env;
    }
    if let Some(interval) = env_millis("SHOWCASE_AUTOPLAY_INTERVAL_MS") {
        config.testimonials.autoplay_interval = interval;
        config.source = ConfigSource::Env;
    }
    if let Some(cooldown) = env_millis("SHOWCASE_COOLDOWN_MS") {
        config.testimonials.cooldown = cooldown;
        config.source = ConfigSource::Env;
    }
    if let Ok(enabled) = std::env::var("SHOWCASE_AUTOPLAY") {
        config.testimonials.autoplay = enabled != "0" && enabled.to_lowercase() != "false";
        config.source = ConfigSource::Env;
    }
    if let Some(transition) = env_millis("SHOWCASE_TAB_TRANSITION_MS") {
        config.products.transition = transition;
        config.services.transition = transition;
        config.source = ConfigSource::Env;
    }
    if let Some(delay) = env_millis("SHOWCASE_SUBMIT_DELAY_MS") {
        config.submit_delay = delay;
        config.source = ConfigSource::Env;
    }
}

// =============================================================================
// CLI Override Support
// =============================================================================

/// Builder for applying CLI overrides to configuration
///
/// Use this after [`load_config`] to apply command-line argument overrides.
#[derive(Clone, Debug, Default)]
pub struct ConfigOverrides {
    /// Testimonial autoplay on/off
    pub autoplay: Option<bool>,

    /// Testimonial autoplay interval (milliseconds)
    pub autoplay_interval_ms: Option<u64>,

    /// Testimonial cross-fade duration (milliseconds)
    pub transition_ms: Option<u64>,
}

impl ConfigOverrides {
    /// Create a new empty set of overrides
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set autoplay override
    #[must_use]
    pub fn with_autoplay(mut self, autoplay: bool) -> Self {
        self.autoplay = Some(autoplay);
        self
    }

    /// Set autoplay interval override
    #[must_use]
    pub fn with_autoplay_interval_ms(mut self, ms: u64) -> Self {
        self.autoplay_interval_ms = Some(ms);
        self
    }

    /// Set transition duration override
    #[must_use]
    pub fn with_transition_ms(mut self, ms: u64) -> Self {
        self.transition_ms = Some(ms);
        self
    }

    /// Apply overrides to a configuration
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] if the overridden
    /// configuration is no longer valid.
    pub fn apply(&self, config: &mut ShowcaseConfig) -> Result<(), ConfigError> {
        if self.autoplay.is_some() || self.autoplay_interval_ms.is_some() || self.transition_ms.is_some() {
            config.source = ConfigSource::Cli;
        }

        if let Some(autoplay) = self.autoplay {
            config.testimonials.autoplay = autoplay;
        }
        if let Some(ms) = self.autoplay_interval_ms {
            config.testimonials.autoplay_interval = Duration::from_millis(ms);
        }
        if let Some(ms) = self.transition_ms {
            config.testimonials.transition = Duration::from_millis(ms);
        }

        config.validate()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Mutex, MutexGuard};
    use tempfile::NamedTempFile;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    /// Serialize tests that touch the process environment and start them clean
    fn clear_config_env_vars() -> MutexGuard<'static, ()> {
        let guard = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        std::env::remove_var("SHOWCASE_TRANSITION_MS");
        std::env::remove_var("SHOWCASE_AUTOPLAY_INTERVAL_MS");
        std::env::remove_var("SHOWCASE_COOLDOWN_MS");
        std::env::remove_var("SHOWCASE_AUTOPLAY");
        std::env::remove_var("SHOWCASE_TAB_TRANSITION_MS");
        std::env::remove_var("SHOWCASE_SUBMIT_DELAY_MS");
        guard
    }

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    // =========================================================================
    // Default Configuration Tests
    // =========================================================================

    #[test]
    fn test_default_config() {
        let config = ShowcaseConfig::default();

        assert_eq!(config.testimonials, RotatorConfig::testimonials());
        assert_eq!(config.products.transition, Duration::from_millis(300));
        assert_eq!(config.services.transition, Duration::from_millis(300));
        assert_eq!(config.typewriter.hold, Duration::from_millis(2000));
        assert_eq!(config.code_step, Duration::from_millis(700));
        assert_eq!(config.submit_delay, Duration::from_millis(1500));
        assert_eq!(config.source(), ConfigSource::Default);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_config_path() {
        if let Some(p) = default_config_path() {
            assert!(p.to_string_lossy().contains("pycoder-showcase"));
            assert!(p.to_string_lossy().ends_with("showcase.toml"));
        }
    }

    // =========================================================================
    // TOML Parsing Tests
    // =========================================================================

    #[test]
    fn test_parse_valid_toml() {
        let _env = clear_config_env_vars();
        let file = write_config(
            r#"
[testimonials]
transition_ms = 250
autoplay_interval_ms = 4000
cooldown_ms = 10000
autoplay = false

[products]
transition_ms = 150

[hero]
type_ms = 80
code_step_ms = 500

[newsletter]
submit_delay_ms = 900
"#,
        );

        let config = load_config_from_path(Some(file.path().to_path_buf())).unwrap();

        assert_eq!(config.testimonials.transition, Duration::from_millis(250));
        assert_eq!(config.testimonials.autoplay_interval, Duration::from_millis(4000));
        assert_eq!(config.testimonials.cooldown, Duration::from_millis(10_000));
        assert!(!config.testimonials.autoplay);
        assert_eq!(config.products.transition, Duration::from_millis(150));
        assert_eq!(config.services.transition, Duration::from_millis(300));
        assert_eq!(config.typewriter.type_delay, Duration::from_millis(80));
        assert_eq!(config.typewriter.delete_delay, Duration::from_millis(50));
        assert_eq!(config.code_step, Duration::from_millis(500));
        assert_eq!(config.submit_delay, Duration::from_millis(900));
        assert_eq!(config.source(), ConfigSource::File);
        assert_eq!(config.config_file_path.as_deref(), Some(file.path()));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let _env = clear_config_env_vars();
        let file = write_config("[services]\ntransition_ms = 120\n");

        let config = load_config_from_path(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(config.services.transition, Duration::from_millis(120));
        assert_eq!(config.testimonials, RotatorConfig::testimonials());
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let _env = clear_config_env_vars();
        let file = write_config("[testimonials\ntransition_ms = ");

        let result = load_config_from_path(Some(file.path().to_path_buf()));
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_zero_interval_with_autoplay_rejected() {
        let _env = clear_config_env_vars();
        let file = write_config("[testimonials]\nautoplay_interval_ms = 0\n");

        let result = load_config_from_path(Some(file.path().to_path_buf()));
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let _env = clear_config_env_vars();
        let path = PathBuf::from("/nonexistent/pycoder-showcase/showcase.toml");

        let config = load_config_from_path(Some(path)).unwrap();
        assert_eq!(config.source(), ConfigSource::Default);
        assert!(config.config_file_path.is_none());
    }

    // =========================================================================
    // Environment and CLI Priority Tests
    // =========================================================================

    #[test]
    fn test_env_overrides_file() {
        let _env = clear_config_env_vars();
        let file = write_config("[testimonials]\nautoplay_interval_ms = 4000\n");
        std::env::set_var("SHOWCASE_AUTOPLAY_INTERVAL_MS", "9000");
        std::env::set_var("SHOWCASE_TAB_TRANSITION_MS", "not-a-number");

        let config = load_config_from_path(Some(file.path().to_path_buf())).unwrap();
        std::env::remove_var("SHOWCASE_AUTOPLAY_INTERVAL_MS");
        std::env::remove_var("SHOWCASE_TAB_TRANSITION_MS");

        assert_eq!(config.testimonials.autoplay_interval, Duration::from_millis(9000));
        assert_eq!(config.products.transition, Duration::from_millis(300));
        assert_eq!(config.source(), ConfigSource::Env);
    }

    #[test]
    fn test_env_autoplay_flag() {
        let _env = clear_config_env_vars();
        std::env::set_var("SHOWCASE_AUTOPLAY", "false");

        let config = load_config_from_path(None).unwrap();
        std::env::remove_var("SHOWCASE_AUTOPLAY");

        assert!(!config.testimonials.autoplay);
    }

    #[test]
    fn test_cli_overrides() {
        let mut config = ShowcaseConfig::default();
        ConfigOverrides::new()
            .with_autoplay(false)
            .with_autoplay_interval_ms(3000)
            .with_transition_ms(200)
            .apply(&mut config)
            .unwrap();

        assert!(!config.testimonials.autoplay);
        assert_eq!(config.testimonials.autoplay_interval, Duration::from_millis(3000));
        assert_eq!(config.testimonials.transition, Duration::from_millis(200));
        assert_eq!(config.source(), ConfigSource::Cli);
    }

    #[test]
    fn test_empty_overrides_keep_source() {
        let mut config = ShowcaseConfig::default();
        ConfigOverrides::new().apply(&mut config).unwrap();
        assert_eq!(config.source(), ConfigSource::Default);
    }

    #[test]
    fn test_cli_zero_interval_rejected() {
        let mut config = ShowcaseConfig::default();
        let result = ConfigOverrides::new().with_autoplay_interval_ms(0).apply(&mut config);
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_config_source_display() {
        assert_eq!(ConfigSource::Cli.to_string(), "CLI");
        assert_eq!(ConfigSource::Env.to_string(), "environment");
        assert_eq!(ConfigSource::File.to_string(), "config file");
        assert_eq!(ConfigSource::Default.to_string(), "default");
    }
}
