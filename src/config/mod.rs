//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment
//! variables using the `config` and `dotenvy` crates. Configuration is
//! loaded with the `PALCO_` prefix and nested values use double underscores
//! as separators.
//!
//! # Example
//!
//! ```no_run
//! use palco_onboarding::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod error;
mod features;
mod onboarding;

pub use error::{ConfigError, ValidationError};
pub use features::FeatureFlags;
pub use onboarding::OnboardingConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has working defaults, so loading succeeds with an empty
/// environment; the host app overrides what it needs.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Onboarding field limits
    #[serde(default)]
    pub onboarding: OnboardingConfig,

    /// Feature flags
    #[serde(default)]
    pub features: FeatureFlags,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `PALCO` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `PALCO__ONBOARDING__MAX_USERNAME_CHARS=30` -> `onboarding.max_username_chars = 30`
    /// - `PALCO__FEATURES__ALLOW_COVERAGE_OVERRIDE=false` -> `features.allow_coverage_override = false`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("PALCO")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.onboarding.validate()?;
        Ok(())
    }
}
