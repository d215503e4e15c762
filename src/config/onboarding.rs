//! Onboarding flow configuration

use serde::Deserialize;

use crate::domain::onboarding::{
    gate::{MIN_DISPLAY_NAME_CHARS, MIN_USERNAME_CHARS},
    MAX_DISPLAY_NAME_CHARS, MAX_USERNAME_CHARS,
};

use super::error::ValidationError;

/// Limits applied when the profile draft is built from a session
#[derive(Debug, Clone, Deserialize)]
pub struct OnboardingConfig {
    /// Maximum display name length in characters
    #[serde(default = "default_max_display_name_chars")]
    pub max_display_name_chars: usize,

    /// Maximum username length in characters
    #[serde(default = "default_max_username_chars")]
    pub max_username_chars: usize,
}

fn default_max_display_name_chars() -> usize {
    MAX_DISPLAY_NAME_CHARS
}

fn default_max_username_chars() -> usize {
    MAX_USERNAME_CHARS
}

impl Default for OnboardingConfig {
    fn default() -> Self {
        Self {
            max_display_name_chars: default_max_display_name_chars(),
            max_username_chars: default_max_username_chars(),
        }
    }
}

impl OnboardingConfig {
    /// Validate the limits against the gate minimums
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_display_name_chars < MIN_DISPLAY_NAME_CHARS {
            return Err(ValidationError::DisplayNameMaxTooSmall(MIN_DISPLAY_NAME_CHARS));
        }
        if self.max_username_chars < MIN_USERNAME_CHARS {
            return Err(ValidationError::UsernameMaxTooSmall(MIN_USERNAME_CHARS));
        }
        Ok(())
    }
}
