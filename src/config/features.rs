//! Feature flags configuration

use serde::Deserialize;

/// Feature flags for enabling/disabling functionality
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureFlags {
    /// Allow "register in Medellín anyway" when the detected city is
    /// outside coverage
    #[serde(default = "default_allow_coverage_override")]
    pub allow_coverage_override: bool,

    /// Show detailed error messages (disable in production!)
    #[serde(default)]
    pub verbose_errors: bool,
}

fn default_allow_coverage_override() -> bool {
    true
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            allow_coverage_override: default_allow_coverage_override(),
            verbose_errors: false,
        }
    }
}
