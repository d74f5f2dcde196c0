//! Registry configuration

use errspace_core::env::env_get_bool;

/// How a [`RegistryBuilder`](crate::RegistryBuilder) treats table anomalies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Reject duplicate codes and application entries below the base
    /// instead of logging them (default: false)
    pub strict: bool,

    /// Log a warning for each anomaly accepted in lenient mode (default: true)
    pub warn_anomalies: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            strict: false,
            warn_anomalies: true,
        }
    }
}

impl RegistryConfig {
    /// Create a configuration with default (lenient) settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overridden by the environment.
    ///
    /// - `ERRSPACE_STRICT=1` turns on strict mode
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            strict: env_get_bool("ERRSPACE_STRICT", defaults.strict),
            ..defaults
        }
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn warn_anomalies(mut self, warn: bool) -> Self {
        self.warn_anomalies = warn;
        self
    }
}
