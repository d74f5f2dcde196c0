//! Environment variable utilities
//!
//! All runtime configuration of errspace comes from `ERRSPACE_*`
//! environment variables read through these helpers.
//!
//! | Variable                | Type | Default | Read by |
//! |-------------------------|------|---------|---------|
//! | `ERRSPACE_LOG_LEVEL`    | str  | `warn`  | `kprint::init` |
//! | `ERRSPACE_FLUSH_EPRINT` | bool | `false` | `kprint::init` |
//! | `ERRSPACE_STRICT`       | bool | `false` | `RegistryConfig::from_env` |
//!
//! ```ignore
//! use errspace_core::env::{env_get_bool, env_get_opt};
//!
//! let strict = env_get_bool("ERRSPACE_STRICT", false);
//! let level: Option<String> = env_get_opt("ERRSPACE_LOG_LEVEL");
//! ```

use std::str::FromStr;

/// Get environment variable as boolean.
///
/// Accepts "1", "true", "yes", "on" (case-insensitive) as true; any other
/// value is false. Unset returns the default.
#[inline]
pub fn env_get_bool(key: &str, default: bool) -> bool {
    match std::env::var(key) {
        Ok(val) => matches!(val.trim().to_lowercase().as_str(), "1" | "true" | "yes" | "on"),
        Err(_) => default,
    }
}

/// Get environment variable as optional value.
///
/// A value that fails to parse is treated as unset.
#[inline]
pub fn env_get_opt<T>(key: &str) -> Option<T>
where
    T: FromStr,
{
    std::env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

// ============================================================================
// Tests
// ============================================================================
