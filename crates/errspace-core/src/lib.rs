//! # errspace-core
//!
//! Ambient support shared by the errspace crates.
//!
//! ## Modules
//!
//! - `kprint` - Kernel-style leveled printing to stderr
//! - `env` - Environment variable utilities
//! - `error` - Registry setup error types

pub mod kprint;
pub mod env;
pub mod error;

// Re-exports for convenience
pub use error::{RegistryError, RegistryResult};
pub use env::{env_get_bool, env_get_opt};
pub use kprint::LogLevel;
