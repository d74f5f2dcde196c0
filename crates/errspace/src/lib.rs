//! # errspace: partitioned error codes
//!
//! One `i32` error-code namespace shared by every component of a
//! distributed system, split at a fixed threshold:
//!
//! - codes below [`codes::APP_CODE_BASE`] (1000) are the platform's own
//!   `errno` values and are described by the C library;
//! - codes at or above it are application-defined and are described by a
//!   registry table.
//!
//! Any caller can set a code and any other caller can render it without
//! knowing which subsystem produced it.
//!
//! ## Quick Start
//!
//! ```rust
//! use errspace::{describe, get_error, set_error, report_to};
//! use errspace::codes::ERR_CTLD_INVALID_JOB_ID;
//!
//! set_error(ERR_CTLD_INVALID_JOB_ID);
//! assert_eq!(get_error(), ERR_CTLD_INVALID_JOB_ID);
//! assert_eq!(describe(get_error()), "Invalid job id specified");
//!
//! let mut line = Vec::new();
//! report_to(&mut line, "submit").unwrap();
//! assert_eq!(line, b"submit: Invalid job id specified\n");
//! ```
//!
//! ## Registering codes
//!
//! Collaborators declare their codes with [`error_codes!`] and install a
//! registry once at start-up, before anything resolves a code:
//!
//! ```ignore
//! mod sched_codes {
//!     errspace::error_codes! {
//!         table ENTRIES;
//!         ERR_SCHED_QUEUE_FULL = 100_000 => "Scheduler queue full",
//!     }
//! }
//!
//! errspace::registry::init_with(&[sched_codes::ENTRIES])?;
//! ```
//!
//! ## Guarantees
//!
//! - [`describe`] is total and never returns an empty string.
//! - [`set_error`] / [`get_error`] are per thread; threads never see each
//!   other's writes.
//! - [`report`] never fails.
//!
//! ## Environment
//!
//! | Variable                | Effect |
//! |-------------------------|--------|
//! | `ERRSPACE_STRICT`       | `init_with` rejects duplicate or sub-1000 application codes |
//! | `ERRSPACE_LOG_LEVEL`    | Log level for registry diagnostics (default `warn`) |
//! | `ERRSPACE_FLUSH_EPRINT` | Flush stderr after every diagnostic line |

use std::borrow::Cow;

mod entry;
#[macro_use]
mod macros;
pub mod codes;
mod config;
mod code;
pub mod platform;
pub mod registry;
mod state;
mod report;

// ── Public API ────────────────────────────────────────────────────

pub use entry::ErrorEntry;
pub use config::RegistryConfig;
pub use code::Code;
pub use codes::Category;
pub use registry::{Registry, RegistryBuilder};
pub use state::{capture_os_error, clear_error, get_error, set_error, set_error_from_io};
pub use report::{report, report_code_to, report_to};
pub use errspace_core::{RegistryError, RegistryResult};

/// Describe any error code.
///
/// Application codes come from the process-wide registry; everything else
/// is handed to the platform's resolver. Always returns text, never fails,
/// and may be called from any thread.
///
/// ```
/// assert_eq!(errspace::describe(0), "No error");
/// assert_eq!(errspace::describe(-1), "Unspecified error");
/// assert!(!errspace::describe(123_456).is_empty());
/// ```
#[inline]
pub fn describe(code: i32) -> Cow<'static, str> {
    registry::global().describe(code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::*;

    #[test]
    fn scenario_set_get_describe() {
        set_error(ERR_CTLD_INVALID_JOB_ID);
        assert_eq!(get_error(), ERR_CTLD_INVALID_JOB_ID);
        assert_eq!(describe(get_error()), "Invalid job id specified");
    }

    #[test]
    fn scenario_platform_code() {
        set_error(2);
        let text = describe(get_error());
        assert_eq!(text, platform::os_describe(2));
        assert!(registry::global().lookup(2).is_none());
        #[cfg(target_os = "linux")]
        assert_eq!(text, "No such file or directory");
    }

    #[test]
    fn every_builtin_entry_describes_to_its_message() {
        for entry in builtin_entries() {
            assert_eq!(describe(entry.code), entry.message, "{:?}", entry);
        }
    }

    #[test]
    fn describe_is_idempotent() {
        for code in [0, -1, 1, 2, ERR_COMM_SEND, 999, 1999, 123_456, i32::MIN] {
            assert_eq!(describe(code), describe(code));
            assert!(!describe(code).is_empty());
        }
    }
}
