//! The built-in error table.
//!
//! # Code Ranges
//!
//! The `i32` code space is partitioned so platform and application codes
//! never collide:
//!
//! | Range             | Purpose                                     |
//! |-------------------|---------------------------------------------|
//! | `0`               | `ERR_NONE`: no error                       |
//! | `-1`              | `ERR_UNSPECIFIED`: unspecified error       |
//! | `< 1000`          | Platform errno, resolved by the OS          |
//! | `1000 - 1999`     | Communication layer                         |
//! | `2000 - 2999`     | Controller / scheduler                      |
//! | `3000 - 3999`     | Interconnect library                        |
//! | `4000 - 4099`     | Node daemon                                 |
//! | `4100 - 4199`     | User batch script                           |
//! | `5000 - 5999`     | Socket framing                              |
//! | `6000 - 6999`     | Authentication                              |
//! | other `>= 1000`   | Free for collaborators' own groups          |
//!
//! # Usage
//!
//! ```rust
//! use errspace::codes::*;
//!
//! assert_eq!(Category::of(ERR_CTLD_INVALID_JOB_ID), Category::Controller);
//! assert_eq!(Category::of(2), Category::Platform);
//! ```

mod comm;
mod ctld;
mod elan;
mod node;
mod socket;
mod auth;

pub use comm::*;
pub use ctld::*;
pub use elan::*;
pub use node::*;
pub use socket::*;
pub use auth::*;

use crate::ErrorEntry;

/// First application-defined code. Everything below belongs to the platform.
pub const APP_CODE_BASE: i32 = 1000;

/// No error.
pub const ERR_NONE: i32 = 0;

/// Generic failure with no more specific code.
pub const ERR_UNSPECIFIED: i32 = -1;

/// The two sentinel entries that head the table.
pub const SENTINEL_ENTRIES: &[ErrorEntry] = &[
    ErrorEntry::new(ERR_NONE, "ERR_NONE", "No error"),
    ErrorEntry::new(ERR_UNSPECIFIED, "ERR_UNSPECIFIED", "Unspecified error"),
];

/// Built-in groups in table order.
pub const BUILTIN_GROUPS: &[&[ErrorEntry]] = &[
    SENTINEL_ENTRIES,
    COMM_ENTRIES,
    CTLD_ENTRIES,
    ELAN_ENTRIES,
    NODE_ENTRIES,
    SOCKET_ENTRIES,
    AUTH_ENTRIES,
];

/// Every built-in entry, in table order.
pub fn builtin_entries() -> impl Iterator<Item = &'static ErrorEntry> {
    BUILTIN_GROUPS.iter().flat_map(|group| group.iter())
}

/// True if `code` lies in the application-defined range.
#[inline]
pub const fn is_application(code: i32) -> bool {
    code >= APP_CODE_BASE
}

/// Coarse classification of a code by the range it falls in.
///
/// Purely numeric: a code classifies even if no entry exists for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// `0`
    None,
    /// `-1`
    Unspecified,
    /// Below [`APP_CODE_BASE`], owned by the operating system
    Platform,
    Communication,
    Controller,
    Interconnect,
    NodeDaemon,
    BatchScript,
    /// Socket framing
    Protocol,
    Authentication,
    /// Application range outside every built-in group
    Application,
}

impl Category {
    pub const fn of(code: i32) -> Self {
        match code {
            ERR_NONE => Category::None,
            ERR_UNSPECIFIED => Category::Unspecified,
            i32::MIN..=999 => Category::Platform,
            1000..=1999 => Category::Communication,
            2000..=2999 => Category::Controller,
            3000..=3999 => Category::Interconnect,
            4000..=4099 => Category::NodeDaemon,
            4100..=4199 => Category::BatchScript,
            5000..=5999 => Category::Protocol,
            6000..=6999 => Category::Authentication,
            _ => Category::Application,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Category::None => "none",
            Category::Unspecified => "unspecified",
            Category::Platform => "platform",
            Category::Communication => "communication",
            Category::Controller => "controller",
            Category::Interconnect => "interconnect",
            Category::NodeDaemon => "node-daemon",
            Category::BatchScript => "batch-script",
            Category::Protocol => "protocol",
            Category::Authentication => "authentication",
            Category::Application => "application",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.pad(self.as_str())
    }
}
