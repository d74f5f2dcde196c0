//! Platform-native error resolution and the platform `errno` slot.
//!
//! Only this module talks to the C library. Everything above it deals in
//! plain `i32` codes and strings.

cfg_if::cfg_if! {
    if #[cfg(unix)] {
        mod unix;
        pub use unix::*;
    } else {
        mod fallback;
        pub use fallback::*;
    }
}

/// Placeholder used when the platform resolver produces no text.
///
/// Same wording as glibc's `strerror` for codes it does not know.
pub fn unknown_error(code: i32) -> String {
    format!("Unknown error {}", code)
}
