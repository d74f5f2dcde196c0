//! Non-unix targets: text from `std::io::Error`, errno slot emulated.

use std::cell::Cell;

thread_local! {
    /// Stand-in for the platform errno on targets without one we can reach.
    static OS_ERRNO: Cell<i32> = const { Cell::new(0) };
}

/// Describe a platform error code using the standard library's formatter.
pub fn os_describe(code: i32) -> String {
    let text = std::io::Error::from_raw_os_error(code).to_string();
    let suffix = format!(" (os error {})", code);
    let text = text.strip_suffix(suffix.as_str()).unwrap_or(&text).trim();
    if text.is_empty() {
        super::unknown_error(code)
    } else {
        text.to_string()
    }
}

/// No errno table is available here; any non-zero code below the
/// application range is assumed to be a platform code.
pub fn is_known_os_code(code: i32) -> bool {
    code > 0 && code < crate::codes::APP_CODE_BASE
}

#[inline]
pub fn os_errno() -> i32 {
    OS_ERRNO.with(|cell| cell.get())
}

#[inline]
pub fn set_os_errno(code: i32) {
    OS_ERRNO.with(|cell| cell.set(code));
}
