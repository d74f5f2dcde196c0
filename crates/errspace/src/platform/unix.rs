//! Unix: `strerror_r` for text, `nix::errno::Errno` for the errno slot.

use std::ffi::CStr;

use nix::errno::Errno;

/// Buffer size for `strerror_r`. glibc's longest message is well under this.
const STRERROR_BUF: usize = 256;

/// Describe a platform error code with the C library's resolver.
///
/// Uses the XSI `strerror_r` (the `libc` crate links glibc's
/// `__xpg_strerror_r`), which is thread-safe. Codes the library does not
/// know get [`super::unknown_error`].
pub fn os_describe(code: i32) -> String {
    let mut buf = [0 as libc::c_char; STRERROR_BUF];

    // A non-zero return means "unknown code" or "buffer too small"; glibc
    // may or may not have written a message in either case.
    let _ = unsafe { libc::strerror_r(code, buf.as_mut_ptr(), buf.len()) };

    // The buffer is zero-initialised and strerror_r NUL-terminates, so
    // there is always a terminator inside it.
    let text = unsafe { CStr::from_ptr(buf.as_ptr()) }.to_string_lossy();
    if text.is_empty() {
        super::unknown_error(code)
    } else {
        text.into_owned()
    }
}

/// True if the platform defines `code` as an errno value.
///
/// `0` is not an error and reports `false`.
pub fn is_known_os_code(code: i32) -> bool {
    Errno::from_raw(code) != Errno::UnknownErrno
}

/// Read the calling thread's platform `errno`.
#[inline]
pub fn os_errno() -> i32 {
    Errno::last_raw()
}

/// Overwrite the calling thread's platform `errno`.
#[inline]
pub fn set_os_errno(code: i32) {
    Errno::set_raw(code)
}
