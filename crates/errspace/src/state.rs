//! Per-thread "current error" slot.
//!
//! The slot lives in a thread-local cell, so each thread only ever sees
//! its own writes and no locking is involved. On unix every write is
//! mirrored into the platform `errno`, so C code sharing the thread sees
//! the same value. Reads come from the cell: a libc call made between
//! `set_error` and `get_error` cannot clobber it.
//!
//! To pick up a failure reported through `errno` by a syscall, call
//! [`capture_os_error`].

use std::cell::Cell;
use std::io;

use crate::codes::ERR_NONE;
use crate::{platform, Code};

thread_local! {
    static CURRENT_ERROR: Cell<i32> = const { Cell::new(ERR_NONE) };
}

/// Overwrite the calling thread's current error. Any value is accepted.
#[inline]
pub fn set_error(code: i32) {
    CURRENT_ERROR.with(|cell| cell.set(code));
    platform::set_os_errno(code);
}

/// The calling thread's current error (`0` if never set).
#[inline]
pub fn get_error() -> i32 {
    CURRENT_ERROR.with(|cell| cell.get())
}

/// Reset the current error to `0`.
#[inline]
pub fn clear_error() {
    set_error(ERR_NONE);
}

/// Copy the platform `errno` into the current error and return it.
///
/// Call right after a failing syscall, before anything else can touch
/// `errno`.
#[inline]
pub fn capture_os_error() -> i32 {
    let code = platform::os_errno();
    CURRENT_ERROR.with(|cell| cell.set(code));
    code
}

/// Store the code carried by an `io::Error`.
///
/// A wrapped [`Code`] keeps its value and errors built from a raw OS code
/// keep that code. Other synthetic errors become `ERR_UNSPECIFIED`.
pub fn set_error_from_io(err: &io::Error) {
    set_error(Code::from(err).raw());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::{ERR_SOCK_PARTIAL_SEND, ERR_UNSPECIFIED};
    use std::thread;

    // Each #[test] runs on its own thread, so the slot starts fresh.

    #[test]
    fn starts_at_zero() {
        assert_eq!(get_error(), 0);
    }

    #[test]
    fn set_then_get() {
        set_error(1001);
        assert_eq!(get_error(), 1001);
        set_error(-1);
        assert_eq!(get_error(), -1);
        set_error(i32::MAX);
        assert_eq!(get_error(), i32::MAX);
        clear_error();
        assert_eq!(get_error(), 0);
    }

    #[test]
    fn reads_do_not_modify() {
        set_error(2018);
        assert_eq!(get_error(), 2018);
        assert_eq!(get_error(), 2018);
    }

    #[test]
    fn mirrors_into_platform_errno() {
        set_error(13);
        assert_eq!(platform::os_errno(), 13);
    }

    #[test]
    fn capture_picks_up_errno() {
        set_error(0);
        platform::set_os_errno(2);
        assert_eq!(get_error(), 0);
        assert_eq!(capture_os_error(), 2);
        assert_eq!(get_error(), 2);
    }

    #[cfg(unix)]
    #[test]
    fn capture_after_failing_syscall() {
        let rc = unsafe { libc::close(-1) };
        assert_eq!(rc, -1);
        assert_eq!(capture_os_error(), libc::EBADF);
        assert_eq!(get_error(), libc::EBADF);
    }

    #[test]
    fn from_io_error() {
        set_error_from_io(&io::Error::from_raw_os_error(104));
        assert_eq!(get_error(), 104);
        set_error_from_io(&io::Error::new(io::ErrorKind::Other, "synthetic"));
        assert_eq!(get_error(), ERR_UNSPECIFIED);
    }

    #[test]
    fn from_io_error_carrying_application_code() {
        set_error_from_io(&io::Error::from(Code(ERR_SOCK_PARTIAL_SEND)));
        assert_eq!(get_error(), ERR_SOCK_PARTIAL_SEND);
    }

    #[test]
    fn threads_are_isolated() {
        set_error(7);
        let handles: Vec<_> = [1001, 2018, 4015]
            .into_iter()
            .map(|code| {
                thread::spawn(move || {
                    assert_eq!(get_error(), 0);
                    set_error(code);
                    for _ in 0..1000 {
                        thread::yield_now();
                        assert_eq!(get_error(), code);
                    }
                    code
                })
            })
            .collect();
        for h in handles {
            let code = h.join().unwrap();
            assert_ne!(get_error(), code);
        }
        assert_eq!(get_error(), 7);
    }
}
