use std::error::Error;
use std::fmt;
use std::io;

use crate::codes::{self, Category, ERR_UNSPECIFIED};
use crate::{registry, state};

/// An error code as a value, for callers that propagate errors with `?`
/// instead of through the current-error slot.
///
/// `Display` renders the same text as [`describe`](crate::describe).
///
/// ```
/// use errspace::Code;
/// use errspace::codes::ERR_NODE_FORK_FAILED;
///
/// let err = Code(ERR_NODE_FORK_FAILED);
/// assert_eq!(err.to_string(), "Slurmd could not fork batch job");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Code(pub i32);

impl Code {
    pub const NONE: Code = Code(codes::ERR_NONE);
    pub const UNSPECIFIED: Code = Code(ERR_UNSPECIFIED);

    /// The calling thread's current error.
    #[inline]
    pub fn last() -> Self {
        Code(state::get_error())
    }

    /// Make this the calling thread's current error.
    #[inline]
    pub fn set(self) {
        state::set_error(self.0)
    }

    #[inline]
    pub const fn raw(self) -> i32 {
        self.0
    }

    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 == codes::ERR_NONE
    }

    #[inline]
    pub const fn is_application(self) -> bool {
        codes::is_application(self.0)
    }

    #[inline]
    pub const fn category(self) -> Category {
        Category::of(self.0)
    }

    /// Symbolic name from the process-wide registry, if it has one.
    pub fn name(self) -> Option<&'static str> {
        registry::global().entry(self.0).map(|e| e.name)
    }
}

impl From<i32> for Code {
    fn from(code: i32) -> Self {
        Code(code)
    }
}

impl From<Code> for i32 {
    fn from(code: Code) -> Self {
        code.0
    }
}

// ── io::Error conversions ─────────────────────────────────────────

impl From<&io::Error> for Code {
    /// A wrapped `Code` comes back unchanged and raw OS errors keep their
    /// code. Anything else is `UNSPECIFIED`.
    fn from(err: &io::Error) -> Self {
        if let Some(code) = err.get_ref().and_then(|e| e.downcast_ref::<Code>()) {
            return *code;
        }
        err.raw_os_error().map_or(Code::UNSPECIFIED, Code)
    }
}

impl From<io::Error> for Code {
    fn from(err: io::Error) -> Self {
        Code::from(&err)
    }
}

impl From<Code> for io::Error {
    /// Positive platform codes become raw OS errors; everything else
    /// (sentinels, application codes) is wrapped.
    fn from(code: Code) -> Self {
        if code.0 > 0 && !code.is_application() {
            io::Error::from_raw_os_error(code.0)
        } else {
            io::Error::new(io::ErrorKind::Other, code)
        }
    }
}

// ── Display / Debug / Error ───────────────────────────────────────

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&registry::global().describe(self.0))
    }
}

impl fmt::Debug for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "Code({}: {})", self.0, name),
            None => write!(f, "Code({})", self.0),
        }
    }
}

impl Error for Code {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::*;

    #[test]
    fn display_matches_describe() {
        for code in [0, -1, 2, ERR_COMM_SEND, ERR_ELAN_BAD_SIGNAL, 77_777] {
            assert_eq!(Code(code).to_string(), crate::describe(code));
        }
    }

    #[test]
    fn debug_includes_name() {
        assert_eq!(format!("{:?}", Code(ERR_AUTH_FOPEN)), "Code(6001: ERR_AUTH_FOPEN)");
        assert_eq!(format!("{:?}", Code(77_777)), "Code(77777)");
    }

    #[test]
    fn last_and_set() {
        Code(ERR_SCRIPT_NON_ZERO_RETURN).set();
        assert_eq!(Code::last(), Code(ERR_SCRIPT_NON_ZERO_RETURN));
        assert_eq!(crate::get_error(), ERR_SCRIPT_NON_ZERO_RETURN);
    }

    #[test]
    fn classification() {
        assert!(Code::NONE.is_none());
        assert!(!Code(2).is_application());
        assert!(Code(ERR_CTLD_NODES_BUSY).is_application());
        assert_eq!(Code(ERR_CTLD_NODES_BUSY).category(), Category::Controller);
        assert_eq!(Code::UNSPECIFIED.category(), Category::Unspecified);
    }

    #[test]
    fn io_round_trip() {
        let code = Code::from(io::Error::from_raw_os_error(13));
        assert_eq!(code, Code(13));
        assert_eq!(io::Error::from(code).raw_os_error(), Some(13));

        let synthetic = Code::from(io::Error::new(io::ErrorKind::Other, "x"));
        assert_eq!(synthetic, Code::UNSPECIFIED);
        assert!(io::Error::from(Code::UNSPECIFIED).raw_os_error().is_none());
    }

    #[test]
    fn application_code_wrapped_in_io_error() {
        let err = io::Error::from(Code(ERR_SOCK_PARTIAL_SEND));
        assert!(err.raw_os_error().is_none());
        assert_eq!(err.to_string(), "Failed to send entire message");
        let inner = err.get_ref().and_then(|e| e.downcast_ref::<Code>());
        assert_eq!(inner, Some(&Code(ERR_SOCK_PARTIAL_SEND)));
    }

    #[test]
    fn application_code_survives_io_round_trip() {
        for code in [Code(ERR_SOCK_PARTIAL_SEND), Code(ERR_CTLD_INVALID_JOB_ID), Code(77_777)] {
            assert_eq!(Code::from(io::Error::from(code)), code);
        }
        assert_eq!(Code::from(io::Error::from(Code::NONE)), Code::NONE);
        assert_eq!(Code::from(io::Error::from(Code::UNSPECIFIED)), Code::UNSPECIFIED);
    }

    #[test]
    fn borrowed_io_error_conversion() {
        let err = io::Error::from(Code(ERR_AUTH_NET));
        assert_eq!(Code::from(&err), Code(ERR_AUTH_NET));
        assert_eq!(Code::from(&io::Error::from_raw_os_error(2)), Code(2));
    }

    #[test]
    fn question_mark_conversion() {
        fn open_missing() -> Result<(), Code> {
            std::fs::File::open("/definitely/not/here/errspace")?;
            Ok(())
        }
        let err = open_missing().unwrap_err();
        assert!(!err.is_application());
        assert!(!err.to_string().is_empty());
    }

    #[test]
    fn send_sync() {
        fn assert_send_sync<T: Send + Sync + 'static>() {}
        assert_send_sync::<Code>();
    }
}
