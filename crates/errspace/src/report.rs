//! `perror`-style diagnostic printing.

use std::io::{self, Write};

use errspace_core::kprint;

use crate::{get_error, registry};

/// Print `"<label>: <description of the current error>"` on stderr.
///
/// Write failures are ignored; this never fails the caller.
pub fn report(label: &str) {
    let stderr = io::stderr();
    let mut out = stderr.lock();
    let _ = report_to(&mut out, label);
    if kprint::flush_enabled() {
        let _ = out.flush();
    }
}

/// Same line as [`report`], written to `out`.
pub fn report_to<W: Write>(out: &mut W, label: &str) -> io::Result<()> {
    // Read before any I/O can touch errno.
    let code = get_error();
    registry::global().report_code_to(out, label, code)
}

/// Same line as [`report`] for an explicit code, written to `out`.
pub fn report_code_to<W: Write>(out: &mut W, label: &str, code: i32) -> io::Result<()> {
    registry::global().report_code_to(out, label, code)
}
