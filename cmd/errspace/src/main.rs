//! errspace: look up error codes from the shell
//!
//! # Usage
//!
//! ```text
//! errspace <code>...              print "<code>\t<description>" per code
//! errspace list                   print every registry entry
//! errspace perror <label> <code>  print "<label>: <description>" on stderr
//! ```
//!
//! # Environment Variables
//!
//! - `ERRSPACE_LOG_LEVEL=debug` - Set log level (off, error, warn, info, debug, trace)
//! - `ERRSPACE_STRICT=1` - Refuse duplicate or sub-1000 application codes
//!
//! ```text
//! $ errspace 2018 2 -1
//! 2018    Invalid job id specified
//! 2       No such file or directory
//! -1      Unspecified error
//! ```

use std::io::{self, Write};
use std::process::ExitCode;

use errspace::{describe, registry, report, set_error, Category};
use errspace_core::{kdebug, kerror, kprint};

const USAGE: &str = "usage: errspace <code>... | errspace list | errspace perror <label> <code>";

fn parse_code(arg: &str) -> Option<i32> {
    arg.trim().parse().ok()
}

fn describe_codes(args: &[String]) -> ExitCode {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut status = ExitCode::SUCCESS;

    for arg in args {
        match parse_code(arg) {
            Some(code) => {
                kdebug!("{} is a {} code", code, Category::of(code));
                let _ = writeln!(out, "{}\t{}", code, describe(code));
            }
            None => {
                kerror!("not an error code: {:?}", arg);
                status = ExitCode::from(2);
            }
        }
    }
    status
}

fn list() -> ExitCode {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for entry in registry::global().entries() {
        let _ = writeln!(
            out,
            "{:>6}  {:<14}  {:<34}  {}",
            entry.code,
            Category::of(entry.code),
            entry.name,
            entry.message
        );
    }
    ExitCode::SUCCESS
}

fn perror(label: &str, arg: &str) -> ExitCode {
    match parse_code(arg) {
        Some(code) => {
            set_error(code);
            report(label);
            ExitCode::SUCCESS
        }
        None => {
            kerror!("not an error code: {:?}", arg);
            ExitCode::from(2)
        }
    }
}

fn main() -> ExitCode {
    kprint::init();

    if let Err(e) = registry::init_with(&[]) {
        kerror!("registry setup failed: {}", e);
        return ExitCode::FAILURE;
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        None | Some("-h") | Some("--help") => {
            println!("{}", USAGE);
            ExitCode::SUCCESS
        }
        Some("list") => list(),
        Some("perror") => match (args.get(1), args.get(2)) {
            (Some(label), Some(code)) => perror(label, code),
            _ => {
                kerror!("{}", USAGE);
                ExitCode::from(2)
            }
        },
        Some(_) => describe_codes(&args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_signed_codes() {
        assert_eq!(parse_code("2018"), Some(2018));
        assert_eq!(parse_code(" -1 "), Some(-1));
        assert_eq!(parse_code("ENOENT"), None);
        assert_eq!(parse_code("99999999999"), None);
    }
}
