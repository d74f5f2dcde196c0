use std::process::{Command, Output};

fn errspace(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_errspace"))
        .args(args)
        .env_remove("ERRSPACE_STRICT")
        .env("ERRSPACE_LOG_LEVEL", "off")
        .output()
        .expect("spawn errspace")
}

#[test]
fn perror_no_error() {
    let out = errspace(&["perror", "submit", "0"]);
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stderr), "submit: No error\n");
    assert!(out.stdout.is_empty());
}

#[test]
fn perror_application_code() {
    let out = errspace(&["perror", "submit", "2018"]);
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stderr), "submit: Invalid job id specified\n");
}

#[test]
fn perror_unspecified() {
    let out = errspace(&["perror", "cancel", "-1"]);
    assert_eq!(String::from_utf8_lossy(&out.stderr), "cancel: Unspecified error\n");
}

#[test]
fn describe_codes_on_stdout() {
    let out = errspace(&["5004", "6000"]);
    assert!(out.status.success());
    assert_eq!(
        String::from_utf8_lossy(&out.stdout),
        "5004\tSocket timed out on send/recv operation\n6000\tInvalid authentication credential\n"
    );
}

#[test]
fn bad_code_exits_two() {
    let out = errspace(&["perror", "submit", "ENOENT"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(out.stdout.is_empty());
}
