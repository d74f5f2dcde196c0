//! Current-error isolation and concurrent resolution across threads.

use std::sync::{Arc, Barrier};
use std::thread;

use errspace::codes::*;
use errspace::{describe, get_error, report_to, set_error};

#[test]
fn each_thread_sees_only_its_own_error() {
    let codes = [ERR_COMM_SEND, ERR_CTLD_NODES_BUSY, ERR_NODE_FORK_FAILED, 2, 13, -1];
    let barrier = Arc::new(Barrier::new(codes.len()));

    let handles: Vec<_> = codes
        .iter()
        .map(|&code| {
            let barrier = barrier.clone();
            thread::spawn(move || {
                set_error(code);
                // Every thread has written before any thread reads.
                barrier.wait();
                for _ in 0..10_000 {
                    assert_eq!(get_error(), code);
                }
                let mut out = Vec::new();
                report_to(&mut out, "worker").unwrap();
                (code, String::from_utf8(out).unwrap())
            })
        })
        .collect();

    for h in handles {
        let (code, line) = h.join().unwrap();
        assert_eq!(line, format!("worker: {}\n", describe(code)));
    }
}

#[test]
fn concurrent_describe_is_stable() {
    let expected: Vec<_> = builtin_entries().map(|e| (e.code, e.message)).collect();
    let expected = Arc::new(expected);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let expected = expected.clone();
            thread::spawn(move || {
                for _ in 0..100 {
                    for &(code, message) in expected.iter() {
                        assert_eq!(describe(code), message);
                    }
                    assert_eq!(describe(2), describe(2));
                }
            })
        })
        .collect();

    for h in handles {
        h.join().unwrap();
    }
}
