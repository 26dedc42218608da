//! Concurrent writers never interleave lines.

use std::collections::HashSet;
use std::fs;
use std::sync::{Arc, Barrier};
use std::thread;

use crate::format::Severity;
use crate::io::InMemorySink;
use crate::writer::LogWriter;

#[test]
fn hundred_concurrent_writes_land_intact() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("concurrent.log");

    let log = Arc::new(LogWriter::new());
    log.open(&path).unwrap();

    let barrier = Arc::new(Barrier::new(100));
    let handles: Vec<_> = (0..100)
        .map(|i| {
            let log = Arc::clone(&log);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                log.write(&format!("message number {i:03}"), Severity::Status)
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap().unwrap();
    }

    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 100);

    let got: HashSet<&str> = lines.iter().copied().collect();
    let expected: HashSet<String> = (0..100).map(|i| format!("message number {i:03}")).collect();
    assert_eq!(got.len(), 100);
    for line in got {
        assert!(expected.contains(line), "unexpected line: {line:?}");
    }
}

#[test]
fn mixed_severities_from_many_threads_are_whole_lines() {
    let sink = InMemorySink::new("mem");
    let log = Arc::new(LogWriter::new());
    log.open_target(&sink).unwrap();

    let handles: Vec<_> = (0..8)
        .map(|t| {
            let log = Arc::clone(&log);
            thread::spawn(move || {
                for i in 0..50 {
                    let sev = match i % 3 {
                        0 => Severity::Status,
                        1 => Severity::Warning,
                        _ => Severity::Error,
                    };
                    log.write(&format!("t{t}-{i}-{}", "x".repeat(64)), sev)
                        .unwrap();
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    let content = sink.contents_string();
    assert!(content.ends_with('\n'));
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 400);
    for line in &lines {
        let body = line
            .strip_prefix("WARNING: ")
            .or_else(|| line.strip_prefix("ERROR: "))
            .unwrap_or(line);
        assert!(body.starts_with('t'), "torn line: {line:?}");
        assert!(body.ends_with(&"x".repeat(64)), "torn line: {line:?}");
    }
    assert_eq!(sink.sync_count(), 400);
}

#[test]
fn close_waits_for_writers_and_later_writes_fail() {
    let sink = InMemorySink::new("mem");
    let log = Arc::new(LogWriter::new());
    log.open_target(&sink).unwrap();

    let writers: Vec<_> = (0..4)
        .map(|t| {
            let log = Arc::clone(&log);
            thread::spawn(move || {
                let mut ok = 0usize;
                for i in 0..100 {
                    if log.status(&format!("w{t}-{i}")).is_ok() {
                        ok += 1;
                    }
                }
                ok
            })
        })
        .collect();

    log.close().unwrap();
    let succeeded: usize = writers.into_iter().map(|h| h.join().unwrap()).sum();

    // Exactly the successful writes made it out, each as a whole line.
    let content = sink.contents_string();
    assert_eq!(content.lines().count(), succeeded);
    assert!(content.is_empty() || content.ends_with('\n'));
}
