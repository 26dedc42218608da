//! Each write/close failure kind is reported distinctly.

use std::io;

use super::scripted::{ScriptedTarget, WriteOutcome};
use crate::error::{LogError, Stage};
use crate::format::Severity;
use crate::writer::{LogWriter, WriterState};

fn open_scripted() -> (LogWriter, ScriptedTarget) {
    let target = ScriptedTarget::new();
    let log = LogWriter::new();
    log.open_target(&target).unwrap();
    (log, target)
}

#[test]
fn os_write_error_is_surfaced_without_sync() {
    let (log, target) = open_scripted();
    target.set(|s| s.write = WriteOutcome::Fail);

    let err = log.write("lost", Severity::Status).unwrap_err();
    match &err {
        LogError::Write(e) => assert_eq!(e.kind(), io::ErrorKind::StorageFull),
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(target.syncs(), 0);
}

#[test]
fn short_write_is_a_distinct_error() {
    let (log, target) = open_scripted();
    target.set(|s| s.write = WriteOutcome::Short(4));

    let err = log.write("truncated", Severity::Error).unwrap_err();
    match err {
        LogError::ShortWrite { written, expected } => {
            assert_eq!(written, 4);
            assert_eq!(expected, "ERROR: truncated\n".len());
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(target.syncs(), 0);
    assert_eq!(target.contents_string(), "ERRO");
}

#[test]
fn sync_error_is_surfaced_after_bytes_are_accepted() {
    let (log, target) = open_scripted();
    target.set(|s| s.fail_sync = true);

    let err = log.write("maybe", Severity::Warning).unwrap_err();
    assert!(matches!(err, LogError::Flush(_)));
    assert_eq!(err.stage(), Stage::Flush);
    assert_eq!(target.contents_string(), "WARNING: maybe\n");
}

#[test]
fn writer_stays_usable_after_each_failure() {
    let (log, target) = open_scripted();

    target.set(|s| s.write = WriteOutcome::Fail);
    assert!(log.status("a").is_err());
    target.set(|s| s.write = WriteOutcome::Short(0));
    assert!(log.status("b").is_err());
    target.set(|s| {
        s.write = WriteOutcome::Full;
        s.fail_sync = true;
    });
    assert!(log.status("c").is_err());

    target.set(|s| s.fail_sync = false);
    log.status("d").unwrap();

    assert_eq!(log.state(), WriterState::Open);
    assert_eq!(target.contents_string(), "c\nd\n");
    assert_eq!(target.syncs(), 1);
}

#[test]
fn close_error_is_surfaced_and_writer_still_closes() {
    let (log, target) = open_scripted();
    target.set(|s| s.fail_close = true);

    let err = log.close().unwrap_err();
    assert!(matches!(err, LogError::Close(_)));
    assert!(target.closed());
    assert_eq!(log.state(), WriterState::Closed);
    assert!(matches!(log.status("x").unwrap_err(), LogError::Closed));
}

#[test]
fn open_error_is_surfaced_verbatim() {
    let target = ScriptedTarget::new();
    target.set(|s| s.fail_open = true);

    let log = LogWriter::new();
    let err = log.open_target(&target).unwrap_err();
    let source = err.io_error().expect("open error carries an io error");
    assert_eq!(source.kind(), io::ErrorKind::PermissionDenied);
    assert_eq!(log.state(), WriterState::Unopened);
}
