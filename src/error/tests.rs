//! Tests for the qalam-core error taxonomy.

use super::*;
use std::io;

#[test]
fn severity_display() {
    assert_eq!(format!("{}", Severity::Warning), "WARN");
    assert_eq!(format!("{}", Severity::Error), "ERROR");
    assert_eq!(format!("{}", Severity::Critical), "CRITICAL");
}

#[test]
fn severity_ordering() {
    assert!(Severity::Warning < Severity::Error);
    assert!(Severity::Error < Severity::Critical);
}

#[test]
fn codes_match_reserved_ranges() {
    assert!((1..100).contains(&Error::NullPointer.code()));
    assert!((1..100).contains(&Error::NotInitialized.code()));
    assert!((100..200).contains(&Error::OutOfMemory.code()));
    assert!((100..200).contains(&Error::invalid_range(0, 1, 0).code()));
    assert!((100..200).contains(&Error::invalid_position(0).code()));
    assert!((200..300).contains(&Error::DirectWriteInit("x".into()).code()));
    assert!((200..300).contains(&Error::D2dInit("x".into()).code()));
    assert!((400..500).contains(&Error::FileNotFound("a".into()).code()));
    assert!((400..500).contains(&Error::FileTooLarge { size: 1, max: 0 }.code()));
}

#[test]
fn out_of_memory_is_critical() {
    assert_eq!(Error::OutOfMemory.severity(), Severity::Critical);
    assert_eq!(
        Error::FileTooLarge { size: 1, max: 0 }.severity(),
        Severity::Critical
    );
    assert_eq!(Error::NullPointer.severity(), Severity::Error);
}

#[test]
fn display_messages_are_specific() {
    let err = Error::invalid_range(5, 10, 3);
    assert_eq!(format!("{err}"), "invalid range [5, 10) for length 3");

    let err = Error::invalid_position(7);
    assert_eq!(format!("{err}"), "invalid position: 7");
}

#[test]
fn file_errors_carry_io_source() {
    let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
    let err = Error::FileAccess(io_err);
    let std_err: &dyn std::error::Error = &err;
    assert!(std_err.source().is_some());
}

#[test]
fn result_alias_round_trips() {
    fn produce() -> Result<()> {
        Err(Error::NullPointer)
    }
    let res = produce();
    assert!(res.is_err());
    assert_eq!(res.unwrap_err().code(), 2);
}

#[test]
fn record_sets_and_clears_last_error() {
    clear_last_error();
    assert!(last_error().is_none());

    let _ = Error::invalid_position(42).record();
    let recorded = last_error().expect("an error should have been recorded");
    assert_eq!(recorded.code, 101);
    assert!(recorded.message.contains('4'));

    clear_last_error();
    assert!(last_error().is_none());
}
