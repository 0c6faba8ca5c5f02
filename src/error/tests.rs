//! Tests for error handling system

use super::*;
use std::io;
use std::path::PathBuf;

#[test]
fn test_error_severity() {
    assert_eq!(
        ScanError::read_error("a.js", io::Error::new(io::ErrorKind::NotFound, "gone")).severity(),
        ErrorSeverity::Warning
    );
    assert_eq!(
        ScanError::extraction_error("a.js", "Unexpected token").severity(),
        ErrorSeverity::Warning
    );
    assert_eq!(
        ScanError::traversal_error(
            "/tree/sub",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied")
        )
        .severity(),
        ErrorSeverity::Warning
    );

    assert_eq!(
        ScanError::io_error(io::Error::new(io::ErrorKind::Other, "boom")).severity(),
        ErrorSeverity::Error
    );

    assert_eq!(
        ScanError::TargetNotFound {
            path: PathBuf::from("/nope")
        }
        .severity(),
        ErrorSeverity::Critical
    );
    assert_eq!(ScanError::MissingTarget.severity(), ErrorSeverity::Critical);
}

#[test]
fn test_configuration_errors_are_critical() {
    let errors = vec![
        ScanError::MissingTarget,
        ScanError::RelativeTarget {
            path: PathBuf::from("rel/dir"),
        },
        ScanError::TargetNotFound {
            path: PathBuf::from("/missing"),
        },
        ScanError::NotADirectory {
            path: PathBuf::from("/etc/hosts"),
        },
        ScanError::config_error("threads must be at least 1"),
    ];

    for err in errors {
        assert!(err.is_configuration(), "{:?}", err);
        assert!(err.is_critical(), "{:?}", err);
    }

    assert!(!ScanError::extraction_error("x.js", "bad").is_configuration());
}

#[test]
fn test_user_message_distinguishes_not_found_from_not_directory() {
    let not_found = ScanError::TargetNotFound {
        path: PathBuf::from("/test/path"),
    }
    .user_message();
    assert!(not_found.contains("/test/path"));
    assert!(not_found.contains("does not exist"));

    let not_dir = ScanError::NotADirectory {
        path: PathBuf::from("/test/file.js"),
    }
    .user_message();
    assert!(not_dir.contains("not a directory"));
    assert!(!not_dir.contains("does not exist"));
}

#[test]
fn test_user_message_permission_denied_traversal() {
    let err = ScanError::traversal_error(
        "/tree/locked",
        io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
    );
    let msg = err.user_message();
    assert!(msg.contains("/tree/locked"));
    assert!(msg.contains("permission denied"));
}

#[test]
fn test_error_factory_methods() {
    match ScanError::io_error(io::Error::new(io::ErrorKind::NotFound, "not found")) {
        ScanError::Io { source } => assert_eq!(source.kind(), io::ErrorKind::NotFound),
        other => panic!("Expected Io error, got {:?}", other),
    }

    match ScanError::extraction_error("/tree/a.js", "Unexpected token") {
        ScanError::Extraction { path, message } => {
            assert_eq!(path, PathBuf::from("/tree/a.js"));
            assert_eq!(message, "Unexpected token");
        }
        other => panic!("Expected Extraction error, got {:?}", other),
    }

    match ScanError::config_error("Invalid config") {
        ScanError::Config { message } => assert_eq!(message, "Invalid config"),
        other => panic!("Expected Config error, got {:?}", other),
    }
}
