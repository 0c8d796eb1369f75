// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Tests for error display formatting.

use crate::error::LeafError;

#[test]
fn test_invalid_order_display() {
    let err = LeafError::InvalidOrder { order: 2, min: 3 };
    assert_eq!(err.to_string(), "B+-Tree order must be >= 3, got 2");
}

#[test]
fn test_not_found_display() {
    let err = LeafError::NotFound {
        path: "/houses/tully".to_string(),
    };
    assert_eq!(err.to_string(), "No such file or directory: /houses/tully");
}

#[test]
fn test_directory_not_empty_display() {
    let err = LeafError::DirectoryNotEmpty {
        path: "/houses".to_string(),
    };
    assert_eq!(err.to_string(), "Directory not empty: /houses");
}

#[test]
fn test_command_failed_display() {
    let err = LeafError::CommandFailed {
        command: "mv".to_string(),
        reason: "unknown command".to_string(),
    };
    assert_eq!(err.to_string(), "Command 'mv' failed: unknown command");
}

#[test]
fn test_errors_are_std_errors() {
    fn assert_error<E: std::error::Error>(_e: &E) {}
    assert_error(&LeafError::InvariantViolation {
        reason: "leaf chain broken".to_string(),
    });
}
