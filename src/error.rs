// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Error types for LeafBase operations.
//!
//! Provides structured error handling with detailed context. An absent key on
//! lookup or delete is not an error (the tree reports it as `None`); the
//! variants here cover invalid construction, broken structural invariants
//! (a bug, surfaced by `validate()` in tests), and the filesystem layer.

use std::fmt;

/// Standard Result type for all LeafBase operations.
pub type LeafResult<T> = Result<T, LeafError>;

/// Error types for LeafBase operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeafError {
    /// Invalid B+-Tree order.
    InvalidOrder { order: usize, min: usize },

    /// Structural invariant broken (detected by a full-tree validation).
    InvariantViolation { reason: String },

    /// Path does not exist in the filesystem.
    NotFound { path: String },

    /// Path exists but is not a directory.
    NotADirectory { path: String },

    /// Path already exists.
    AlreadyExists { path: String },

    /// Directory still has entries.
    DirectoryNotEmpty { path: String },

    /// Path is malformed or refers to a forbidden target.
    InvalidPath { path: String, reason: String },

    /// Shell command failed to parse or execute.
    CommandFailed { command: String, reason: String },
}

impl fmt::Display for LeafError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidOrder { order, min } => {
                write!(f, "B+-Tree order must be >= {}, got {}", min, order)
            }
            Self::InvariantViolation { reason } => {
                write!(f, "Tree invariant violated: {}", reason)
            }
            Self::NotFound { path } => {
                write!(f, "No such file or directory: {}", path)
            }
            Self::NotADirectory { path } => {
                write!(f, "Not a directory: {}", path)
            }
            Self::AlreadyExists { path } => {
                write!(f, "Already exists: {}", path)
            }
            Self::DirectoryNotEmpty { path } => {
                write!(f, "Directory not empty: {}", path)
            }
            Self::InvalidPath { path, reason } => {
                write!(f, "Invalid path '{}': {}", path, reason)
            }
            Self::CommandFailed { command, reason } => {
                write!(f, "Command '{}' failed: {}", command, reason)
            }
        }
    }
}

impl std::error::Error for LeafError {}
