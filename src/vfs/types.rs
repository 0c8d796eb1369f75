// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Entry descriptor types for the virtual filesystem.
//!
//! Every canonical path in the tree maps to a `Descriptor` naming what the
//! entry is. The serialised shape is `{"type": "dir"}` / `{"type": "file"}`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of filesystem entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// Directory: may contain child entries.
    Dir,

    /// File: a plain leaf entry with no children.
    File,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::Dir => write!(f, "dir"),
            EntryKind::File => write!(f, "file"),
        }
    }
}

/// Descriptor stored as the tree value for each path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Descriptor {
    /// What the entry is.
    #[serde(rename = "type")]
    pub kind: EntryKind,
}

impl Descriptor {
    /// Directory descriptor.
    pub fn dir() -> Self {
        Self {
            kind: EntryKind::Dir,
        }
    }

    /// File descriptor.
    pub fn file() -> Self {
        Self {
            kind: EntryKind::File,
        }
    }

    /// Whether this entry is a directory.
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }
}
