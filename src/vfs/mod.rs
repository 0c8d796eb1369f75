// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Virtual filesystem layer over the B+-Tree index.
//!
//! Maps canonical path strings to dir/file descriptors stored in one
//! tree-wide index, with a small shell-command interpreter on top:
//!
//! ```text
//! shell / exec ──▶ commands::apply ──▶ VirtualFileSystem ──▶ BPlusTree
//! ```
//!
//! ## Example Usage
//!
//! ```rust
//! use leafbase::vfs::VirtualFileSystem;
//!
//! let mut fs = VirtualFileSystem::new();
//! fs.mkdir("projects")?;
//! fs.cd("projects")?;
//! fs.touch("notes.txt")?;
//!
//! let entries = fs.ls(None)?;
//! assert_eq!(entries.len(), 1);
//! # Ok::<(), leafbase::LeafError>(())
//! ```

pub mod commands;
mod fs;
pub mod paths;
mod types;

#[cfg(test)]
#[path = "paths_test.rs"]
mod paths_test;


// Re-export public API
pub use fs::VirtualFileSystem;
pub use types::{Descriptor, EntryKind};
