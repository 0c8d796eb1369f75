// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Virtual filesystem over the B+-Tree index.
//!
//! One tree-wide map from canonical absolute path strings to descriptors.
//! The filesystem consumes the tree exclusively through its public API —
//! lookups, inserts, deletes, and range scans — and never reaches into
//! node internals.
//!
//! ## Listing semantics
//!
//! The listing of a directory `D` is every key strictly greater than `D`
//! that begins with `D + "/"` and contains no further `/` past that
//! prefix. It is computed with a single range scan from the prefix to a
//! sentinel upper bound, so a listing costs O(log n + children and
//! descendants of `D`).

use super::paths;
use super::types::{Descriptor, EntryKind};
use crate::btree::{BPlusTree, Order};
use crate::error::{LeafError, LeafResult};

/// Default tree fan-out for a filesystem instance.
const DEFAULT_ORDER: usize = 4;

/// Path-string to descriptor map with a current working directory.
///
/// Construction seeds the root directory `/`, which can never be removed.
#[derive(Debug)]
pub struct VirtualFileSystem {
    /// Backing index: canonical path → descriptor.
    tree: BPlusTree<String, Descriptor>,

    /// Canonical current working directory.
    cwd: String,
}

impl Default for VirtualFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl VirtualFileSystem {
    /// Create a filesystem holding only the root directory.
    pub fn new() -> Self {
        Self::with_order(Order::new(DEFAULT_ORDER).expect("default order is valid"))
    }

    /// Create a filesystem over a tree of the given fan-out.
    pub fn with_order(order: Order) -> Self {
        let mut tree = BPlusTree::new(order);
        tree.insert("/".to_string(), Descriptor::dir());
        Self {
            tree,
            cwd: "/".to_string(),
        }
    }

    /// Canonical current working directory.
    pub fn cwd(&self) -> &str {
        &self.cwd
    }

    /// Read access to the backing tree (structure dumps, statistics).
    pub fn tree(&self) -> &BPlusTree<String, Descriptor> {
        &self.tree
    }

    /// Create a directory.
    ///
    /// ## Input
    /// - `path`: Absolute or cwd-relative path
    ///
    /// ## Output
    /// - `Ok(canonical)`: Path of the created directory
    ///
    /// ## Error Conditions
    /// - `AlreadyExists`: An entry is already present at the path
    /// - `NotFound` / `NotADirectory`: The parent is missing or a file
    pub fn mkdir(&mut self, path: &str) -> LeafResult<String> {
        let target = self.prepare_create(path)?;
        self.tree.insert(target.clone(), Descriptor::dir());
        Ok(target)
    }

    /// Create an empty file; same parent rules as `mkdir`.
    pub fn touch(&mut self, path: &str) -> LeafResult<String> {
        let target = self.prepare_create(path)?;
        self.tree.insert(target.clone(), Descriptor::file());
        Ok(target)
    }

    /// List a directory (the cwd when `path` is `None`).
    ///
    /// ## Output
    /// - Entry names (relative to the directory) with their kinds, in
    ///   ascending order
    ///
    /// ## Error Conditions
    /// - `NotFound`: No entry at the path
    /// - `NotADirectory`: The entry is a file
    pub fn ls(&self, path: Option<&str>) -> LeafResult<Vec<(String, EntryKind)>> {
        let target = match path {
            Some(p) => self.resolve(p)?,
            None => self.cwd.clone(),
        };
        let descriptor = self.stat_canonical(&target)?;
        if !descriptor.is_dir() {
            return Err(LeafError::NotADirectory { path: target });
        }

        let prefix = paths::child_prefix(&target);
        let mut upper = prefix.clone();
        upper.push(char::MAX);

        let entries = self
            .tree
            .range(&prefix, &upper)
            .into_iter()
            .filter_map(|(key, descriptor)| {
                let name = key.strip_prefix(&prefix)?;
                if name.is_empty() || name.contains('/') {
                    return None;
                }
                Some((name.to_string(), descriptor.kind))
            })
            .collect();
        Ok(entries)
    }

    /// Change the working directory.
    pub fn cd(&mut self, path: &str) -> LeafResult<String> {
        let target = self.resolve(path)?;
        let descriptor = self.stat_canonical(&target)?;
        if !descriptor.is_dir() {
            return Err(LeafError::NotADirectory { path: target });
        }
        self.cwd = target.clone();
        Ok(target)
    }

    /// Remove a file or an empty directory.
    ///
    /// ## Error Conditions
    /// - `InvalidPath`: Removing the root
    /// - `NotFound`: No entry at the path
    /// - `DirectoryNotEmpty`: The directory still has entries
    pub fn rm(&mut self, path: &str) -> LeafResult<String> {
        let target = self.resolve(path)?;
        if target == "/" {
            return Err(LeafError::InvalidPath {
                path: target,
                reason: "cannot remove the root directory".to_string(),
            });
        }
        let descriptor = self.stat_canonical(&target)?;
        if descriptor.is_dir() && !self.ls(Some(target.as_str()))?.is_empty() {
            return Err(LeafError::DirectoryNotEmpty { path: target });
        }
        self.tree.delete(&target);

        // Leaving a removed directory keeps the shell in a dead path;
        // fall back to the nearest surviving ancestor.
        while self.cwd != "/" && self.tree.get(&self.cwd).is_none() {
            self.cwd = paths::parent(&self.cwd).unwrap_or_else(|| "/".to_string());
        }
        Ok(target)
    }

    /// Descriptor for a path.
    pub fn stat(&self, path: &str) -> LeafResult<(String, Descriptor)> {
        let target = self.resolve(path)?;
        let descriptor = self.stat_canonical(&target)?;
        Ok((target, descriptor))
    }

    /// Resolve a user path against the cwd.
    fn resolve(&self, path: &str) -> LeafResult<String> {
        paths::canonicalize(&self.cwd, path)
    }

    /// Descriptor at an already-canonical path.
    fn stat_canonical(&self, target: &str) -> LeafResult<Descriptor> {
        self.tree
            .get(&target.to_string())
            .copied()
            .ok_or_else(|| LeafError::NotFound {
                path: target.to_string(),
            })
    }

    /// Shared checks for `mkdir` and `touch`: canonical target must be
    /// free and its parent must be an existing directory.
    fn prepare_create(&self, path: &str) -> LeafResult<String> {
        let target = self.resolve(path)?;
        if self.tree.get(&target).is_some() {
            return Err(LeafError::AlreadyExists { path: target });
        }
        let parent = paths::parent(&target).ok_or_else(|| LeafError::InvalidPath {
            path: target.clone(),
            reason: "the root cannot be created".to_string(),
        })?;
        match self.tree.get(&parent) {
            Some(descriptor) if descriptor.is_dir() => Ok(target),
            Some(_) => Err(LeafError::NotADirectory { path: parent }),
            None => Err(LeafError::NotFound { path: parent }),
        }
    }
}
