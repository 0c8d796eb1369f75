// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Path canonicalisation utilities for the virtual filesystem.
//!
//! Centralised path handling so every operation stores and compares the
//! same canonical form: absolute, `.`/`..` collapsed, no trailing slash.
//! The canonical root is `"/"`; every other canonical path starts with
//! `/` and does not end with one.

use crate::error::{LeafError, LeafResult};

/// Resolve `path` against the current working directory `cwd` into its
/// canonical absolute form.
///
/// ## Input
/// - `cwd`: Canonical current directory (as produced by this function)
/// - `path`: Absolute or relative path; may contain `.`, `..`, and
///   redundant slashes
///
/// ## Output
/// - `Ok(String)`: Canonical absolute path
/// - `Err(LeafError::InvalidPath)`: Empty input
///
/// `..` above the root stays at the root, matching shell behaviour.
///
/// ## Example
/// ```rust
/// use leafbase::vfs::paths::canonicalize;
///
/// assert_eq!(canonicalize("/houses", "stark")?, "/houses/stark");
/// assert_eq!(canonicalize("/houses/stark", "..")?, "/houses");
/// assert_eq!(canonicalize("/", "../..")?, "/");
/// assert_eq!(canonicalize("/a", "/b/c/")?, "/b/c");
/// # Ok::<(), leafbase::LeafError>(())
/// ```
pub fn canonicalize(cwd: &str, path: &str) -> LeafResult<String> {
    if path.is_empty() {
        return Err(LeafError::InvalidPath {
            path: path.to_string(),
            reason: "empty path".to_string(),
        });
    }

    let mut segments: Vec<&str> = if path.starts_with('/') {
        Vec::new()
    } else {
        cwd.split('/').filter(|s| !s.is_empty()).collect()
    };

    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            name => segments.push(name),
        }
    }

    if segments.is_empty() {
        Ok("/".to_string())
    } else {
        Ok(format!("/{}", segments.join("/")))
    }
}

/// Parent of a canonical path; `None` for the root.
pub fn parent(path: &str) -> Option<String> {
    if path == "/" {
        return None;
    }
    match path.rfind('/') {
        Some(0) => Some("/".to_string()),
        Some(idx) => Some(path[..idx].to_string()),
        None => None,
    }
}

/// Last segment of a canonical path; the root has no name.
pub fn basename(path: &str) -> &str {
    if path == "/" {
        return "";
    }
    match path.rfind('/') {
        Some(idx) => &path[idx + 1..],
        None => path,
    }
}

/// Prefix every direct or transitive child key of `path` starts with.
///
/// `"/houses"` → `"/houses/"`, and the root maps to `"/"` itself.
pub fn child_prefix(path: &str) -> String {
    if path == "/" {
        "/".to_string()
    } else {
        format!("{}/", path)
    }
}
