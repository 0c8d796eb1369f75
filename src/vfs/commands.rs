// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Shell command interpreter for the virtual filesystem.
//!
//! One whitespace-separated command per line. Shared by the interactive
//! shell and the one-shot `exec` subcommand; `exit` is the caller's
//! concern, everything else lands here.

use super::fs::VirtualFileSystem;
use crate::error::{LeafError, LeafResult};

/// Help text for the `help` command.
const HELP: &str = "Commands:
  mkdir <path>   Create a directory
  touch <path>   Create an empty file
  ls [path]      List a directory
  cd [path]      Change directory (defaults to /)
  rm <path>      Remove a file or empty directory
  stat <path>    Show an entry's descriptor as JSON
  pwd            Print the working directory
  tree           Dump the index structure level by level
  help           Show this help
  exit           Leave the shell";

/// Parse and apply one command line, returning its printable output.
///
/// ## Input
/// - `vfs`: Filesystem to operate on
/// - `line`: Raw command line
///
/// ## Output
/// - `Ok(output)`: Printable result (may be empty for a blank line)
/// - `Err(LeafError)`: Filesystem errors, or `CommandFailed` for unknown
///   or malformed commands
pub fn apply(vfs: &mut VirtualFileSystem, line: &str) -> LeafResult<String> {
    let mut parts = line.split_whitespace();
    let Some(op) = parts.next() else {
        return Ok(String::new());
    };
    let arg = parts.next();
    if parts.next().is_some() {
        return Err(trailing_operands(line));
    }

    match (op, arg) {
        ("mkdir", Some(path)) => {
            let created = vfs.mkdir(path)?;
            Ok(format!("Directory '{}' created", created))
        }
        ("touch", Some(path)) => {
            let created = vfs.touch(path)?;
            Ok(format!("File '{}' created", created))
        }
        ("ls", path) => {
            let entries = vfs.ls(path)?;
            if entries.is_empty() {
                return Ok("[empty]".to_string());
            }
            let names: Vec<String> = entries
                .into_iter()
                .map(|(name, kind)| match kind {
                    super::types::EntryKind::Dir => format!("{}/", name),
                    super::types::EntryKind::File => name,
                })
                .collect();
            Ok(names.join(" "))
        }
        ("cd", path) => {
            let target = vfs.cd(path.unwrap_or("/"))?;
            Ok(format!("Moved to {}", target))
        }
        ("rm", Some(path)) => {
            let removed = vfs.rm(path)?;
            Ok(format!("Removed '{}'", removed))
        }
        ("stat", Some(path)) => {
            let (target, descriptor) = vfs.stat(path)?;
            let json = serde_json::json!({ "path": target, "type": descriptor.kind });
            Ok(json.to_string())
        }
        ("pwd", None) => Ok(vfs.cwd().to_string()),
        ("tree", None) => Ok(vfs.tree().format_levels()),
        ("help", None) => Ok(HELP.to_string()),
        ("mkdir" | "touch" | "rm" | "stat", None) => Err(LeafError::CommandFailed {
            command: op.to_string(),
            reason: "missing operand".to_string(),
        }),
        ("pwd" | "tree" | "help", Some(_)) => Err(trailing_operands(line)),
        _ => Err(LeafError::CommandFailed {
            command: op.to_string(),
            reason: "unknown command (try 'help')".to_string(),
        }),
    }
}

fn trailing_operands(line: &str) -> LeafError {
    LeafError::CommandFailed {
        command: line.trim().to_string(),
        reason: "too many operands".to_string(),
    }
}
