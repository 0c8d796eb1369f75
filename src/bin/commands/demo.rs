// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Sample filesystem for a quick look at the index structure.

use anyhow::Result;
use leafbase::vfs::{EntryKind, VirtualFileSystem};
use leafbase::LeafResult;

pub fn run() -> Result<()> {
    let fs = sample_filesystem()?;

    println!("Filesystem ready\n");
    println!("Index structure:");
    print!("{}", fs.tree().format_levels());
    println!("\nListing from /:");
    print_subtree(&fs, "/", 1)?;

    Ok(())
}

/// Two houses with three members each, as in the original demo script.
fn sample_filesystem() -> LeafResult<VirtualFileSystem> {
    let mut fs = VirtualFileSystem::new();

    fs.mkdir("houses")?;
    fs.cd("houses")?;

    fs.mkdir("stark")?;
    fs.cd("stark")?;
    fs.touch("ned.txt")?;
    fs.touch("jon_snow.txt")?;
    fs.touch("arya.txt")?;

    fs.cd("/houses")?;

    fs.mkdir("lannister")?;
    fs.cd("lannister")?;
    fs.touch("cersei.txt")?;
    fs.touch("jaime.txt")?;
    fs.touch("tyrion.txt")?;

    fs.cd("/")?;
    Ok(fs)
}

/// Indented recursive listing.
fn print_subtree(fs: &VirtualFileSystem, path: &str, depth: usize) -> LeafResult<()> {
    for (name, kind) in fs.ls(Some(path))? {
        let indent = "  ".repeat(depth);
        match kind {
            EntryKind::Dir => {
                println!("{}{}/", indent, name);
                let child = if path == "/" {
                    format!("/{}", name)
                } else {
                    format!("{}/{}", path, name)
                };
                print_subtree(fs, &child, depth + 1)?;
            }
            EntryKind::File => println!("{}{}", indent, name),
        }
    }
    Ok(())
}
