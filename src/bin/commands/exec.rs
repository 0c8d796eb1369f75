// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! One-shot command batch against a fresh filesystem.

use anyhow::{bail, Context, Result};
use leafbase::vfs::{commands::apply, VirtualFileSystem};
use leafbase::Order;

pub fn run(commands: &[String], order: usize, quiet: bool) -> Result<()> {
    let order = Order::new(order).context("invalid --order")?;
    let mut fs = VirtualFileSystem::with_order(order);

    for command in commands {
        if !quiet {
            println!("{}$ {}", fs.cwd(), command);
        }
        match apply(&mut fs, command) {
            Ok(output) => {
                if !output.is_empty() {
                    println!("{}", output);
                }
            }
            Err(e) => bail!("{}", e),
        }
    }

    Ok(())
}
