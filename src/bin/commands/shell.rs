// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Interactive shell (REPL) implementation.

use anyhow::Result;
use leafbase::vfs::{commands::apply, VirtualFileSystem};
use leafbase::Order;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

pub fn run(order: usize) -> Result<()> {
    let order = Order::new(order)?;
    let mut fs = VirtualFileSystem::with_order(order);

    println!("LeafBase Shell v{}", leafbase::VERSION);
    println!("Type help for commands, exit to quit\n");

    let mut rl = DefaultEditor::new()?;

    loop {
        let prompt = format!("{}$ ", fs.cwd());
        let readline = rl.readline(&prompt);

        match readline {
            Ok(line) => {
                let trimmed = line.trim();

                if trimmed.is_empty() {
                    continue;
                }

                // Add to history
                let _ = rl.add_history_entry(trimmed);

                if trimmed == "exit" {
                    println!("Goodbye!");
                    break;
                }

                match apply(&mut fs, trimmed) {
                    Ok(output) => {
                        if !output.is_empty() {
                            println!("{}", output);
                        }
                    }
                    Err(e) => eprintln!("Error: {}", e),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("Goodbye!");
                break;
            }
            Err(err) => {
                eprintln!("Error: {:?}", err);
                break;
            }
        }
    }

    Ok(())
}
