// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! LeafBase CLI Tool
//!
//! Command-line interface for the B+-Tree virtual filesystem.

use clap::{Parser, Subcommand};

mod commands;

use commands::{demo, exec, shell};

#[derive(Parser)]
#[command(name = "leafbase")]
#[command(version = "0.1.0")]
#[command(about = "LeafBase CLI - B+-Tree virtual filesystem", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive shell
    Shell {
        /// Tree fan-out for the filesystem index
        #[arg(short, long, default_value_t = 4)]
        order: usize,
    },

    /// Apply a batch of commands to a fresh filesystem
    Exec {
        /// Commands to run, each quoted (e.g. "mkdir a" "ls /")
        commands: Vec<String>,

        /// Tree fan-out for the filesystem index
        #[arg(short, long, default_value_t = 4)]
        order: usize,

        /// Don't echo each command before its output
        #[arg(short, long)]
        quiet: bool,
    },

    /// Build the sample filesystem and print its structure
    Demo,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Shell { order } => shell::run(order),
        Commands::Exec {
            commands,
            order,
            quiet,
        } => exec::run(&commands, order, quiet),
        Commands::Demo => demo::run(),
    }
}
