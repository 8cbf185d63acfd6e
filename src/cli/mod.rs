//! Command-line interface wiring for the `barcode` binary.
//!
//! This module owns the clap definitions and delegates execution to one submodule
//! per command.

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod check;
pub mod common;
pub mod encode;
pub mod list;
pub mod utils;

/// Parsed CLI entrypoint for the `barcode` binary.
#[derive(Parser, Debug)]
#[command(name = "barcode", version, about = "Linear barcode symbology encoder")]
pub struct Cli {
    /// Log routing and mode-selection decisions to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Commands made available to end users.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Encode data and print its module pattern.
    Encode(encode::EncodeArgs),
    /// List the supported symbologies.
    List(list::ListArgs),
    /// Validate data against a symbology without printing the pattern.
    Check(check::CheckArgs),
}

/// Execute the requested command.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Encode(args) => encode::handle(args),
        Command::List(args) => list::handle(args),
        Command::Check(args) => check::handle(args),
    }
}
