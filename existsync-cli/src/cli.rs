//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{AssertCommand, CheckCommand, CompletionsCommand, TraceCommand};
use clap::{Parser, Subcommand};

/// Command-line tool for symlink-aware existence checks.
#[derive(Parser)]
#[command(name = "existsync")]
#[command(version, about = "Check whether paths exist, following symlinks", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Report whether each path exists
    Check(CheckCommand),

    /// Assert that a path exists (or does not, with --not)
    Assert(AssertCommand),

    /// Show the chain of symlinks followed for a path
    Trace(TraceCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
