//! Main entry point for the existsync CLI.
//!
//! This is the command-line interface for symlink-aware existence checks.
//! It provides commands for:
//! - `check`: Report whether paths exist
//! - `assert`: Exit non-zero unless a path exists
//! - `trace`: Show the symlink chain behind a path
//! - `completions`: Generate shell completion scripts

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
    };

    // Initialize logging based on verbosity
    if let Err(e) = global.logger().install() {
        eprintln!("WARN: failed to install logger: {e}");
    }

    // Execute the command
    let result = match cli.command {
        cli::Command::Check(cmd) => cmd.execute(&global),
        cli::Command::Assert(cmd) => cmd.execute(&global),
        cli::Command::Trace(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
