//! Command to show the symlink chain behind a path.

use crate::error::CliError;
use crate::utils::{path_parser, require_path, GlobalOptions};
use clap::Args;
use std::io::{self, Write};
use std::path::PathBuf;

/// Show every path visited while resolving a path.
#[derive(Args)]
pub struct TraceCommand {
    /// Path to resolve
    #[arg(value_name = "PATH", value_parser = path_parser())]
    pub path: PathBuf,
}

impl TraceCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        require_path(&self.path)?;
        let resolution = existsync::trace(&self.path)?;

        let stdout = io::stdout();
        let mut out = stdout.lock();
        if !global.quiet {
            for hop in resolution.chain() {
                writeln!(out, "{}", hop.display())?;
            }
        }
        writeln!(
            out,
            "{}",
            if resolution.exists() { "exists" } else { "missing" }
        )?;
        Ok(())
    }
}
