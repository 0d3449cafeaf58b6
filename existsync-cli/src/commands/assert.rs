//! Command to assert that a path exists.

use crate::error::CliError;
use crate::utils::{path_parser, require_path, GlobalOptions};
use clap::Args;
use std::path::PathBuf;

/// Assert that a path exists, following symlinks.
#[derive(Args)]
pub struct AssertCommand {
    /// Path to check
    #[arg(value_name = "PATH", value_parser = path_parser())]
    pub path: PathBuf,

    /// Invert the assertion (fail if the path exists)
    #[arg(long)]
    pub not: bool,
}

impl AssertCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        require_path(&self.path)?;

        // 1. Check existence; cycles and I/O failures are errors, not answers
        let exists = existsync::exists(&self.path)?;

        // 2. Check assertion
        let success = if self.not { !exists } else { exists };

        // 3. Return with appropriate exit code
        if success {
            Ok(())
        } else {
            let msg = if self.not {
                format!("Assertion failed: {} exists", self.path.display())
            } else {
                format!("Assertion failed: {} does not exist", self.path.display())
            };
            Err(CliError::SemanticFailure(msg))
        }
    }
}
