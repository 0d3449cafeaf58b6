//! Check command implementation.
//!
//! This module implements the `check` command, which reports whether each
//! given path exists, in text or JSON.

use crate::error::CliError;
use crate::utils::{display_path, path_parser, require_path, write_json, GlobalOptions};
use clap::{Args, ValueEnum};
use serde::Serialize;
use std::io::{self, Write};
use std::path::PathBuf;

/// Report whether each path exists.
#[derive(Args)]
pub struct CheckCommand {
    /// Paths to check
    #[arg(value_name = "PATH", required = true, value_parser = path_parser())]
    pub paths: Vec<PathBuf>,

    /// Output format
    #[arg(
        long,
        value_enum,
        default_value = "text",
        env = "EXISTSYNC_FORMAT",
        ignore_case = true
    )]
    pub format: OutputFormat,
}

/// Output format for the check command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `true`/`false` line per path
    Text,
    /// JSON array of objects
    Json,
}

/// One line of check output.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    /// The path as given on the command line.
    pub path: String,
    /// Whether it resolved to an existing entry.
    pub exists: bool,
}

impl CheckCommand {
    /// Execute the check command.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let reports = self
            .paths
            .iter()
            .map(|path| -> Result<CheckReport, CliError> {
                require_path(path)?;
                let resolution = existsync::trace(path)?;
                log::info!(
                    "{}: {} after {} hop(s)",
                    path.display(),
                    resolution.outcome(),
                    resolution.hops()
                );
                Ok(CheckReport {
                    path: display_path(path),
                    exists: resolution.exists(),
                })
            })
            .collect::<Result<Vec<_>, CliError>>()?;

        let stdout = io::stdout();
        let mut out = stdout.lock();
        match self.format {
            OutputFormat::Text => write_text(&mut out, &reports)?,
            OutputFormat::Json => write_json(&mut out, &reports)?,
        }
        Ok(())
    }
}

fn write_text<W: Write>(out: &mut W, reports: &[CheckReport]) -> Result<(), CliError> {
    if let [report] = reports {
        writeln!(out, "{}", report.exists)?;
        return Ok(());
    }
    for report in reports {
        writeln!(out, "{}\t{}", report.exists, report.path)?;
    }
    Ok(())
}
