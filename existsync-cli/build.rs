//! Build script for existsync-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
fn build_cli() -> Command {
    let path_arg = || Arg::new("path").value_name("PATH").required(true);

    Command::new("existsync")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Check whether paths exist, following symlinks")
        .long_about(
            "Resolve paths through chains of symbolic links and report whether they exist. \
             Cyclic symlink chains are reported as errors (exit code 3).",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .subcommands(vec![
            Command::new("check")
                .about("Report whether each path exists")
                .arg(path_arg().num_args(1..))
                .arg(
                    Arg::new("format")
                        .long("format")
                        .help("Output format (text or json)")
                        .env("EXISTSYNC_FORMAT"),
                ),
            Command::new("assert")
                .about("Assert that a path exists (or does not, with --not)")
                .arg(path_arg())
                .arg(
                    Arg::new("not")
                        .long("not")
                        .help("Invert the assertion")
                        .action(clap::ArgAction::SetTrue),
                ),
            Command::new("trace")
                .about("Show the chain of symlinks followed for a path")
                .arg(path_arg()),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("existsync.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
