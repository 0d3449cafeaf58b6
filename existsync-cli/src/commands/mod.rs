//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `check`: Report whether paths exist
//! - `assert`: Assert that a path exists (or not)
//! - `trace`: Show the symlink chain behind a path
//! - `completions`: Generate shell completion scripts

pub mod assert;
pub mod check;
pub mod completions;
pub mod trace;

pub use assert::AssertCommand;
pub use check::CheckCommand;
pub use completions::CompletionsCommand;
pub use trace::TraceCommand;
