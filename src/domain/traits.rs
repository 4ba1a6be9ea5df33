use super::{CommandOutput, CommandSpec};
use anyhow::Result;
use std::fmt::Debug;
use std::path::PathBuf;

/// Trait for running external programs
pub trait ProcessRunner: Send + Sync + Debug {
    /// Run a command attached to the current terminal and wait for it to exit
    fn run(&self, command: &CommandSpec) -> Result<CommandOutput>;

    /// Run a command with stdout and stderr captured
    fn capture(&self, command: &CommandSpec) -> Result<CommandOutput>;

    /// Resolve an executable on PATH
    fn resolve(&self, program: &str) -> Option<PathBuf>;
}
