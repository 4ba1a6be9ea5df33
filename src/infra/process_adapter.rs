use crate::domain::{CommandOutput, CommandSpec, ProcessRunner};
use anyhow::{Context, Result};
use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};
use tracing::debug;

/// `ProcessRunner` backed by real child processes.
#[derive(Debug)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessRunner for SystemRunner {
    fn run(&self, spec: &CommandSpec) -> Result<CommandOutput> {
        debug!("executando: {spec}");
        let status = build_command(spec)
            .status()
            .with_context(|| format!("executando {spec}"))?;

        Ok(from_status(status))
    }

    fn capture(&self, spec: &CommandSpec) -> Result<CommandOutput> {
        debug!("executando (capturado): {spec}");
        let output = build_command(spec)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .with_context(|| format!("executando {spec}"))?;

        Ok(CommandOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }

    fn resolve(&self, program: &str) -> Option<PathBuf> {
        let found = which::which(program).ok();
        debug!("resolvendo {program}: {:?}", found);
        found
    }
}

fn build_command(spec: &CommandSpec) -> Command {
    let mut cmd = Command::new(spec.program());
    cmd.args(spec.get_args());

    if let Some(dir) = spec.get_current_dir() {
        cmd.current_dir(dir);
    }

    cmd
}

fn from_status(status: ExitStatus) -> CommandOutput {
    CommandOutput {
        code: status.code(),
        ..CommandOutput::default()
    }
}
