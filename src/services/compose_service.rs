use crate::domain::{CommandSpec, ProcessRunner};
use crate::infra::ToolboxConfig;
use anyhow::{Result, bail};
use std::sync::Arc;
use tracing::info;

/// Lifecycle commands against the sandbox compose project
pub struct ComposeService {
    runner: Arc<dyn ProcessRunner>,
    config: Arc<ToolboxConfig>,
}

impl ComposeService {
    pub fn new(runner: Arc<dyn ProcessRunner>, config: Arc<ToolboxConfig>) -> Self {
        Self { runner, config }
    }

    /// Creates and starts the sandbox, rebuilding images, detached.
    pub fn up(&self, extra: &[String]) -> Result<()> {
        info!(" Criando containers do sandbox...");
        self.compose(&["up", "--build", "-d"], extra, "criando containers")
    }

    pub fn start(&self, extra: &[String]) -> Result<()> {
        info!(" Iniciando containers...");
        self.compose(&["start"], extra, "iniciando containers")
    }

    pub fn stop(&self, extra: &[String]) -> Result<()> {
        info!(" Parando containers...");
        self.compose(&["stop"], extra, "parando containers")
    }

    /// Removes containers, networks and volumes.
    pub fn down(&self, extra: &[String]) -> Result<()> {
        info!(" Removendo containers e volumes...");
        self.compose(&["down", "-v"], extra, "removendo containers e volumes")
    }

    pub fn logs(&self, extra: &[String]) -> Result<()> {
        self.compose(&["logs", "-f"], extra, "acompanhando logs")
    }

    /// Forwards arbitrary arguments to the compose tool.
    pub fn raw(&self, args: &[String]) -> Result<()> {
        self.compose(&[], args, "repassando argumentos ao compose")
    }

    fn base_command(&self) -> CommandSpec {
        CommandSpec::new(self.config.tools.container_runtime.as_str())
            .arg("compose")
            .arg("--env-file")
            .arg(&self.config.env_file)
            .arg("-f")
            .arg(&self.config.compose_file)
            .current_dir(&self.config.project_dir)
    }

    fn compose(&self, subcommand: &[&str], extra: &[String], context: &str) -> Result<()> {
        let spec = self.base_command().args(subcommand).args(extra);
        let output = self.runner.run(&spec)?;

        if output.success() {
            return Ok(());
        }

        bail!(
            "{} retornou {} ({context})",
            self.config.tools.container_runtime,
            output.describe_status()
        )
    }
}
