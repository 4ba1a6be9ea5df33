use crate::domain::{CommandSpec, ProcessRunner, TaskError};
use crate::infra::ToolboxConfig;
use anyhow::{Result, bail};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Produces the plugin artifact with the build tool
pub struct BuildService {
    runner: Arc<dyn ProcessRunner>,
    config: Arc<ToolboxConfig>,
}

impl BuildService {
    pub fn new(runner: Arc<dyn ProcessRunner>, config: Arc<ToolboxConfig>) -> Self {
        Self { runner, config }
    }

    /// Path of the artifact, or `ArtifactMissing` when the version is unknown.
    pub fn artifact_path(&self) -> Result<PathBuf, TaskError> {
        self.config
            .artifact_path()
            .map_err(|err| TaskError::ArtifactMissing(format!("{err:#}")))
    }

    /// Existing artifact, never building it.
    pub fn require_artifact(&self) -> Result<PathBuf, TaskError> {
        let artifact = self.artifact_path()?;
        if !artifact.is_file() {
            return Err(TaskError::ArtifactMissing(format!(
                "{:?} não existe. Rode 'toolbox --init' primeiro.",
                artifact
            )));
        }
        Ok(artifact)
    }

    /// Builds the artifact unless it already exists.
    ///
    /// A failing build is an `Init` error; a build that succeeds without leaving the
    /// artifact behind is `ArtifactMissing`.
    pub fn ensure_artifact(&self) -> Result<PathBuf, TaskError> {
        let artifact = self.artifact_path()?;

        if artifact.is_file() {
            info!(" Artefato encontrado em {:?}, pulando build", artifact);
            return Ok(artifact);
        }

        self.package()
            .map_err(|err| TaskError::Init(format!("{err:#}")))?;

        if !artifact.is_file() {
            return Err(TaskError::ArtifactMissing(format!(
                "build concluído mas {:?} não foi gerado",
                artifact
            )));
        }

        Ok(artifact)
    }

    /// `clean package` with tests skipped, in the project directory.
    pub fn package(&self) -> Result<()> {
        let build_tool = &self.config.tools.build_tool;
        info!("  Construindo plugin com {build_tool}...");

        let spec = CommandSpec::new(build_tool.as_str())
            .args(["clean", "package", "-DskipTests"])
            .current_dir(&self.config.project_dir);
        let output = self.runner.run(&spec)?;

        if !output.success() {
            bail!("{build_tool} retornou {}", output.describe_status());
        }

        Ok(())
    }
}
