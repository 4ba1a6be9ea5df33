use crate::domain::{CommandSpec, EnvironmentError, ProcessRunner};
use crate::infra::ToolboxConfig;
use std::sync::Arc;
use tracing::{debug, info};

/// One-shot presence and version checks for the external toolchain
pub struct EnvironmentValidator {
    runner: Arc<dyn ProcessRunner>,
    config: Arc<ToolboxConfig>,
}

impl EnvironmentValidator {
    pub fn new(runner: Arc<dyn ProcessRunner>, config: Arc<ToolboxConfig>) -> Self {
        Self { runner, config }
    }

    /// Runs every check in order and stops at the first failure.
    pub fn validate(&self) -> Result<(), EnvironmentError> {
        let tools = &self.config.tools;

        if self.runner.resolve(&tools.container_runtime).is_none() {
            return Err(EnvironmentError::ContainerRuntimeMissing(
                tools.container_runtime.clone(),
            ));
        }

        let version = self.compose_version()?;
        let supported = parse_major_version(&version)
            .is_some_and(|major| major >= self.config.min_compose_major);
        if !supported {
            return Err(EnvironmentError::ComposeVersionUnsupported {
                found: version,
                minimum: self.config.min_compose_major,
            });
        }
        debug!("docker compose {version}");

        if self.runner.resolve(&tools.java).is_none() {
            return Err(EnvironmentError::JavaRuntimeMissing(tools.java.clone()));
        }

        if self.runner.resolve(&tools.build_tool).is_none() {
            return Err(EnvironmentError::BuildToolMissing(tools.build_tool.clone()));
        }

        info!(" Ambiente verificado");
        Ok(())
    }

    fn compose_version(&self) -> Result<String, EnvironmentError> {
        let runtime = &self.config.tools.container_runtime;
        let spec = CommandSpec::new(runtime.as_str()).args(["compose", "version", "--short"]);

        match self.runner.capture(&spec) {
            Ok(output) if output.success() => Ok(output.stdout.trim().to_string()),
            Ok(output) => {
                debug!("{spec} retornou {}: {}", output.describe_status(), output.stderr.trim());
                Err(EnvironmentError::ComposePluginMissing(runtime.clone()))
            }
            Err(err) => {
                debug!("{spec} não executou: {err:#}");
                Err(EnvironmentError::ComposePluginMissing(runtime.clone()))
            }
        }
    }
}

/// Major component of a compose version string such as `2.24.1`, `v2.20.2` or
/// `2.27.0-desktop.1`. `None` when it cannot be read, which callers treat as unsupported.
pub fn parse_major_version(version: &str) -> Option<u32> {
    let version = version.trim();
    let version = version.strip_prefix('v').unwrap_or(version);
    version.split('.').next()?.trim().parse().ok()
}
