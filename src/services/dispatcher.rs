use crate::cli::{Action, OptionSet, help};
use crate::domain::{ProcessRunner, TaskError};
use crate::infra::ToolboxConfig;
use crate::services::{BuildService, ComposeService};
use std::io::Write;
use std::sync::Arc;
use tracing::{debug, warn};

/// Executes the actions requested by an `OptionSet`, in precedence order
pub struct Dispatcher {
    compose: ComposeService,
    build: BuildService,
}

impl Dispatcher {
    pub fn new(runner: Arc<dyn ProcessRunner>, config: Arc<ToolboxConfig>) -> Self {
        Self {
            compose: ComposeService::new(runner.clone(), config.clone()),
            build: BuildService::new(runner, config),
        }
    }

    /// Help is terminal. Otherwise the first failing action ends the run and its
    /// error is returned; later actions do not execute.
    pub fn run(&self, options: &OptionSet, out: &mut dyn Write) -> Result<(), TaskError> {
        let extra = options.passthrough.as_slice();

        for action in options.actions() {
            debug!("ação: {:?}", action);
            match action {
                Action::ShowHelp => {
                    if let Err(err) = help::write_usage(out) {
                        warn!("  Não foi possível escrever a ajuda: {err}");
                    }
                    return Ok(());
                }
                Action::Init => self.init(extra)?,
                Action::Start => self.start(extra)?,
                Action::Stop => self
                    .compose
                    .stop(extra)
                    .map_err(|err| TaskError::Stop(format!("{err:#}")))?,
                Action::Clean => self
                    .compose
                    .down(extra)
                    .map_err(|err| TaskError::Clean(format!("{err:#}")))?,
                Action::ShowLogs => self
                    .compose
                    .logs(extra)
                    .map_err(|err| TaskError::Logs(format!("{err:#}")))?,
                Action::Passthrough => self
                    .compose
                    .raw(extra)
                    .map_err(|err| TaskError::Passthrough(format!("{err:#}")))?,
            }
        }

        Ok(())
    }

    fn init(&self, extra: &[String]) -> Result<(), TaskError> {
        self.build.ensure_artifact()?;
        self.compose
            .up(extra)
            .map_err(|err| TaskError::Init(format!("{err:#}")))
    }

    fn start(&self, extra: &[String]) -> Result<(), TaskError> {
        self.build.require_artifact()?;
        self.compose
            .start(extra)
            .map_err(|err| TaskError::Start(format!("{err:#}")))
    }
}
