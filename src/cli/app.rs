use crate::cli::OptionSet;
use crate::domain::{ProcessRunner, ToolboxError};
use crate::infra::{SystemRunner, ToolboxConfig};
use crate::services::{Dispatcher, EnvironmentValidator};
use std::io::Write;
use std::sync::Arc;

/// One invocation: validate the environment, then dispatch the requested actions.
pub struct App {
    validator: EnvironmentValidator,
    dispatcher: Dispatcher,
}

impl App {
    pub fn new(config: ToolboxConfig) -> Self {
        Self::with_runner(config, Arc::new(SystemRunner::new()))
    }

    pub fn with_runner(config: ToolboxConfig, runner: Arc<dyn ProcessRunner>) -> Self {
        let config = Arc::new(config);
        Self {
            validator: EnvironmentValidator::new(runner.clone(), config.clone()),
            dispatcher: Dispatcher::new(runner, config),
        }
    }

    pub fn run(&self, options: &OptionSet, out: &mut dyn Write) -> Result<(), ToolboxError> {
        self.validator.validate()?;
        self.dispatcher.run(options, out)?;
        Ok(())
    }
}
