pub mod cli;
pub mod domain;
pub mod infra;
pub mod output;
pub mod services;

// Make test_support available for integration tests
pub mod test_support;

pub use cli::{Action, App, OptionSet};
pub use domain::{
    Check, CommandOutput, CommandSpec, EnvironmentError, ProcessRunner, TaskError, ToolboxError,
};
pub use infra::{SystemRunner, ToolboxConfig, load_config};
pub use services::{BuildService, ComposeService, Dispatcher, EnvironmentValidator};
