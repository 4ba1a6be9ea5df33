mod command;
pub mod error;
pub mod traits;

pub use command::{CommandOutput, CommandSpec};
pub use error::{Check, EnvironmentError, TaskError, ToolboxError};
pub use traits::ProcessRunner;
