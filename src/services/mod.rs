mod build_service;
mod compose_service;
mod dispatcher;
mod environment;

pub use build_service::BuildService;
pub use compose_service::ComposeService;
pub use dispatcher::Dispatcher;
pub use environment::{EnvironmentValidator, parse_major_version};
