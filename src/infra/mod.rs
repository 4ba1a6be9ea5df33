pub mod config;
pub mod process_adapter;

pub use config::{ToolboxConfig, Tools, load_config};
pub use process_adapter::SystemRunner;
