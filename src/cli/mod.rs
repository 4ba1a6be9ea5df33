pub mod app;
pub mod help;
pub mod options;

pub use app::App;
pub use options::{Action, OptionSet};
