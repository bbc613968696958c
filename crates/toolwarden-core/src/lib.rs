pub mod config;
pub mod error;
pub mod hook;
pub mod types;

pub use config::{Config, ConfigPaths};
pub use error::ToolWardenError;
pub use hook::HookInput;
pub use types::{Action, ActionKind};
