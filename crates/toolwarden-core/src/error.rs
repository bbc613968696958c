use thiserror::Error;

#[derive(Debug, Error)]
pub enum ToolWardenError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("invalid rule pattern '{name}': {message}")]
    InvalidPattern { name: String, message: String },
}
