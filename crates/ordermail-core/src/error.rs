//! Error types shared across the workspace.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, OrderMailError>;

/// Unified error type for OrderMail operations.
#[derive(Debug, Error)]
pub enum OrderMailError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Mail error: {0}")]
    Mail(String),

    #[error("Feed error: {0}")]
    Feed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
