//! Error types for the backend.
//!
//! [`BackendError`] is the top-level error; HTTP handlers map it onto status
//! codes, everything else is logged.

use thiserror::Error;

/// Top-level error for the backend (config, bot transport, IO).
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Bot error: {0}")]
    Bot(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for backend operations; uses [`BackendError`].
pub type Result<T> = std::result::Result<T, BackendError>;
