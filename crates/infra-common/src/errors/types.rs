use thiserror::Error;

/// Errors shared by the voipd infrastructure
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration problem (bad log level, unreadable settings, ...)
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error with caller-provided text
    #[error("{0}")]
    Custom(String),
}

pub type Result<T> = std::result::Result<T, Error>;
