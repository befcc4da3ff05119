//! Error types for the daemon

use thiserror::Error;

/// Result type for daemon operations
pub type Result<T> = std::result::Result<T, DaemonError>;

/// Errors raised while setting up or serving the daemon.
///
/// Malformed requests are not errors: they are answered with an error
/// [`Response`](crate::Response).
#[derive(Debug, Error)]
pub enum DaemonError {
    /// Settings could not be read or deserialized
    #[error("Settings error: {0}")]
    Settings(#[from] config::ConfigError),

    /// Configuration store failed to load or save
    #[error("Configuration store error: {0}")]
    Store(#[from] voipd_config_core::ConfigError),

    /// Shared infrastructure error
    #[error(transparent)]
    Infra(#[from] voipd_infra_common::Error),

    /// Session I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
