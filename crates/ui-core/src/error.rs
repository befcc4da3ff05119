//! Error types for the composite view

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UiError {
    #[error("Unknown view controller: {0}")]
    UnknownController(String),
}

pub type Result<T> = std::result::Result<T, UiError>;
