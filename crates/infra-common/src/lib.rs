//! # voipd Infrastructure Common
//!
//! Shared plumbing for the voipd crates:
//!
//! - **errors**: the common [`Error`] type and [`ErrorContext`] helpers
//! - **logging**: `tracing` subscriber setup and contextual spans

pub mod errors;
pub mod logging;

pub use errors::context::{ErrorContext, ErrorExt};
pub use errors::types::{Error, Result};
pub use logging::context::LogContext;
pub use logging::setup::{log_welcome, parse_log_level, setup_logging, LoggingConfig};
