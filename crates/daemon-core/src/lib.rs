//! # Daemon-Core - voipd control protocol
//!
//! A small text protocol for driving a softphone from scripts. Each request
//! is one line, `<command> [args...]`, and each answer is a framed
//! [`Response`]:
//!
//! ```text
//! > config-set rtp symmetric 1
//! Status: Ok
//!
//! Value: 1
//!
//! > config-get rtp
//! Status: Error
//! Reason: Missing section and/or key names.
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use voipd_config_core::MemoryConfigStore;
//! use voipd_daemon_core::Daemon;
//!
//! let daemon = Daemon::new(Arc::new(MemoryConfigStore::new()));
//! let answer = daemon.dispatch("config-get rtp symmetric").unwrap();
//! assert_eq!(answer.response.to_wire(), "Status: Ok\n\nValue: <unset>\n");
//! ```

pub mod command;
pub mod commands;
pub mod daemon;
pub mod error;
pub mod protocol;
pub mod server;
pub mod settings;

pub use command::{CommandExample, CommandRegistry, DaemonCommand};
pub use daemon::{Daemon, Dispatched};
pub use error::{DaemonError, Result};
pub use protocol::{Response, Status};
pub use server::{serve_stdio, serve_stream, serve_tcp, SessionEnd};
pub use settings::DaemonSettings;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
