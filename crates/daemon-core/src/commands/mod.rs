//! Built-in daemon commands

pub mod config;
pub mod help;
pub mod quit;

pub use config::{ConfigGetCommand, ConfigSetCommand};
pub use help::HelpCommand;
pub use quit::QuitCommand;

/// Reason given when `config-get`/`config-set` lack a section or key
pub const MISSING_SECTION_OR_KEY: &str = "Missing section and/or key names.";
