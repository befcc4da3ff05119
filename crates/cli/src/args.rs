//! Command-line arguments

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use voipd_daemon_core::DaemonSettings;

#[derive(Parser, Debug)]
#[command(name = "voipd")]
#[command(about = "Softphone control daemon", version)]
pub struct Args {
    /// Daemon settings file (TOML)
    #[arg(short, long, env = "VOIPD_SETTINGS")]
    pub settings: Option<PathBuf>,

    /// Configuration store file (TOML, one table per section)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Listen on this TCP address instead of standard input/output
    #[arg(short, long)]
    pub listen: Option<SocketAddr>,

    /// Write the configuration store back to its file on shutdown
    #[arg(long)]
    pub persist: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,
}

impl Args {
    /// Layer the flags given on the command line over loaded settings
    pub fn apply(&self, mut settings: DaemonSettings) -> DaemonSettings {
        if let Some(config) = &self.config {
            settings.config_file = Some(config.clone());
        }
        if let Some(listen) = self.listen {
            settings.listen = Some(listen);
        }
        if self.persist {
            settings.persist = true;
        }
        if let Some(level) = &self.log_level {
            settings.log_level = level.clone();
        }
        if self.log_json {
            settings.log_json = true;
        }
        settings
    }
}
