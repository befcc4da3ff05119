//! Daemon settings
//!
//! Read from an optional TOML file, then overridden by `VOIPD_*` environment
//! variables (`VOIPD_LISTEN=127.0.0.1:6100`, `VOIPD_PERSIST=true`, ...).

use crate::error::Result;
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use tracing::Level;
use voipd_infra_common::{parse_log_level, ErrorExt, LoggingConfig};

/// Environment variable prefix for setting overrides
pub const ENV_PREFIX: &str = "VOIPD";

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct DaemonSettings {
    /// TCP address to listen on. Standard input/output is used when unset.
    pub listen: Option<SocketAddr>,
    /// TOML file seeding the configuration store
    pub config_file: Option<PathBuf>,
    /// Write the store back to `config_file` on shutdown
    pub persist: bool,
    pub log_level: String,
    pub log_json: bool,
}

impl Default for DaemonSettings {
    fn default() -> Self {
        Self {
            listen: None,
            config_file: None,
            persist: false,
            log_level: "info".to_string(),
            log_json: false,
        }
    }
}

impl DaemonSettings {
    /// Load settings from `path` (if given) and the environment.
    ///
    /// The result is not validated: callers layer their own overrides first,
    /// then call [`DaemonSettings::validate`].
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, config::Environment::with_prefix(ENV_PREFIX))
    }

    fn load_with_env(path: Option<&Path>, env: config::Environment) -> Result<Self> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(true));
        }
        builder = builder.add_source(env.try_parsing(true));

        Ok(builder.build()?.try_deserialize()?)
    }

    /// Reject settings that cannot be acted upon
    pub fn validate(&self) -> Result<()> {
        self.level()?;
        if self.persist && self.config_file.is_none() {
            return Err(voipd_infra_common::Error::Config(
                "persist requires config_file".to_string(),
            )
            .with_context("daemon", "validate_settings")
            .into());
        }
        Ok(())
    }

    /// Parsed log level
    pub fn level(&self) -> Result<Level> {
        Ok(parse_log_level(&self.log_level).with_context("daemon", "log_level")?)
    }

    /// Logging configuration derived from these settings
    pub fn logging(&self) -> Result<LoggingConfig> {
        let mut logging = LoggingConfig::new(self.level()?, "voipd");
        if self.log_json {
            logging = logging.with_json();
        }
        Ok(logging)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn no_env() -> config::Environment {
        config::Environment::with_prefix(ENV_PREFIX).source(Some(HashMap::new()))
    }

    #[test]
    fn test_defaults() {
        let settings = DaemonSettings::load_with_env(None, no_env()).unwrap();
        assert_eq!(settings, DaemonSettings::default());
        assert_eq!(settings.level().unwrap(), Level::INFO);
    }

    #[test]
    fn test_file_values() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "listen = \"127.0.0.1:6100\"\nconfig_file = \"/tmp/voipd.toml\"\npersist = true\nlog_level = \"debug\""
        )
        .unwrap();

        let settings = DaemonSettings::load_with_env(Some(file.path()), no_env()).unwrap();
        assert_eq!(settings.listen, Some("127.0.0.1:6100".parse().unwrap()));
        assert_eq!(settings.config_file, Some(PathBuf::from("/tmp/voipd.toml")));
        assert!(settings.persist);
        assert_eq!(settings.level().unwrap(), Level::DEBUG);
    }

    #[test]
    fn test_environment_overrides() {
        let mut vars = HashMap::new();
        vars.insert("VOIPD_LOG_LEVEL".to_string(), "warn".to_string());
        vars.insert("VOIPD_LOG_JSON".to_string(), "true".to_string());
        let env = config::Environment::with_prefix(ENV_PREFIX).source(Some(vars));

        let settings = DaemonSettings::load_with_env(None, env).unwrap();
        assert_eq!(settings.log_level, "warn");
        assert!(settings.log_json);
        assert!(settings.logging().unwrap().json);
    }

    #[test]
    fn test_persist_without_file_is_rejected() {
        let settings = DaemonSettings {
            persist: true,
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_bad_log_level_is_rejected() {
        let settings = DaemonSettings {
            log_level: "loud".to_string(),
            ..Default::default()
        };
        assert!(settings.level().is_err());
    }
}
