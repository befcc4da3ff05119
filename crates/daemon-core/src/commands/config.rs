//! `config-get` and `config-set`: single-key access to the configuration store

use super::MISSING_SECTION_OR_KEY;
use crate::command::{CommandExample, DaemonCommand};
use crate::daemon::Daemon;
use crate::protocol::Response;
use tracing::debug;

/// Split `<section> <key>` off the argument string, leaving the remaining tokens
fn section_and_key(args: &str) -> Option<(&str, &str, std::str::SplitWhitespace<'_>)> {
    let mut tokens = args.split_whitespace();
    let section = tokens.next()?;
    let key = tokens.next()?;
    Some((section, key, tokens))
}

/// `config-get <section> <key>`
pub struct ConfigGetCommand {
    examples: Vec<CommandExample>,
}

impl ConfigGetCommand {
    pub fn new() -> Self {
        Self {
            examples: vec![CommandExample::new(
                "config-get rtp symmetric",
                "Status: Ok\n\nValue: <unset>",
            )],
        }
    }
}

impl DaemonCommand for ConfigGetCommand {
    fn name(&self) -> &str {
        "config-get"
    }

    fn proto(&self) -> &str {
        "config-get <section> <key>"
    }

    fn description(&self) -> &str {
        "Reads a configuration value from the softphone's configuration database."
    }

    fn examples(&self) -> &[CommandExample] {
        &self.examples
    }

    fn exec(&self, daemon: &Daemon, args: &str) -> Response {
        let Some((section, key, _)) = section_and_key(args) else {
            return Response::error(MISSING_SECTION_OR_KEY);
        };

        let value = daemon.store().get_string(section, key);
        debug!("config-get [{}] {} -> {:?}", section, key, value);
        Response::config_value(value.as_deref())
    }
}

/// `config-set <section> <key> [<value>]`
pub struct ConfigSetCommand {
    examples: Vec<CommandExample>,
}

impl ConfigSetCommand {
    pub fn new() -> Self {
        Self {
            examples: vec![
                CommandExample::new("config-set rtp symmetric 1", "Status: Ok\n\nValue: 1"),
                CommandExample::new("config-set rtp symmetric", "Status: Ok\n\nValue: <unset>"),
            ],
        }
    }
}

impl DaemonCommand for ConfigSetCommand {
    fn name(&self) -> &str {
        "config-set"
    }

    fn proto(&self) -> &str {
        "config-set <section> <key> [<value>]"
    }

    fn description(&self) -> &str {
        "Sets a configuration value into the softphone's configuration database. \
         Without a value the key is removed."
    }

    fn examples(&self) -> &[CommandExample] {
        &self.examples
    }

    fn exec(&self, daemon: &Daemon, args: &str) -> Response {
        let Some((section, key, mut rest)) = section_and_key(args) else {
            return Response::error(MISSING_SECTION_OR_KEY);
        };

        // Only one token is taken as the value, like the other arguments
        let value = rest.next();
        daemon.store().set_string(section, key, value);
        debug!("config-set [{}] {} <- {:?}", section, key, value);
        Response::config_value(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_and_key_split() {
        let (section, key, mut rest) = section_and_key("  rtp\tsymmetric  1 extra").unwrap();
        assert_eq!(section, "rtp");
        assert_eq!(key, "symmetric");
        assert_eq!(rest.next(), Some("1"));
        assert_eq!(rest.next(), Some("extra"));
        assert_eq!(rest.next(), None);
    }

    #[test]
    fn test_section_and_key_missing() {
        assert!(section_and_key("").is_none());
        assert!(section_and_key("   ").is_none());
        assert!(section_and_key("rtp").is_none());
    }
}
