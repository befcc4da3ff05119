//! Request dispatch

use crate::command::{CommandRegistry, DaemonCommand};
use crate::commands::{ConfigGetCommand, ConfigSetCommand, HelpCommand, QuitCommand};
use crate::protocol::Response;
use std::sync::Arc;
use tracing::{debug, warn};
use voipd_config_core::ConfigStore;

/// Answer to one request line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatched {
    pub response: Response,
    /// The session should end after this response is written
    pub quit: bool,
}

/// Owns the configuration store and the command table
pub struct Daemon {
    store: Arc<dyn ConfigStore>,
    commands: CommandRegistry,
}

impl Daemon {
    /// Create a daemon with the built-in commands registered
    pub fn new(store: Arc<dyn ConfigStore>) -> Self {
        let mut commands = CommandRegistry::new();
        commands.register(Box::new(ConfigGetCommand::new()));
        commands.register(Box::new(ConfigSetCommand::new()));
        commands.register(Box::new(HelpCommand));
        commands.register(Box::new(QuitCommand));
        Self { store, commands }
    }

    /// Add or replace a command
    pub fn register_command(&mut self, command: Box<dyn DaemonCommand>) {
        self.commands.register(command);
    }

    pub fn store(&self) -> &dyn ConfigStore {
        self.store.as_ref()
    }

    pub fn commands(&self) -> &CommandRegistry {
        &self.commands
    }

    /// Handle one request line. Blank lines get no answer.
    pub fn dispatch(&self, line: &str) -> Option<Dispatched> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let (name, args) = match line.split_once(char::is_whitespace) {
            Some((name, args)) => (name, args.trim_start()),
            None => (line, ""),
        };

        let Some(command) = self.commands.find(name) else {
            warn!("Unknown command: {}", name);
            return Some(Dispatched {
                response: Response::error("Unknown command."),
                quit: false,
            });
        };

        debug!("Dispatching {} ({} bytes of arguments)", name, args.len());
        let response = command.exec(self, args);
        if !response.is_ok() {
            debug!("{} failed: {:?}", name, response.reason);
        }

        Some(Dispatched {
            response,
            quit: command.ends_session(),
        })
    }
}

impl std::fmt::Debug for Daemon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Daemon")
            .field("commands", &self.commands)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use voipd_config_core::MemoryConfigStore;

    fn daemon() -> Daemon {
        Daemon::new(Arc::new(MemoryConfigStore::new()))
    }

    struct EchoCommand;

    impl DaemonCommand for EchoCommand {
        fn name(&self) -> &str {
            "echo"
        }

        fn proto(&self) -> &str {
            "echo <text>"
        }

        fn description(&self) -> &str {
            "Echoes its arguments."
        }

        fn exec(&self, _daemon: &Daemon, args: &str) -> Response {
            Response::ok_with_body(args)
        }
    }

    #[test]
    fn test_blank_lines_are_ignored() {
        let daemon = daemon();
        assert!(daemon.dispatch("").is_none());
        assert!(daemon.dispatch("  \t ").is_none());
    }

    #[test]
    fn test_unknown_command() {
        let answer = daemon().dispatch("register sip:alice@example.com").unwrap();
        assert_eq!(answer.response, Response::error("Unknown command."));
        assert!(!answer.quit);
    }

    #[test]
    fn test_builtin_registration_order() {
        let daemon = daemon();
        let names: Vec<&str> = daemon.commands().iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["config-get", "config-set", "help", "quit"]);
    }

    #[test]
    fn test_registered_command_gets_trimmed_args() {
        let mut daemon = daemon();
        daemon.register_command(Box::new(EchoCommand));
        let answer = daemon.dispatch("echo    hello   world  ").unwrap();
        assert_eq!(answer.response.body, "hello   world");
    }

    #[test]
    fn test_quit_ends_session() {
        let answer = daemon().dispatch("quit").unwrap();
        assert!(answer.quit);
        assert_eq!(answer.response.body, "Quitting.");
    }
}
