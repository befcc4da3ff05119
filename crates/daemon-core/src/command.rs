//! Command trait and registry

use crate::daemon::Daemon;
use crate::protocol::Response;

/// A sample request and the answer it produces, shown by `help <command>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandExample {
    pub command: String,
    pub output: String,
}

impl CommandExample {
    pub fn new(command: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            output: output.into(),
        }
    }
}

/// A request handler bound to a command name
pub trait DaemonCommand: Send + Sync {
    /// Name matched against the first token of a request line
    fn name(&self) -> &str;

    /// One-line usage, e.g. `config-get <section> <key>`
    fn proto(&self) -> &str;

    fn description(&self) -> &str;

    fn examples(&self) -> &[CommandExample] {
        &[]
    }

    /// Whether the session ends once this command has answered
    fn ends_session(&self) -> bool {
        false
    }

    /// Run the command. `args` is the rest of the line after the name.
    fn exec(&self, daemon: &Daemon, args: &str) -> Response;
}

/// Registered commands, kept in registration order
#[derive(Default)]
pub struct CommandRegistry {
    commands: Vec<Box<dyn DaemonCommand>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a command. A command with the same name is replaced in place.
    pub fn register(&mut self, command: Box<dyn DaemonCommand>) {
        match self.commands.iter().position(|c| c.name() == command.name()) {
            Some(index) => self.commands[index] = command,
            None => self.commands.push(command),
        }
    }

    pub fn find(&self, name: &str) -> Option<&dyn DaemonCommand> {
        self.commands
            .iter()
            .find(|c| c.name() == name)
            .map(|c| c.as_ref())
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn DaemonCommand> {
        self.commands.iter().map(|c| c.as_ref())
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl std::fmt::Debug for CommandRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter().map(|c| c.name())).finish()
    }
}
