//! `help [<command>]`

use crate::command::DaemonCommand;
use crate::daemon::Daemon;
use crate::protocol::Response;

pub struct HelpCommand;

impl DaemonCommand for HelpCommand {
    fn name(&self) -> &str {
        "help"
    }

    fn proto(&self) -> &str {
        "help [<command>]"
    }

    fn description(&self) -> &str {
        "Lists the available commands, or describes one command with its examples."
    }

    fn exec(&self, daemon: &Daemon, args: &str) -> Response {
        let Some(name) = args.split_whitespace().next() else {
            let listing = daemon
                .commands()
                .iter()
                .map(|c| c.proto())
                .collect::<Vec<_>>()
                .join("\n");
            return Response::ok_with_body(listing);
        };

        let Some(command) = daemon.commands().find(name) else {
            return Response::error(format!("No help for command '{}'.", name));
        };

        let mut body = format!("{}\n\nDescription:\n{}", command.proto(), command.description());
        for example in command.examples() {
            body.push_str(&format!(
                "\n\nExample:\n> {}\n{}",
                example.command, example.output
            ));
        }
        Response::ok_with_body(body)
    }
}
