//! `quit`: end the session

use crate::command::DaemonCommand;
use crate::daemon::Daemon;
use crate::protocol::Response;

pub struct QuitCommand;

impl DaemonCommand for QuitCommand {
    fn name(&self) -> &str {
        "quit"
    }

    fn proto(&self) -> &str {
        "quit"
    }

    fn description(&self) -> &str {
        "Ends the session. On the standard input channel this stops the daemon."
    }

    fn ends_session(&self) -> bool {
        true
    }

    fn exec(&self, _daemon: &Daemon, _args: &str) -> Response {
        Response::ok_with_body("Quitting.")
    }
}
