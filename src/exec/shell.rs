// src/exec/shell.rs

use tokio::process::Command;

/// Build a shell command appropriate for the platform.
///
/// The command line is handed to the shell verbatim, so pipes, redirects and
/// env expansion all behave as they would in a terminal.
pub fn shell_command(command_line: &str) -> Command {
    if cfg!(windows) {
        let mut c = Command::new("cmd");
        c.arg("/C").arg(command_line);
        c
    } else {
        let mut c = Command::new("sh");
        c.arg("-c").arg(command_line);
        c
    }
}
