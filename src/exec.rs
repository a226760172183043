//! Shell execution of descriptor install commands.

use crate::error::{GhostError, Result};
use crate::ui as output;
use std::process::{Command, ExitStatus, Stdio};

/// Run `command` through `sh -c` with inherited stdio, blocking until it
/// finishes.
pub fn run_shell(command: &str) -> Result<()> {
    let status = Command::new("sh")
        .arg("-c")
        .arg(command)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|e| GhostError::SystemCommandFailed {
            command: command.to_string(),
            reason: e.to_string(),
        })?;

    if !status.success() {
        if output::is_interrupted() {
            return Err(GhostError::Interrupted);
        }
        return Err(GhostError::SystemCommandFailed {
            command: command.to_string(),
            reason: exit_reason(&status),
        });
    }
    Ok(())
}

fn exit_reason(status: &ExitStatus) -> String {
    match status.code() {
        Some(code) => format!("exit status {}", code),
        None => "terminated by signal".to_string(),
    }
}
