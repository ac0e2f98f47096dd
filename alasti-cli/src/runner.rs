//! External generator execution

use std::process::Command;

use tracing::debug;

use crate::error::ScaffoldError;
use crate::project::Invocation;

/// Runs a generator command to completion
pub trait CommandRunner {
    /// Run `invocation`, blocking until it exits
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::Spawn`] if the program cannot be started and
    /// [`ScaffoldError::CommandFailed`] if it exits unsuccessfully.
    fn run(&self, invocation: &Invocation) -> Result<(), ScaffoldError>;
}

/// Runs commands as child processes sharing this terminal
///
/// Arguments are passed straight to the program, so nothing in a project
/// name is interpreted by a shell.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> Result<(), ScaffoldError> {
        debug!(command = %invocation, "spawning generator");

        let mut child = Command::new(invocation.program())
            .args(invocation.arguments())
            .spawn()
            .map_err(|source| ScaffoldError::Spawn {
                command: invocation.to_string(),
                source,
            })?;

        let status = child.wait().map_err(|source| ScaffoldError::Spawn {
            command: invocation.to_string(),
            source,
        })?;

        if !status.success() {
            return Err(ScaffoldError::CommandFailed {
                command: invocation.to_string(),
                status,
            });
        }

        debug!(command = %invocation, "generator finished");
        Ok(())
    }
}
