//! Process execution seam.
//!
//! Everything that launches a child process goes through [`CommandRunner`]
//! so the pipeline can be driven by a scripted runner in tests.

use crate::command::CommandSpec;
use tracing::debug;

/// Runs a command to completion.
pub trait CommandRunner {
    /// Block until the child exits. Returns its exit code, or `None` when
    /// it was terminated by a signal. Errors only when the process could
    /// not be started.
    fn run(&mut self, cmd: &CommandSpec) -> std::io::Result<Option<i32>>;
}

/// Runs commands as real child processes with inherited stdio.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&mut self, cmd: &CommandSpec) -> std::io::Result<Option<i32>> {
        debug!(command = %cmd, cwd = ?cmd.cwd(), "spawning");
        let status = cmd.to_command().status()?;
        debug!(?status, "child exited");
        Ok(status.code())
    }
}
