//! External process invocation.
//!
//! The build drivers talk to the compiler through the [`Invoker`] trait so
//! tests can substitute a scripted implementation. The real implementation
//! blocks until the child process exits; there is no timeout.

use std::io;
use std::process::{Command, Stdio};

use crate::command::CommandLine;

/// Why an external tool invocation did not succeed.
///
/// `NotFound` (install the tool) is kept distinct from `Exited` (the tool
/// ran but rejected its input) because the remediation differs.
#[derive(Debug, thiserror::Error)]
pub enum ToolFailure {
    /// The executable could not be found on `PATH`.
    #[error("executable not found")]
    NotFound,

    /// The tool launched but exited with a non-zero status.
    #[error("exited with status {}", .code.map_or_else(|| "unknown".to_string(), |c| c.to_string()))]
    Exited {
        /// Exit code, if the process exited normally.
        code: Option<i32>,
    },

    /// The tool could not be launched for another reason.
    #[error("failed to launch: {0}")]
    Launch(io::Error),
}

/// Runs external commands to completion.
pub trait Invoker {
    /// Runs the command, inheriting the parent's stdio.
    fn run(&self, cmd: &CommandLine) -> Result<(), ToolFailure>;

    /// Runs the command with stdout and stderr suppressed. Used for
    /// version probes where only the exit status matters.
    fn run_quiet(&self, cmd: &CommandLine) -> Result<(), ToolFailure>;
}

/// [`Invoker`] backed by `std::process`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemInvoker;

impl SystemInvoker {
    fn run_with(&self, cmd: &CommandLine, quiet: bool) -> Result<(), ToolFailure> {
        let mut command = Command::new(&cmd.program);
        command.args(&cmd.args);
        if quiet {
            command.stdout(Stdio::null()).stderr(Stdio::null());
        }

        let status = command.status().map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                ToolFailure::NotFound
            } else {
                ToolFailure::Launch(e)
            }
        })?;

        if status.success() {
            Ok(())
        } else {
            Err(ToolFailure::Exited {
                code: status.code(),
            })
        }
    }
}

impl Invoker for SystemInvoker {
    fn run(&self, cmd: &CommandLine) -> Result<(), ToolFailure> {
        self.run_with(cmd, false)
    }

    fn run_quiet(&self, cmd: &CommandLine) -> Result<(), ToolFailure> {
        self.run_with(cmd, true)
    }
}
