//! External process invocation capability.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Captured result of a completed external command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Process exit code. `None` when the process was terminated by a
    /// signal, which counts as failure.
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// True iff the process exited with code 0.
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Failure to obtain a [`CommandOutput`] at all.
///
/// A command that runs to completion with a non-zero exit code is *not* an
/// error at this level; it is a `CommandOutput` whose `success()` is false.
#[derive(Debug, Error)]
pub enum RunnerError {
    /// The command did not finish within the wall-clock bound. The child
    /// process is killed; the message is user-visible verbatim.
    #[error("Command timed out after {timeout_secs} seconds")]
    TimedOut { timeout_secs: u64 },

    /// The command could not be started (binary missing, permissions, ...).
    #[error("Failed to execute {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The command started but its output could not be collected.
    #[error("I/O error while running {command}: {source}")]
    Io {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

/// Interface for invoking external commands with a bounded execution time.
///
/// This is the seam between the dispatch logic and the operating system:
/// the real implementation is
/// [`crate::infrastructure::process::ProcessCommandRunner`]; tests
/// substitute a scripted double.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Runs `command` with `args`, capturing stdout and stderr as text and
    /// waiting at most `timeout` wall-clock time.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::TimedOut`] when the bound elapses,
    /// [`RunnerError::Spawn`] when the process cannot be started, and
    /// [`RunnerError::Io`] when output collection fails.
    async fn run(
        &self,
        command: &str,
        args: &[String],
        timeout: Duration,
    ) -> Result<CommandOutput, RunnerError>;
}
