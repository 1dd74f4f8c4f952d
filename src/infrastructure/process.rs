//! Real external-process runner backed by `tokio::process`.

use async_trait::async_trait;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;

use crate::domain::runner::{CommandOutput, CommandRunner, RunnerError};

/// [`CommandRunner`] implementation that spawns real operating-system
/// processes.
///
/// The child is spawned with `kill_on_drop`, so when the timeout elapses and
/// the wait future is dropped, the process is killed rather than left
/// running detached.
pub struct ProcessCommandRunner;

#[async_trait]
impl CommandRunner for ProcessCommandRunner {
    async fn run(
        &self,
        command: &str,
        args: &[String],
        timeout: Duration,
    ) -> Result<CommandOutput, RunnerError> {
        let child = Command::new(command)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| RunnerError::Spawn {
                command: command.to_string(),
                source: e,
            })?;

        let output = match tokio::time::timeout(timeout, child.wait_with_output()).await {
            Ok(Ok(output)) => output,
            Ok(Err(e)) => {
                return Err(RunnerError::Io {
                    command: command.to_string(),
                    source: e,
                });
            }
            // Dropping the wait future kills the child (kill_on_drop).
            Err(_) => {
                return Err(RunnerError::TimedOut {
                    timeout_secs: timeout.as_secs(),
                });
            }
        };

        Ok(CommandOutput {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
