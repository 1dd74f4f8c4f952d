//! Outbound call dispatch service.

use std::sync::Arc;
use std::time::Duration;

use futures::StreamExt;
use futures::stream;

use crate::domain::outcome::{BatchResult, DispatchOutcome};
use crate::domain::runner::{CommandRunner, RunnerError};
use crate::utils::phone::validate_phone_number;

/// Immutable dispatch settings, derived from [`crate::config::Config`] at
/// startup and handed to the service once. Business logic never reads the
/// process environment.
#[derive(Debug, Clone)]
pub struct DispatchSettings {
    /// External dispatcher binary, e.g. `lk`.
    pub command: String,
    /// Value passed as `--agent-name`.
    pub agent_name: String,
    /// Wall-clock bound for one dispatch command.
    pub timeout: Duration,
    /// Maximum number of dispatch commands in flight during a batch.
    pub batch_concurrency: usize,
}

/// Service that triggers outbound call dispatch jobs through the external
/// command-line dispatcher, one job per phone number.
///
/// All failures are folded into [`DispatchOutcome`] records; nothing
/// propagates out of a dispatch call as an error.
pub struct DispatchService {
    runner: Arc<dyn CommandRunner>,
    settings: DispatchSettings,
}

impl DispatchService {
    /// Creates a new dispatch service over an injected command runner.
    pub fn new(runner: Arc<dyn CommandRunner>, settings: DispatchSettings) -> Self {
        Self { runner, settings }
    }

    /// Dispatches one outbound call.
    ///
    /// Invokes `<command> dispatch create --new-room --agent-name
    /// <agent_name> --metadata <phone_number>` and waits up to the
    /// configured timeout. Exactly one external invocation per call; no
    /// retry.
    ///
    /// The caller is expected to have validated `phone_number` already; the
    /// string is forwarded to the dispatcher exactly as received, including
    /// any spaces or dashes the validator stripped (see DESIGN.md).
    ///
    /// # Outcome mapping
    ///
    /// - exit code 0: success, with captured stdout
    /// - non-zero exit: failure, with captured stderr
    /// - timeout: failure, `Command timed out after <n> seconds`; the child
    ///   process is killed
    /// - spawn or I/O failure: failure, with the runner error description
    pub async fn dispatch_call(&self, phone_number: &str) -> DispatchOutcome {
        let args = vec![
            "dispatch".to_string(),
            "create".to_string(),
            "--new-room".to_string(),
            "--agent-name".to_string(),
            self.settings.agent_name.clone(),
            "--metadata".to_string(),
            phone_number.to_string(),
        ];

        tracing::info!(
            "Executing command: {} {}",
            self.settings.command,
            args.join(" ")
        );

        match self
            .runner
            .run(&self.settings.command, &args, self.settings.timeout)
            .await
        {
            Ok(output) if output.success() => {
                tracing::info!("Successfully dispatched call to {}", phone_number);
                DispatchOutcome::success(phone_number, output.stdout)
            }
            Ok(output) => {
                tracing::error!("Command failed: {}", output.stderr);
                DispatchOutcome::failure(phone_number, output.stderr)
            }
            Err(e @ RunnerError::TimedOut { .. }) => {
                tracing::error!("Command timed out");
                DispatchOutcome::failure(phone_number, e.to_string())
            }
            Err(e) => {
                tracing::error!("Unexpected error: {}", e);
                DispatchOutcome::failure(phone_number, e.to_string())
            }
        }
    }

    /// Dispatches a batch of calls, one outcome per input, in input order.
    ///
    /// Invalid numbers yield a `Failure { "Invalid phone number format" }`
    /// outcome without touching the runner. A failure on one element never
    /// stops processing of the rest.
    ///
    /// Valid elements run through a bounded worker pool
    /// (`batch_concurrency` dispatch commands in flight); `buffered` keeps
    /// the output sequence in input order regardless of completion order.
    pub async fn dispatch_batch(&self, phone_numbers: Vec<String>) -> BatchResult {
        let outcomes = stream::iter(phone_numbers)
            .map(|phone_number| async move {
                if validate_phone_number(&phone_number) {
                    self.dispatch_call(&phone_number).await
                } else {
                    DispatchOutcome::failure(phone_number, "Invalid phone number format")
                }
            })
            .buffered(self.settings.batch_concurrency)
            .collect::<Vec<_>>()
            .await;

        BatchResult::from_outcomes(outcomes)
    }
}
