//! HTTP server initialization and runtime setup.
//!
//! Handles the dispatcher availability probe, service assembly, and the
//! Axum server lifecycle.

use crate::application::services::DispatchService;
use crate::config::Config;
use crate::domain::runner::CommandRunner;
use crate::infrastructure::process::ProcessCommandRunner;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Bound on the startup `--version` probe.
const PROBE_TIMEOUT: Duration = Duration::from_secs(10);

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Dispatcher availability probe (`<command> --version`)
/// - Dispatch service over the real process runner
/// - Axum HTTP server on `0.0.0.0:<API_PORT>`
///
/// # Errors
///
/// Returns an error if:
/// - The dispatcher binary is missing or its version probe fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let runner = Arc::new(ProcessCommandRunner);

    check_dispatcher(runner.as_ref(), &config.dispatch_command).await?;

    let dispatch_service = Arc::new(DispatchService::new(
        runner,
        config.dispatch_settings(),
    ));

    let state = AppState { dispatch_service };

    let app = app_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.api_port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        "Starting Ahoum Facilitator Onboarding API on port {}",
        config.api_port
    );

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}

/// Verifies the external dispatcher responds to a version probe.
///
/// The service refuses to start when the probe fails: without the
/// dispatcher binary every call would fail at request time.
async fn check_dispatcher(runner: &dyn CommandRunner, command: &str) -> Result<()> {
    match runner
        .run(command, &["--version".to_string()], PROBE_TIMEOUT)
        .await
    {
        Ok(output) if output.success() => {
            tracing::info!("LiveKit CLI is available");
            Ok(())
        }
        Ok(output) => {
            anyhow::bail!(
                "Dispatcher probe '{} --version' failed: {}",
                command,
                output.stderr.trim()
            );
        }
        Err(e) => {
            tracing::error!("LiveKit CLI not found. Please install it first.");
            Err(anyhow::Error::new(e).context(format!("Failed to probe dispatcher '{}'", command)))
        }
    }
}
