#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum_test::TestServer;
use call_dispatch_api::application::services::{DispatchService, DispatchSettings};
use call_dispatch_api::domain::runner::{CommandOutput, CommandRunner, RunnerError};
use call_dispatch_api::state::AppState;

/// Scripted [`CommandRunner`] double.
///
/// Every invocation is recorded as its full argv. Responses are looked up
/// by the `--metadata` value (the last argument), so batch tests stay
/// deterministic regardless of concurrent execution order; unscripted
/// numbers fall back to the default output.
pub struct StubRunner {
    default: CommandOutput,
    scripted: Mutex<HashMap<String, Result<CommandOutput, RunnerError>>>,
    invocations: Mutex<Vec<Vec<String>>>,
}

impl StubRunner {
    /// A runner whose default response is exit 0 with the given stdout.
    pub fn succeeding(stdout: &str) -> Self {
        Self {
            default: CommandOutput {
                exit_code: Some(0),
                stdout: stdout.to_string(),
                stderr: String::new(),
            },
            scripted: Mutex::new(HashMap::new()),
            invocations: Mutex::new(Vec::new()),
        }
    }

    /// A runner whose default response is exit 1 with the given stderr.
    pub fn failing(stderr: &str) -> Self {
        Self {
            default: CommandOutput {
                exit_code: Some(1),
                stdout: String::new(),
                stderr: stderr.to_string(),
            },
            scripted: Mutex::new(HashMap::new()),
            invocations: Mutex::new(Vec::new()),
        }
    }

    /// Scripts a one-shot response for the given `--metadata` value.
    pub fn script(
        self,
        metadata: &str,
        response: Result<CommandOutput, RunnerError>,
    ) -> Self {
        self.scripted
            .lock()
            .unwrap()
            .insert(metadata.to_string(), response);
        self
    }

    /// All recorded invocations, each as `[command, arg...]`.
    pub fn invocations(&self) -> Vec<Vec<String>> {
        self.invocations.lock().unwrap().clone()
    }
}

#[async_trait]
impl CommandRunner for StubRunner {
    async fn run(
        &self,
        command: &str,
        args: &[String],
        _timeout: Duration,
    ) -> Result<CommandOutput, RunnerError> {
        let mut argv = vec![command.to_string()];
        argv.extend(args.iter().cloned());
        self.invocations.lock().unwrap().push(argv);

        let metadata = args.last().cloned().unwrap_or_default();
        if let Some(response) = self.scripted.lock().unwrap().remove(&metadata) {
            return response;
        }

        Ok(self.default.clone())
    }
}

pub fn test_settings() -> DispatchSettings {
    DispatchSettings {
        command: "lk".to_string(),
        agent_name: "ahoum-facilitator-onboarding".to_string(),
        timeout: Duration::from_secs(30),
        batch_concurrency: 4,
    }
}

pub fn create_test_state(runner: Arc<StubRunner>) -> AppState {
    AppState {
        dispatch_service: Arc::new(DispatchService::new(runner, test_settings())),
    }
}

/// Builds a test server over the full API route set with the given runner.
pub fn create_test_server(runner: Arc<StubRunner>) -> TestServer {
    let app = call_dispatch_api::api::routes::routes().with_state(create_test_state(runner));
    TestServer::new(app).unwrap()
}
