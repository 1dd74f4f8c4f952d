//! DTOs for the call dispatch endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::outcome::{DispatchOutcome, DispatchResult};

/// Request to dispatch a single outbound call.
///
/// The field is `Option` so that an absent or `null` `phone_number` parses
/// and maps to the `phone_number is required` error instead of a generic
/// deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct CallRequest {
    pub phone_number: Option<String>,
}

/// Request to dispatch a batch of outbound calls.
#[derive(Debug, Deserialize)]
pub struct BatchCallRequest {
    pub phone_numbers: Option<Vec<String>>,
}

/// Successful single-call response.
#[derive(Debug, Serialize)]
pub struct CallResponse {
    pub success: bool,
    pub message: String,
    pub phone_number: String,
    pub dispatch_info: String,
}

/// Batch response. Always reports `success: true`; per-element failures
/// live in `results`.
#[derive(Debug, Serialize)]
pub struct BatchCallResponse {
    pub success: bool,
    pub message: String,
    pub results: Vec<CallResultItem>,
}

/// Per-element result in a batch response.
///
/// Untagged, so only the populated field (`dispatch_info` or `error`) is
/// serialized alongside `phone_number` and `success`.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum CallResultItem {
    Success {
        phone_number: String,
        success: bool,
        dispatch_info: String,
    },
    Failure {
        phone_number: String,
        success: bool,
        error: String,
    },
}

impl From<DispatchOutcome> for CallResultItem {
    fn from(outcome: DispatchOutcome) -> Self {
        match outcome.result {
            DispatchResult::Success { output } => Self::Success {
                phone_number: outcome.phone_number,
                success: true,
                dispatch_info: output,
            },
            DispatchResult::Failure { reason } => Self::Failure {
                phone_number: outcome.phone_number,
                success: false,
                error: reason,
            },
        }
    }
}
