//! Handlers for the call dispatch endpoints.

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::Json;

use crate::api::dto::call::{
    BatchCallRequest, BatchCallResponse, CallRequest, CallResponse, CallResultItem,
};
use crate::domain::outcome::DispatchResult;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::phone::validate_phone_number;

/// Dispatches a single outbound call.
///
/// # Endpoint
///
/// `POST /call`
///
/// # Request Body
///
/// ```json
/// { "phone_number": "+918767763794" }
/// ```
///
/// # Responses
///
/// - **200**: `{"success": true, "message": "Call initiated successfully to
///   <n>", "phone_number": "<n>", "dispatch_info": "<stdout>"}`
/// - **400**: missing body, missing `phone_number`, or invalid format
/// - **500**: `{"success": false, "error": "Failed to initiate call: ...",
///   "phone_number": "<n>"}` when the dispatcher reports failure or times out
pub async fn call_handler(
    State(state): State<AppState>,
    payload: Result<Json<CallRequest>, JsonRejection>,
) -> Result<Json<CallResponse>, AppError> {
    let request = require_json(payload, "phone_number is required")?;

    let phone_number = match request.phone_number {
        Some(n) if !n.is_empty() => n,
        _ => return Err(AppError::validation("phone_number is required")),
    };

    if !validate_phone_number(&phone_number) {
        return Err(AppError::validation(
            "Invalid phone number format. Use international format like +918767763794",
        ));
    }

    let outcome = state.dispatch_service.dispatch_call(&phone_number).await;

    match outcome.result {
        DispatchResult::Success { output } => Ok(Json(CallResponse {
            success: true,
            message: format!("Call initiated successfully to {}", phone_number),
            phone_number,
            dispatch_info: output,
        })),
        DispatchResult::Failure { reason } => Err(AppError::dispatch(
            format!("Failed to initiate call: {}", reason),
            phone_number,
        )),
    }
}

/// Dispatches a batch of outbound calls.
///
/// # Endpoint
///
/// `POST /call/batch`
///
/// # Request Body
///
/// ```json
/// { "phone_numbers": ["+918767763794", "+15551234567"] }
/// ```
///
/// # Responses
///
/// - **200**: `{"success": true, "message": "Processed <total> calls,
///   <successful> successful", "results": [...]}`. Returned even when
///   individual elements fail; `results` has one entry per input, in input
///   order, each carrying either `dispatch_info` or `error`.
/// - **400**: missing body, or `phone_numbers` absent / not an array /
///   empty
pub async fn batch_call_handler(
    State(state): State<AppState>,
    payload: Result<Json<BatchCallRequest>, JsonRejection>,
) -> Result<Json<BatchCallResponse>, AppError> {
    let request = require_json(payload, "phone_numbers array is required")?;

    let phone_numbers = match request.phone_numbers {
        Some(numbers) if !numbers.is_empty() => numbers,
        _ => return Err(AppError::validation("phone_numbers array is required")),
    };

    let batch = state.dispatch_service.dispatch_batch(phone_numbers).await;

    Ok(Json(BatchCallResponse {
        success: true,
        message: format!(
            "Processed {} calls, {} successful",
            batch.total, batch.success_count
        ),
        results: batch.outcomes.into_iter().map(CallResultItem::from).collect(),
    }))
}

/// Unwraps a JSON extraction, mapping rejections onto the service's error
/// envelope.
///
/// A body that is not JSON at all (wrong content type, empty body, syntax
/// error) becomes `No JSON data provided`; a body whose field has the wrong
/// type becomes the endpoint's own "required" message.
fn require_json<T>(
    payload: Result<Json<T>, JsonRejection>,
    required_message: &str,
) -> Result<T, AppError> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(JsonRejection::JsonDataError(_)) => Err(AppError::validation(required_message)),
        Err(_) => Err(AppError::validation("No JSON data provided")),
    }
}
