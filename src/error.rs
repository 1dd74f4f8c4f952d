use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// JSON failure envelope shared by every error response:
/// `{"success": false, "error": "...", "phone_number"?: "..."}`.
#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    error: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    phone_number: Option<String>,
}

#[derive(Debug)]
pub enum AppError {
    /// Malformed request: missing body, missing field, or bad phone number
    /// format. Maps to 400.
    Validation { message: String },
    /// Dispatch of a single call failed; the envelope echoes the phone
    /// number for correlation. Maps to 500.
    Dispatch {
        message: String,
        phone_number: String,
    },
    /// Unforeseen internal fault. Maps to 500 with an
    /// `Internal server error: ...` message.
    Internal { message: String },
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn dispatch(message: impl Into<String>, phone_number: impl Into<String>) -> Self {
        Self::Dispatch {
            message: message.into(),
            phone_number: phone_number.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, phone_number) = match self {
            AppError::Validation { message } => (StatusCode::BAD_REQUEST, message, None),
            AppError::Dispatch {
                message,
                phone_number,
            } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                message,
                Some(phone_number),
            ),
            AppError::Internal { message } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Internal server error: {}", message),
                None,
            ),
        };

        let body = ErrorBody {
            success: false,
            error,
            phone_number,
        };

        (status, Json(body)).into_response()
    }
}
