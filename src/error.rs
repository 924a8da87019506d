use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, warn};
use uuid::Uuid;

use crate::database::StoreError;
use crate::handlers::extractors::ModelState;

pub type Result<T> = std::result::Result<T, ApiError>;

/// Error codes for categorizing errors
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ErrorCode {
    // Validation errors (3xxx)
    #[serde(rename = "VAL_3001")]
    InvalidInput,
    #[serde(rename = "VAL_3003")]
    InvalidFormat,

    // Resource errors (4xxx)
    #[serde(rename = "RES_4001")]
    NotFound,
    #[serde(rename = "RES_4005")]
    NotModified,

    // Storage errors (7xxx)
    #[serde(rename = "DB_7002")]
    QueryFailed,
}

impl ErrorCode {
    /// Get numeric code
    pub fn code(&self) -> u16 {
        match self {
            ErrorCode::InvalidInput => 3001,
            ErrorCode::InvalidFormat => 3003,
            ErrorCode::NotFound => 4001,
            ErrorCode::NotModified => 4005,
            ErrorCode::QueryFailed => 7002,
        }
    }

    /// Get user-friendly message
    pub fn message(&self) -> &'static str {
        match self {
            ErrorCode::InvalidInput => "Invalid input provided",
            ErrorCode::InvalidFormat => "Invalid format provided",
            ErrorCode::NotFound => "The requested resource was not found",
            ErrorCode::NotModified => "The resource was not modified",
            ErrorCode::QueryFailed => "Movie store operation failed",
        }
    }
}

/// Structured error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
    pub request_id: String,
    pub timestamp: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: ErrorCode,
    pub code_number: u16,
    pub message: String,
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Validation failed: {field}")]
    ValidationWithField {
        code: ErrorCode,
        field: String,
        message: String,
    },

    /// The model state attached to a request body carries field errors.
    #[error("Invalid model: {0}")]
    InvalidModel(ModelState),

    #[error("Not found: {0}")]
    NotFound(String),

    /// Update targeted a record that does not exist.
    #[error("Not modified: {0}")]
    NotModified(String),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("{1}")]
    WithCodeAndDetails(ErrorCode, String, String),
}

impl ApiError {
    /// Create error with code and additional details
    pub fn with_details(
        code: ErrorCode,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        ApiError::WithCodeAndDetails(code, message.into(), details.into())
    }

    /// Create validation error for a specific field
    pub fn validation_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        ApiError::ValidationWithField {
            code: ErrorCode::InvalidFormat,
            field: field.into(),
            message: message.into(),
        }
    }

    /// Helper: Resource not found
    pub fn not_found(resource: &str) -> Self {
        ApiError::NotFound(format!("{} not found", resource))
    }

    /// Get error code
    pub fn error_code(&self) -> ErrorCode {
        match self {
            ApiError::ValidationWithField { code, .. } => *code,
            ApiError::InvalidModel(_) => ErrorCode::InvalidInput,
            ApiError::NotFound(_) => ErrorCode::NotFound,
            ApiError::NotModified(_) => ErrorCode::NotModified,
            ApiError::Store(_) => ErrorCode::QueryFailed,
            ApiError::WithCodeAndDetails(code, _, _) => *code,
        }
    }

    /// Get status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::ValidationWithField { .. }
            | ApiError::InvalidModel(_) => StatusCode::BAD_REQUEST,

            ApiError::NotFound(_) => StatusCode::NOT_FOUND,

            ApiError::NotModified(_) => StatusCode::NOT_MODIFIED,

            ApiError::WithCodeAndDetails(code, _, _) => match code {
                ErrorCode::InvalidInput | ErrorCode::InvalidFormat => StatusCode::BAD_REQUEST,
                ErrorCode::NotFound => StatusCode::NOT_FOUND,
                ErrorCode::NotModified => StatusCode::NOT_MODIFIED,
                ErrorCode::QueryFailed => StatusCode::INTERNAL_SERVER_ERROR,
            },

            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get error details
    fn error_details(&self) -> Option<String> {
        match self {
            ApiError::WithCodeAndDetails(_, _, details) => Some(details.clone()),
            ApiError::InvalidModel(state) => Some(state.to_string()),
            ApiError::Store(e) => Some(e.to_string()),
            _ => None,
        }
    }

    /// Get field name for validation errors
    fn error_field(&self) -> Option<String> {
        match self {
            ApiError::ValidationWithField { field, .. } => Some(field.clone()),
            ApiError::InvalidModel(state) => state.first_field().map(str::to_string),
            _ => None,
        }
    }

    fn error_message(&self) -> String {
        match self {
            ApiError::WithCodeAndDetails(_, msg, _) => msg.clone(),
            ApiError::ValidationWithField { message, .. } => message.clone(),
            _ => self.error_code().message().to_string(),
        }
    }

    /// Log error with appropriate level
    fn log_error(&self, request_id: &str) {
        match self.status_code() {
            status if status.is_server_error() => {
                error!(
                    request_id = %request_id,
                    error = %self,
                    "Server error occurred"
                );
            }
            status if status.is_client_error() => {
                warn!(
                    request_id = %request_id,
                    error = %self,
                    "Client error occurred"
                );
            }
            _ => {}
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let request_id = Uuid::new_v4().to_string();
        let status = self.status_code();

        self.log_error(&request_id);

        // Not-found and not-modified outcomes carry no body
        if status == StatusCode::NOT_FOUND || status == StatusCode::NOT_MODIFIED {
            return status.into_response();
        }

        let code = self.error_code();
        let error_response = ErrorResponse {
            error: ErrorDetail {
                code,
                code_number: code.code(),
                message: self.error_message(),
                details: self.error_details(),
                field: self.error_field(),
            },
            request_id,
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        (status, Json(error_response)).into_response()
    }
}

/// Handle Axum JSON rejections and convert to structured API errors
pub fn handle_rejection(err: JsonRejection) -> ApiError {
    match err {
        JsonRejection::JsonDataError(e) => ApiError::with_details(
            ErrorCode::InvalidInput,
            "Invalid input provided",
            e.body_text(),
        ),
        JsonRejection::JsonSyntaxError(e) => {
            ApiError::with_details(ErrorCode::InvalidFormat, "Invalid JSON format", e.body_text())
        }
        JsonRejection::MissingJsonContentType(_) => ApiError::with_details(
            ErrorCode::InvalidFormat,
            "JSON content type required",
            "expected `Content-Type: application/json`",
        ),
        other => ApiError::with_details(
            ErrorCode::InvalidInput,
            "Invalid request body format",
            other.body_text(),
        ),
    }
}
