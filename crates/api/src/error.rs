//! Error classification and the JSON error envelope.
//!
//! Handlers return [`AppError`], which sorts every failure into one of three
//! buckets (not found, invalid request, internal) and renders it through an
//! [`ApiError`] value. Every error response shares the same body shape:
//!
//! ```json
//! { "code": "NOT_FOUND", "detail_code": "", "message": "..." }
//! ```

use axum::http::header::{CACHE_CONTROL, CONTENT_TYPE, EXPIRES, PRAGMA};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use hippo_core::error::CoreError;
use serde::{Deserialize, Serialize};

pub const CODE_NOT_FOUND: &str = "NOT_FOUND";
pub const CODE_INVALID_REQUEST: &str = "INVALID_REQUEST";
pub const CODE_INTERNAL_ERROR: &str = "INTERNAL_ERROR";

const JSON_CONTENT_TYPE: &str = "application/json";

/// Body written when the envelope itself cannot be serialized.
const FALLBACK_BODY: &str = r#"{"code": "internal_error", "message": "Unable to write error response"}"#;

// ---------------------------------------------------------------------------
// Envelope
// ---------------------------------------------------------------------------

/// Serialized body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub detail_code: String,
    pub message: String,
}

/// A fully described error response: status, content type and body fields.
///
/// Values are built from one of the `*_base()` constructors and specialised
/// with the `with_*` methods, each of which consumes `self` and returns the
/// updated value. Nothing is shared between call sites.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    status: StatusCode,
    content_type: &'static str,
    code: &'static str,
    detail_code: String,
    message: String,
}

impl Default for ApiError {
    fn default() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            content_type: "",
            code: "",
            detail_code: String::new(),
            message: String::new(),
        }
    }
}

impl ApiError {
    /// Base error with an `application/json` content type.
    pub fn json_base() -> Self {
        Self::default().with_content_type(JSON_CONTENT_TYPE)
    }

    /// 404 / `NOT_FOUND`.
    pub fn not_found_base() -> Self {
        Self::json_base()
            .with_code(CODE_NOT_FOUND)
            .with_status(StatusCode::NOT_FOUND)
    }

    /// 400 / `INVALID_REQUEST`.
    pub fn bad_request_base() -> Self {
        Self::json_base()
            .with_code(CODE_INVALID_REQUEST)
            .with_status(StatusCode::BAD_REQUEST)
    }

    /// 500 / `INTERNAL_ERROR`.
    pub fn internal_base() -> Self {
        Self::json_base()
            .with_code(CODE_INTERNAL_ERROR)
            .with_status(StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn with_content_type(mut self, content_type: &'static str) -> Self {
        self.content_type = content_type;
        self
    }

    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    pub fn with_code(mut self, code: &'static str) -> Self {
        self.code = code;
        self
    }

    pub fn with_detail_code(mut self, detail_code: impl Into<String>) -> Self {
        self.detail_code = detail_code.into();
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    fn body(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.code.to_string(),
            detail_code: self.detail_code.clone(),
            message: self.message.clone(),
        }
    }

    /// Render `body` as the response, or the fixed fallback if serialization fails.
    fn render(&self, body: Result<Vec<u8>, serde_json::Error>) -> Response {
        match body {
            Ok(bytes) => (
                self.status,
                [
                    (CONTENT_TYPE, self.content_type),
                    (CACHE_CONTROL, "no-cache, no-store, must-revalidate"),
                    (PRAGMA, "no-cache"),
                    (EXPIRES, "0"),
                ],
                bytes,
            )
                .into_response(),
            Err(err) => {
                tracing::error!(error = %err, "Unable to write error response");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    [(CONTENT_TYPE, JSON_CONTENT_TYPE)],
                    FALLBACK_BODY,
                )
                    .into_response()
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = serde_json::to_vec(&self.body());
        self.render(body)
    }
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Application-level error type for HTTP handlers.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The requested record does not exist. The message is sent to the client.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Malformed client input. The message is sent to the client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Any other failure. Only `context` reaches the client; `cause` is logged.
    #[error("{context}: {cause}")]
    Internal { context: String, cause: String },
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// A 500 whose `cause` stays server-side.
    pub fn internal(context: impl Into<String>, cause: impl std::fmt::Display) -> Self {
        Self::Internal {
            context: context.into(),
            cause: cause.to_string(),
        }
    }

    /// Map a domain error, keeping not-found distinct from everything else.
    pub fn classify(err: CoreError, context: impl Into<String>) -> Self {
        if err.is_not_found() {
            Self::NotFound(err.to_string())
        } else {
            Self::internal(context, err)
        }
    }

    /// The envelope this error is rendered as.
    pub fn to_api_error(&self) -> ApiError {
        match self {
            Self::NotFound(message) => ApiError::not_found_base().with_message(message.as_str()),
            Self::BadRequest(message) => {
                ApiError::bad_request_base().with_message(message.as_str())
            }
            Self::Internal { context, .. } => {
                ApiError::internal_base().with_message(context.as_str())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            Self::Internal { context, cause } => {
                tracing::error!(error = %cause, "{context}");
            }
            Self::BadRequest(message) => {
                tracing::debug!(%message, "Rejected request");
            }
            Self::NotFound(_) => {}
        }
        self.to_api_error().into_response()
    }
}
