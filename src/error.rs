//! Application error type and its JSON rendering.
//!
//! Every failure that reaches an HTTP handler is an [`AppError`]. Each variant
//! maps to a status code and renders as:
//!
//! ```json
//! { "status": "Error", "error": "not found" }
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use validator::ValidationErrors;

use crate::api::dto::StatusResponse;
use crate::domain::repositories::StorageError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("empty request")]
    EmptyRequest,

    #[error("failed to decode request")]
    Decode(#[source] serde_json::Error),

    #[error("{0}")]
    Validation(String),

    #[error("invalid request")]
    InvalidRequest,

    #[error("not found")]
    NotFound,

    #[error("url already exists")]
    AliasExists,

    #[error("{message}")]
    Internal {
        message: &'static str,
        #[source]
        source: StorageError,
    },
}

impl AppError {
    pub fn internal(message: &'static str, source: StorageError) -> Self {
        Self::Internal { message, source }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::EmptyRequest
            | AppError::Decode(_)
            | AppError::Validation(_)
            | AppError::InvalidRequest => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::AliasExists => StatusCode::CONFLICT,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Renders the error body with an explicit status instead of the
    /// variant's own one.
    ///
    /// Used by the save endpoint, which reports every failure as `200 OK`
    /// with `"status": "Error"` in the body.
    pub fn into_response_with_status(self, status: StatusCode) -> Response {
        (status, Json(StatusResponse::error(self.to_string()))).into_response()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        self.into_response_with_status(status)
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::Validation(validation_message(&errors))
    }
}

/// Builds a human-readable message out of field-level validation failures.
///
/// Fields are reported in name order and joined with `", "`:
/// `field URL is a required field, field ALIAS is not valid`.
fn validation_message(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    let mut messages = Vec::new();
    for (field, field_errors) in fields {
        let name = field.to_uppercase();
        for error in field_errors {
            let message = match &*error.code {
                "required" => format!("field {name} is a required field"),
                "url" => format!("field {name} is not a valid URL"),
                _ => format!("field {name} is not valid"),
            };
            messages.push(message);
        }
    }

    messages.join(", ")
}
