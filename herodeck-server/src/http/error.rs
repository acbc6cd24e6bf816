//! API error types with IntoResponse
//!
//! Errors are converted to `{"detail": "..."}` JSON bodies. Client errors
//! carry their message; server errors are logged and answered generically.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::repos::DbError;
use crate::models::ValidationError;
use crate::templates::TemplateError;
use crate::todos::TodoError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Query window out of range (422)
    Validation(ValidationError),

    /// Resource not found (404)
    NotFound { resource: &'static str },

    /// Database error (500, logged)
    Database(DbError),

    /// Todo API call failed (500, logged)
    Upstream(TodoError),

    /// Home page couldn't be rendered (500, logged)
    Template(TemplateError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            Self::Validation(e) => (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()),
            Self::NotFound { resource } => {
                (StatusCode::NOT_FOUND, format!("{} not found", resource))
            }
            Self::Database(e) => {
                // Log the actual error, return generic message
                tracing::error!("Database error: {}", e);
                internal()
            }
            Self::Upstream(e) => {
                tracing::error!("Upstream error: {}", e);
                internal()
            }
            Self::Template(e) => {
                tracing::error!("Template error: {}", e);
                internal()
            }
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

fn internal() -> (StatusCode, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal Server Error".to_owned(),
    )
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { resource, .. } => Self::NotFound { resource },
            _ => Self::Database(e),
        }
    }
}

impl From<TodoError> for ApiError {
    fn from(e: TodoError) -> Self {
        Self::Upstream(e)
    }
}

impl From<TemplateError> for ApiError {
    fn from(e: TemplateError) -> Self {
        Self::Template(e)
    }
}
