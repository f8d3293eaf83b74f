use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use heroes_core::error::CoreError;
use serde::Serialize;
use serde_json::json;
use validator::ValidationErrors;

/// Where in the request a rejected value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSource {
    Body,
    Query,
    Path,
}

impl InputSource {
    pub fn as_str(self) -> &'static str {
        match self {
            InputSource::Body => "body",
            InputSource::Query => "query",
            InputSource::Path => "path",
        }
    }
}

/// One field-level entry in a 422 response.
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses
/// of the form `{ "detail": ..., "code": ... }`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `heroes_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Input deserialized but failed `validator` rules.
    #[error("Validation error in {origin:?}: {errors}")]
    Validation {
        origin: InputSource,
        errors: ValidationErrors,
    },

    /// Input could not be deserialized into the expected shape.
    #[error("Malformed {origin:?}: {message}")]
    Rejection {
        origin: InputSource,
        /// The offending field, when it can be identified.
        field: Option<String>,
        message: String,
    },
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, detail) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, .. } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    json!(format!("{entity} not found")),
                ),
                CoreError::Validation { field, message } => (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "VALIDATION_ERROR",
                    json!(vec![FieldError {
                        loc: vec![InputSource::Body.as_str().into(), field.to_string()],
                        msg: message.clone(),
                        kind: "value_error".into(),
                    }]),
                ),
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- Input errors ---
            AppError::Validation { origin, errors } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "VALIDATION_ERROR",
                json!(field_errors(*origin, errors)),
            ),
            AppError::Rejection {
                origin,
                field,
                message,
            } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "VALIDATION_ERROR",
                json!(vec![FieldError {
                    loc: std::iter::once(origin.as_str().to_string())
                        .chain(field.clone())
                        .collect(),
                    msg: message.clone(),
                    kind: format!("{}_invalid", origin.as_str()),
                }]),
            ),
        };

        let body = json!({
            "detail": detail,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Flatten `validator` output into one entry per failed rule, sorted by field
/// so responses are stable.
fn field_errors(origin: InputSource, errors: &ValidationErrors) -> Vec<FieldError> {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |err| FieldError {
                loc: vec![origin.as_str().into(), field.to_string()],
                msg: err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| err.code.to_string()),
                kind: err.code.to_string(),
            })
        })
        .collect()
}

/// Classify a sqlx error into an HTTP status, error code, and detail.
///
/// - `RowNotFound` maps to 404.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, serde_json::Value) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            json!("Resource not found"),
        ),
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                json!("An internal error occurred"),
            )
        }
    }
}
