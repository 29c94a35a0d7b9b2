//! Error types for the todo API.
//!
//! # Design
//! `NotFound` is the only domain error: every other failure mode (malformed
//! JSON, bad path id, wrong content type) is rejected by the extractors
//! before handler code runs. Validation failures get their own variant so the
//! boundary can answer 400 with per-field details instead of a bare status.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;
use validator::ValidationErrors;

/// Errors surfaced to HTTP clients.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The requested todo does not exist.
    #[error("todo not found with id: {0}")]
    NotFound(Uuid),

    /// The request body failed field validation.
    #[error("request validation failed")]
    Validation(#[from] ValidationErrors),
}

/// JSON body attached to every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

/// Field-level detail for validation failures.
#[derive(Debug, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::NotFound(id) => (
                StatusCode::NOT_FOUND,
                ErrorBody {
                    code: "NOT_FOUND".to_string(),
                    message: format!("todo not found with id: {id}"),
                    details: None,
                },
            ),
            ApiError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    code: "VALIDATION_ERROR".to_string(),
                    message: "request validation failed".to_string(),
                    details: Some(field_errors(&errors)),
                },
            ),
        };
        (status, Json(body)).into_response()
    }
}

fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errors_for_field)| {
            errors_for_field.iter().map(move |error| FieldError {
                field: field.to_string(),
                message: error
                    .message
                    .as_ref()
                    .map_or_else(|| error.code.to_string(), ToString::to_string),
            })
        })
        .collect()
}
