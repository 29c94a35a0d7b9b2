//! HTTP handlers mapping verbs and paths onto the service.
//!
//! Handlers stay thin: extract, validate, call the service, shape the
//! response. Anything malformed (bad JSON, bad path id) is rejected by the
//! extractors before these functions run.

use axum::extract::{Path, State};
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use uuid::Uuid;
use validator::Validate;

use crate::error::ApiError;
use crate::service::TodoService;
use crate::types::{Todo, TodoRequest};

/// Shared state handed to every handler by the router.
#[derive(Clone)]
pub struct AppState {
    pub service: TodoService,
}

pub async fn list_todos(State(state): State<AppState>) -> Json<Vec<Todo>> {
    Json(state.service.list().await)
}

pub async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Todo>, ApiError> {
    state.service.get(id).await.map(Json)
}

pub async fn create_todo(
    State(state): State<AppState>,
    Json(request): Json<TodoRequest>,
) -> Result<Response, ApiError> {
    request.validate()?;
    let created = state.service.create(request).await;

    // Location points at the canonical GET for the record the store just named.
    let location = created.id.map(|id| format!("/api/todos/{id}"));
    let mut response = (StatusCode::CREATED, Json(created)).into_response();
    if let Some(location) = location {
        if let Ok(value) = HeaderValue::from_str(&location) {
            response.headers_mut().insert(header::LOCATION, value);
        }
    }
    Ok(response)
}

pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<TodoRequest>,
) -> Result<Json<Todo>, ApiError> {
    request.validate()?;
    state.service.update(id, request).await.map(Json)
}

pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
