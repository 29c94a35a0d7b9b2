//! HTTP CRUD service for todo records.
//!
//! # Overview
//! Three explicit layers: axum handlers, a `TodoService` holding the
//! operation logic, and a `TodoRepository` trait over the todo collection.
//! Dependencies are wired by hand in [`app_with_repository`]: handlers see
//! only the service, the service sees only the repository trait.
//!
//! # Design
//! - The repository trait is the seam for the backing store; the bundled
//!   implementation keeps the collection in memory.
//! - Updates merge onto the stored record: the path id wins and omitted
//!   fields are preserved.
//! - Delete is existence-gated so a missing id answers 404 rather than
//!   silently succeeding.

pub mod config;
pub mod error;
pub mod handlers;
pub mod repository;
pub mod service;
pub mod types;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use handlers::{create_todo, delete_todo, get_todo, list_todos, update_todo, AppState};
use repository::{InMemoryTodoRepository, TodoRepository};
use service::TodoService;

pub use error::ApiError;
pub use types::{Todo, TodoRequest};

/// Builds the application router on top of the given repository.
pub fn app_with_repository(repository: Arc<dyn TodoRepository>) -> Router {
    let state = AppState {
        service: TodoService::new(repository),
    };
    Router::new()
        .route("/api/todos", get(list_todos).post(create_todo))
        .route(
            "/api/todos/{id}",
            get(get_todo).put(update_todo).delete(delete_todo),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Builds the application router over a fresh in-memory collection.
pub fn app() -> Router {
    app_with_repository(Arc::new(InMemoryTodoRepository::new()))
}

/// Serves the router on the given listener until ctrl-c.
pub async fn run(listener: TcpListener, router: Router) -> Result<(), std::io::Error> {
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "failed to install shutdown signal handler");
    }
}
