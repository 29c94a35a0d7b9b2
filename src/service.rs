//! Service layer orchestrating repository calls.

use std::sync::Arc;

use uuid::Uuid;

use crate::error::ApiError;
use crate::repository::TodoRepository;
use crate::types::{Todo, TodoRequest};

/// Stateless orchestration between the HTTP handlers and the repository.
#[derive(Clone)]
pub struct TodoService {
    repository: Arc<dyn TodoRepository>,
}

impl TodoService {
    pub fn new(repository: Arc<dyn TodoRepository>) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> Vec<Todo> {
        tracing::info!("fetching all todos");
        let todos = self.repository.find_all().await;
        tracing::debug!(count = todos.len(), "fetched todos");
        todos
    }

    pub async fn get(&self, id: Uuid) -> Result<Todo, ApiError> {
        tracing::info!(%id, "fetching todo");
        self.repository
            .find_by_id(id)
            .await
            .ok_or(ApiError::NotFound(id))
    }

    pub async fn create(&self, request: TodoRequest) -> Todo {
        tracing::info!(task = %request.task, "creating todo");
        let todo = Todo {
            id: None,
            task: request.task,
            completed: request.completed.unwrap_or(false),
        };
        let created = self.repository.save(todo).await;
        tracing::debug!(?created, "created todo");
        created
    }

    /// Merge-style update: the stored record keeps its id and any field the
    /// request omits. Fails before anything is written when the id is absent.
    pub async fn update(&self, id: Uuid, request: TodoRequest) -> Result<Todo, ApiError> {
        tracing::info!(%id, "updating todo");
        let mut todo = self
            .repository
            .find_by_id(id)
            .await
            .ok_or(ApiError::NotFound(id))?;
        todo.task = request.task;
        if let Some(completed) = request.completed {
            todo.completed = completed;
        }
        let updated = self.repository.save(todo).await;
        tracing::debug!(?updated, "updated todo");
        Ok(updated)
    }

    /// Existence-gated delete: fails with `NotFound` when the id is absent,
    /// removes the record when it is present.
    pub async fn delete(&self, id: Uuid) -> Result<(), ApiError> {
        tracing::info!(%id, "deleting todo");
        if !self.repository.exists_by_id(id).await {
            return Err(ApiError::NotFound(id));
        }
        self.repository.delete_by_id(id).await;
        tracing::debug!(%id, "deleted todo");
        Ok(())
    }
}
