//! Storage access for the todo collection.
//!
//! # Design
//! `TodoRepository` abstracts the document collection holding todo records.
//! The service depends only on this trait, so a remote document-database
//! client can replace `InMemoryTodoRepository` without touching the HTTP
//! layers. Absence is modeled with `Option`/`bool` rather than errors; the
//! single domain error (`NotFound`) is raised by the service, not here.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::types::Todo;

/// CRUD primitives over the todo collection.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Returns every record in the collection's storage order.
    async fn find_all(&self) -> Vec<Todo>;

    /// Returns the record with the given id, or `None` if absent.
    async fn find_by_id(&self, id: Uuid) -> Option<Todo>;

    /// Upsert: an unset id gets a freshly generated one on insert; a set id
    /// replaces the stored record entirely. Returns the persisted record.
    async fn save(&self, todo: Todo) -> Todo;

    async fn exists_by_id(&self, id: Uuid) -> bool;

    /// Removes the record if present; no-op if absent.
    async fn delete_by_id(&self, id: Uuid);

    /// Clears the collection. Test isolation only.
    async fn delete_all(&self);
}

/// In-memory document collection.
///
/// Records are kept in a `Vec` so `find_all` exposes the collection's natural
/// insertion order, and identifiers are generated on first save.
#[derive(Debug, Default)]
pub struct InMemoryTodoRepository {
    todos: RwLock<Vec<Todo>>,
}

impl InMemoryTodoRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn find_all(&self) -> Vec<Todo> {
        self.todos.read().await.clone()
    }

    async fn find_by_id(&self, id: Uuid) -> Option<Todo> {
        self.todos
            .read()
            .await
            .iter()
            .find(|todo| todo.id == Some(id))
            .cloned()
    }

    async fn save(&self, mut todo: Todo) -> Todo {
        let mut todos = self.todos.write().await;
        match todo.id {
            None => {
                todo.id = Some(Uuid::new_v4());
                todos.push(todo.clone());
            }
            Some(id) => match todos.iter_mut().find(|stored| stored.id == Some(id)) {
                Some(stored) => *stored = todo.clone(),
                None => todos.push(todo.clone()),
            },
        }
        todo
    }

    async fn exists_by_id(&self, id: Uuid) -> bool {
        self.todos
            .read()
            .await
            .iter()
            .any(|todo| todo.id == Some(id))
    }

    async fn delete_by_id(&self, id: Uuid) {
        self.todos.write().await.retain(|todo| todo.id != Some(id));
    }

    async fn delete_all(&self) {
        self.todos.write().await.clear();
    }
}
