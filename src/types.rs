//! Wire and storage types for todo records.
//!
//! # Design
//! `Todo` doubles as the stored document and the response body; its `id` is
//! `None` until the repository has assigned one, which matches the wire shape
//! (`"id": string|null`). `TodoRequest` is the single request payload for
//! create and update: `completed` stays an `Option` so an update can tell
//! "explicitly set" apart from "omitted".

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// A single todo record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    /// Assigned by the repository on first save, immutable afterwards.
    pub id: Option<Uuid>,
    pub task: String,
    pub completed: bool,
}

/// Request payload for creating or updating a todo.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TodoRequest {
    #[validate(
        length(min = 1, max = 200, message = "task length must be between 1 and 200 characters"),
        custom = "not_blank"
    )]
    pub task: String,
    /// Missing on create means `false`; missing on update keeps the stored flag.
    pub completed: Option<bool>,
}

fn not_blank(task: &str) -> Result<(), ValidationError> {
    if task.trim().is_empty() {
        let mut error = ValidationError::new("not_blank");
        error.message = Some("task cannot be blank".into());
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_serializes_unsaved_id_as_null() {
        let todo = Todo {
            id: None,
            task: "Test".to_string(),
            completed: false,
        };
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json["id"], serde_json::Value::Null);
        assert_eq!(json["task"], "Test");
        assert_eq!(json["completed"], false);
    }

    #[test]
    fn todo_roundtrips_through_json() {
        let todo = Todo {
            id: Some(Uuid::new_v4()),
            task: "Roundtrip".to_string(),
            completed: true,
        };
        let json = serde_json::to_string(&todo).unwrap();
        let back: Todo = serde_json::from_str(&json).unwrap();
        assert_eq!(back, todo);
    }

    #[test]
    fn request_without_completed_deserializes_to_none() {
        let request: TodoRequest = serde_json::from_str(r#"{"task":"No completed field"}"#).unwrap();
        assert_eq!(request.task, "No completed field");
        assert!(request.completed.is_none());
    }

    #[test]
    fn request_rejects_missing_task() {
        let result: Result<TodoRequest, _> = serde_json::from_str(r#"{"completed":true}"#);
        assert!(result.is_err());
    }

    #[test]
    fn request_validation_accepts_plain_task() {
        let request: TodoRequest = serde_json::from_str(r#"{"task":"Buy milk"}"#).unwrap();
        assert!(request.validate().is_ok());
    }

    #[test]
    fn request_validation_rejects_empty_task() {
        let request: TodoRequest = serde_json::from_str(r#"{"task":""}"#).unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn request_validation_rejects_blank_task() {
        let request: TodoRequest = serde_json::from_str(r#"{"task":"   "}"#).unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn request_validation_rejects_task_over_200_chars() {
        let long_task = "x".repeat(201);
        let request = TodoRequest {
            task: long_task,
            completed: None,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn request_validation_accepts_task_of_exactly_200_chars() {
        let request = TodoRequest {
            task: "x".repeat(200),
            completed: None,
        };
        assert!(request.validate().is_ok());
    }
}
