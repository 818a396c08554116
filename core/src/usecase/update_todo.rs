//! Partial update of a todo's fields

use std::sync::Arc;

use crate::domain::{Todo, TodoPatch};
use crate::error::DomainError;
use crate::repository::TodoRepository;

pub struct UpdateTodoUseCase {
    repository: Arc<dyn TodoRepository>,
}

impl UpdateTodoUseCase {
    pub fn new(repository: Arc<dyn TodoRepository>) -> Self {
        Self { repository }
    }

    /// Apply only the fields present in the patch
    ///
    /// The entity transition validates the patch (a provided title must be
    /// non-empty); the repository then writes only the touched columns, so
    /// concurrent partial updates to other fields are not clobbered. An empty
    /// patch is a no-op and returns the todo as stored.
    pub async fn execute(&self, todo_id: i64, patch: TodoPatch) -> Result<Todo, DomainError> {
        let todo = self
            .repository
            .find_by_id(todo_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Todo"))?;

        if patch.is_empty() {
            return Ok(todo);
        }

        // Runs invariant checks; the returned entity itself is not persisted
        todo.update(&patch)?;

        self.repository.update_fields(todo_id, &patch).await
    }
}
