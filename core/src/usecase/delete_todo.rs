//! Soft-delete a todo

use std::sync::Arc;

use crate::error::DomainError;
use crate::repository::TodoRepository;

pub struct DeleteTodoUseCase {
    repository: Arc<dyn TodoRepository>,
}

impl DeleteTodoUseCase {
    pub fn new(repository: Arc<dyn TodoRepository>) -> Self {
        Self { repository }
    }

    /// Tombstone the todo; default reads stop returning it
    pub async fn execute(&self, todo_id: i64) -> Result<(), DomainError> {
        self.repository
            .find_by_id(todo_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Todo"))?;

        self.repository.soft_delete(todo_id).await
    }
}
