//! Student marks a todo as done

use std::sync::Arc;

use chrono::Utc;

use crate::domain::Todo;
use crate::error::DomainError;
use crate::repository::TodoRepository;

pub struct CompleteTodoUseCase {
    repository: Arc<dyn TodoRepository>,
}

impl CompleteTodoUseCase {
    pub fn new(repository: Arc<dyn TodoRepository>) -> Self {
        Self { repository }
    }

    /// Set `completed_at`; fails if the todo is already completed or verified
    pub async fn execute(&self, todo_id: i64) -> Result<Todo, DomainError> {
        let todo = self
            .repository
            .find_by_id(todo_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Todo"))?;

        let completed = todo.complete(Utc::now().naive_utc())?;
        self.repository.save_state(&completed).await?;

        Ok(completed)
    }
}
