//! Staff verifies a completed todo

use std::sync::Arc;

use chrono::Utc;

use crate::domain::Todo;
use crate::error::DomainError;
use crate::repository::TodoRepository;

#[derive(Debug, Clone)]
pub struct VerifyTodoInput {
    pub todo_id: i64,
    pub verified_by: String,
}

pub struct VerifyTodoUseCase {
    repository: Arc<dyn TodoRepository>,
}

impl VerifyTodoUseCase {
    pub fn new(repository: Arc<dyn TodoRepository>) -> Self {
        Self { repository }
    }

    /// One-time transition: requires a completed, not-yet-verified todo
    pub async fn execute(&self, input: VerifyTodoInput) -> Result<Todo, DomainError> {
        if input.verified_by.trim().is_empty() {
            return Err(DomainError::validation(
                "verified_by",
                "verified_by is required",
            ));
        }

        let todo = self
            .repository
            .find_by_id(input.todo_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Todo"))?;

        let verified = todo.verify(&input.verified_by, Utc::now().naive_utc())?;
        self.repository.save_state(&verified).await?;

        Ok(verified)
    }
}
