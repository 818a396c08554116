//! Staff rejects completed work and sends it back with feedback

use std::sync::Arc;

use crate::domain::Todo;
use crate::error::DomainError;
use crate::repository::TodoRepository;

#[derive(Debug, Clone)]
pub struct RejectTodoInput {
    pub todo_id: i64,
    pub feedback: String,
}

pub struct RejectTodoUseCase {
    repository: Arc<dyn TodoRepository>,
}

impl RejectTodoUseCase {
    pub fn new(repository: Arc<dyn TodoRepository>) -> Self {
        Self { repository }
    }

    /// Clear the completion state and record the feedback
    ///
    /// Feedback is required here, not just in the UI. Only completed,
    /// unverified todos can be rejected.
    pub async fn execute(&self, input: RejectTodoInput) -> Result<Todo, DomainError> {
        let feedback = input.feedback.trim();
        if feedback.is_empty() {
            return Err(DomainError::validation("feedback", "feedback is required"));
        }

        let todo = self
            .repository
            .find_by_id(input.todo_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Todo"))?;

        let rejected = todo.reject(feedback)?;
        self.repository.save_state(&rejected).await?;

        Ok(rejected)
    }
}
