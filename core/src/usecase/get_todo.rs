//! Read-only query facade for todos

use std::sync::Arc;

use crate::domain::Todo;
use crate::error::DomainError;
use crate::repository::{TodoRepository, TodoStats};

/// Days ahead covered by [`GetTodoUseCase::upcoming`] when unspecified
const DEFAULT_UPCOMING_DAYS: i64 = 3;

pub struct GetTodoUseCase {
    repository: Arc<dyn TodoRepository>,
}

impl GetTodoUseCase {
    pub fn new(repository: Arc<dyn TodoRepository>) -> Self {
        Self { repository }
    }

    pub async fn by_id(&self, todo_id: i64) -> Result<Option<Todo>, DomainError> {
        self.repository.find_by_id(todo_id).await
    }

    /// Like [`by_id`](Self::by_id), but absence is an error
    pub async fn by_id_or_fail(&self, todo_id: i64) -> Result<Todo, DomainError> {
        self.repository
            .find_by_id(todo_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Todo"))
    }

    pub async fn by_student(
        &self,
        student_id: &str,
        limit: Option<u64>,
    ) -> Result<Vec<Todo>, DomainError> {
        self.repository.find_by_student(student_id, limit).await
    }

    /// Incomplete todos due within `days` days (default 3)
    pub async fn upcoming(&self, days: Option<i64>) -> Result<Vec<Todo>, DomainError> {
        self.repository
            .find_upcoming(days.unwrap_or(DEFAULT_UPCOMING_DAYS))
            .await
    }

    pub async fn overdue(&self) -> Result<Vec<Todo>, DomainError> {
        self.repository.find_overdue().await
    }

    pub async fn stats(&self) -> Result<TodoStats, DomainError> {
        self.repository.stats().await
    }

    pub async fn completion_rate(&self) -> Result<f64, DomainError> {
        self.repository.completion_rate().await
    }
}
