//! Filtered bulk read

use std::sync::Arc;

use crate::domain::Todo;
use crate::error::DomainError;
use crate::repository::{TodoFilter, TodoRepository};

pub struct GetTodosUseCase {
    repository: Arc<dyn TodoRepository>,
}

impl GetTodosUseCase {
    pub fn new(repository: Arc<dyn TodoRepository>) -> Self {
        Self { repository }
    }

    /// List todos for the bound tenant, honoring the filter's row cap
    pub async fn execute(&self, filter: TodoFilter) -> Result<Vec<Todo>, DomainError> {
        self.repository.find_all(&filter).await
    }
}
