//! Create a single todo

use std::sync::Arc;

use chrono::NaiveDateTime;

use crate::domain::{Todo, TodoAttributes, TodoDraft};
use crate::error::DomainError;
use crate::repository::TodoRepository;

/// Input for [`CreateTodoUseCase`]
///
/// `priority` is lenient: absent or unrecognized values become `normal`.
#[derive(Debug, Clone)]
pub struct CreateTodoInput {
    pub student_id: String,
    pub due_date: NaiveDateTime,
    pub attributes: TodoAttributes,
}

pub struct CreateTodoUseCase {
    repository: Arc<dyn TodoRepository>,
    tenant_id: String,
}

impl CreateTodoUseCase {
    pub fn new(repository: Arc<dyn TodoRepository>, tenant_id: impl Into<String>) -> Self {
        Self {
            repository,
            tenant_id: tenant_id.into(),
        }
    }

    /// Validate input, build the draft and persist it
    ///
    /// Returns the stored entity with the repository-assigned id and
    /// timestamps. Validation failures never reach the store.
    pub async fn execute(&self, input: CreateTodoInput) -> Result<Todo, DomainError> {
        let draft = TodoDraft::new(
            &self.tenant_id,
            &input.student_id,
            input.due_date,
            &input.attributes,
        )?;

        self.repository.insert(draft).await
    }
}
