//! Bulk fan-out: assign the same todo to a list of students

use std::sync::Arc;

use chrono::NaiveDateTime;

use crate::domain::{TodoAttributes, TodoDraft};
use crate::error::DomainError;
use crate::repository::TodoRepository;

#[derive(Debug, Clone)]
pub struct CreateTodosForStudentsInput {
    pub student_ids: Vec<String>,
    pub due_date: NaiveDateTime,
    pub attributes: TodoAttributes,
}

/// Result of a bulk create
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedTodos {
    pub todo_count: usize,
    pub todo_ids: Vec<i64>,
}

pub struct CreateTodosForStudentsUseCase {
    repository: Arc<dyn TodoRepository>,
    tenant_id: String,
}

impl CreateTodosForStudentsUseCase {
    pub fn new(repository: Arc<dyn TodoRepository>, tenant_id: impl Into<String>) -> Self {
        Self {
            repository,
            tenant_id: tenant_id.into(),
        }
    }

    /// Build one draft per student and persist them in a single bulk insert
    ///
    /// All drafts share the same fields apart from `student_id`. Any invalid
    /// shared field (or an empty student list) fails the whole operation
    /// before anything is written.
    pub async fn execute(
        &self,
        input: CreateTodosForStudentsInput,
    ) -> Result<CreatedTodos, DomainError> {
        if input.student_ids.is_empty() {
            return Err(DomainError::validation(
                "student_ids",
                "at least one student is required",
            ));
        }

        let mut drafts = Vec::with_capacity(input.student_ids.len());
        for student_id in &input.student_ids {
            drafts.push(TodoDraft::new(
                &self.tenant_id,
                student_id,
                input.due_date,
                &input.attributes,
            )?);
        }

        let todo_ids = self.repository.insert_many(drafts).await?;

        Ok(CreatedTodos {
            todo_count: todo_ids.len(),
            todo_ids,
        })
    }
}
