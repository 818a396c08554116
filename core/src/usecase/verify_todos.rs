//! Bulk verification with per-item partial-failure reporting

use std::sync::Arc;

use chrono::Utc;

use crate::error::DomainError;
use crate::repository::TodoRepository;

#[derive(Debug, Clone)]
pub struct VerifyTodosInput {
    pub todo_ids: Vec<i64>,
    pub verified_by: String,
}

/// One item that could not be verified
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct FailedTodo {
    pub id: i64,
    pub reason: String,
}

/// Outcome of a bulk verify
///
/// Verifiable items succeed even when others fail; the batch as a whole only
/// errors on operation-level problems (missing verifier, store failure on the
/// final bulk write).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedTodos {
    pub verified_count: usize,
    pub verified_todo_ids: Vec<i64>,
    pub failed: Vec<FailedTodo>,
}

pub struct VerifyTodosUseCase {
    repository: Arc<dyn TodoRepository>,
}

impl VerifyTodosUseCase {
    pub fn new(repository: Arc<dyn TodoRepository>) -> Self {
        Self { repository }
    }

    /// Verify each id independently, then persist the successes in one call
    ///
    /// Not-found (which includes foreign-tenant ids), not-completed and
    /// already-verified are captured per item instead of aborting the batch.
    /// The final bulk save is not transactional across items with respect to
    /// concurrent writers; a crash mid-batch leaves prior items verified.
    pub async fn execute(&self, input: VerifyTodosInput) -> Result<VerifiedTodos, DomainError> {
        if input.verified_by.trim().is_empty() {
            return Err(DomainError::validation(
                "verified_by",
                "verified_by is required",
            ));
        }
        if input.todo_ids.is_empty() {
            return Err(DomainError::validation(
                "todo_ids",
                "at least one todo id is required",
            ));
        }

        let now = Utc::now().naive_utc();
        let mut verified = Vec::new();
        let mut failed = Vec::new();

        for id in &input.todo_ids {
            let todo = match self.repository.find_by_id(*id).await? {
                Some(todo) => todo,
                None => {
                    failed.push(FailedTodo {
                        id: *id,
                        reason: "todo not found".to_string(),
                    });
                    continue;
                }
            };

            match todo.verify(&input.verified_by, now) {
                Ok(todo) => verified.push(todo),
                Err(e) => failed.push(FailedTodo {
                    id: *id,
                    reason: e.to_string(),
                }),
            }
        }

        if !verified.is_empty() {
            self.repository.save_state_many(&verified).await?;
        }

        Ok(VerifiedTodos {
            verified_count: verified.len(),
            verified_todo_ids: verified.iter().map(|t| t.id).collect(),
            failed,
        })
    }
}
