//! Repository abstraction for todos
//!
//! The trait is the seam between use cases and the backing store. The SeaORM
//! implementation lives in [`todo`]; tests may bind their own implementation.

pub mod todo;

pub use todo::SeaOrmTodoRepository;

use async_trait::async_trait;

use crate::domain::{Todo, TodoDraft, TodoPatch};
use crate::error::DomainError;

/// Read filters for listing todos
///
/// `limit` defaults to 100 rows when unset; an explicit limit is passed
/// through as given.
#[derive(Debug, Clone, Default)]
pub struct TodoFilter {
    pub student_id: Option<String>,
    pub completed: Option<bool>,
    pub verified: Option<bool>,
    pub include_deleted: bool,
    pub limit: Option<u64>,
}

/// Aggregate counts over a tenant's todos
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize)]
pub struct TodoStats {
    pub total: u64,
    pub completed: u64,
    pub verified: u64,
    pub overdue: u64,
}

/// Persistence operations for todos
///
/// Implementations are bound to a single tenant at construction time; no
/// operation can cross tenant boundaries. Soft-deleted rows are invisible
/// unless a filter opts in via `include_deleted`.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Fetch one todo by id under the bound tenant
    async fn find_by_id(&self, id: i64) -> Result<Option<Todo>, DomainError>;

    /// List todos matching the filter, ordered by due date then id
    async fn find_all(&self, filter: &TodoFilter) -> Result<Vec<Todo>, DomainError>;

    /// List a student's todos
    async fn find_by_student(&self, student_id: &str, limit: Option<u64>)
        -> Result<Vec<Todo>, DomainError>;

    /// Incomplete todos due within the next `days` days
    async fn find_upcoming(&self, days: i64) -> Result<Vec<Todo>, DomainError>;

    /// Incomplete todos whose due date has passed
    async fn find_overdue(&self) -> Result<Vec<Todo>, DomainError>;

    /// Insert one draft, returning the stored entity with assigned id
    async fn insert(&self, draft: TodoDraft) -> Result<Todo, DomainError>;

    /// Insert many drafts in one transaction, returning assigned ids
    async fn insert_many(&self, drafts: Vec<TodoDraft>) -> Result<Vec<i64>, DomainError>;

    /// Field-level patch: writes only the columns present in the patch
    async fn update_fields(&self, id: i64, patch: &TodoPatch) -> Result<Todo, DomainError>;

    /// Persist the lifecycle state of an already-loaded todo
    /// (completed_at / verified_at / verified_by / feedback)
    async fn save_state(&self, todo: &Todo) -> Result<(), DomainError>;

    /// Persist lifecycle state for a batch of todos
    async fn save_state_many(&self, todos: &[Todo]) -> Result<(), DomainError>;

    /// Tombstone the todo (sets deleted_at)
    async fn soft_delete(&self, id: i64) -> Result<(), DomainError>;

    /// Aggregate counts for the bound tenant
    async fn stats(&self) -> Result<TodoStats, DomainError>;

    /// Fraction of non-deleted todos that are completed (0.0 when empty)
    async fn completion_rate(&self) -> Result<f64, DomainError>;
}
