//! Use-case factory
//!
//! Wires a tenant-scoped repository to each use case. The HTTP layer builds
//! one factory per request from the acting tenant; tests build one around an
//! in-memory connection.

use std::sync::Arc;

use crate::database::{DbConnection, DB};
use crate::error::DomainError;
use crate::repository::{SeaOrmTodoRepository, TodoRepository};
use crate::usecase::{
    CompleteTodoUseCase, CreateTodoUseCase, CreateTodosForStudentsUseCase, DeleteTodoUseCase,
    GetTodoUseCase, GetTodosUseCase, RejectTodoUseCase, UpdateTodoUseCase, VerifyTodoUseCase,
    VerifyTodosUseCase,
};

/// Builds use cases bound to one tenant and one connection
#[derive(Clone)]
pub struct TodoUseCaseFactory {
    db: DbConnection,
    tenant_id: String,
}

impl TodoUseCaseFactory {
    /// Bind to an explicit connection (tests, alternate clients)
    pub fn new(db: DbConnection, tenant_id: impl Into<String>) -> Self {
        Self {
            db,
            tenant_id: tenant_id.into(),
        }
    }

    /// Bind to the shared server-side connection
    pub fn from_global(tenant_id: impl Into<String>) -> Result<Self, DomainError> {
        Ok(Self::new(DB::connection()?, tenant_id))
    }

    fn repository(&self) -> Arc<dyn TodoRepository> {
        Arc::new(SeaOrmTodoRepository::new(
            self.db.clone(),
            self.tenant_id.clone(),
        ))
    }

    pub fn create_todo(&self) -> CreateTodoUseCase {
        CreateTodoUseCase::new(self.repository(), self.tenant_id.clone())
    }

    pub fn create_todos_for_students(&self) -> CreateTodosForStudentsUseCase {
        CreateTodosForStudentsUseCase::new(self.repository(), self.tenant_id.clone())
    }

    pub fn update_todo(&self) -> UpdateTodoUseCase {
        UpdateTodoUseCase::new(self.repository())
    }

    pub fn complete_todo(&self) -> CompleteTodoUseCase {
        CompleteTodoUseCase::new(self.repository())
    }

    pub fn verify_todo(&self) -> VerifyTodoUseCase {
        VerifyTodoUseCase::new(self.repository())
    }

    pub fn verify_todos(&self) -> VerifyTodosUseCase {
        VerifyTodosUseCase::new(self.repository())
    }

    pub fn reject_todo(&self) -> RejectTodoUseCase {
        RejectTodoUseCase::new(self.repository())
    }

    pub fn delete_todo(&self) -> DeleteTodoUseCase {
        DeleteTodoUseCase::new(self.repository())
    }

    pub fn get_todo(&self) -> GetTodoUseCase {
        GetTodoUseCase::new(self.repository())
    }

    pub fn get_todos(&self) -> GetTodosUseCase {
        GetTodosUseCase::new(self.repository())
    }
}
