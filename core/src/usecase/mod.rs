//! Application layer: one use case per operation
//!
//! Use cases validate input, invoke domain transitions and delegate
//! persistence to the repository. All of them return
//! `Result<_, DomainError>`; bulk operations report per-item failures inside
//! their `Ok` value and reserve `Err` for operation-level problems.

pub mod complete_todo;
pub mod create_todo;
pub mod create_todos_for_students;
pub mod delete_todo;
pub mod factory;
pub mod get_todo;
pub mod get_todos;
pub mod reject_todo;
pub mod update_todo;
pub mod verify_todo;
pub mod verify_todos;

pub use complete_todo::CompleteTodoUseCase;
pub use create_todo::{CreateTodoInput, CreateTodoUseCase};
pub use create_todos_for_students::{
    CreateTodosForStudentsInput, CreateTodosForStudentsUseCase, CreatedTodos,
};
pub use delete_todo::DeleteTodoUseCase;
pub use factory::TodoUseCaseFactory;
pub use get_todo::GetTodoUseCase;
pub use get_todos::GetTodosUseCase;
pub use reject_todo::{RejectTodoInput, RejectTodoUseCase};
pub use update_todo::UpdateTodoUseCase;
pub use verify_todo::{VerifyTodoInput, VerifyTodoUseCase};
pub use verify_todos::{FailedTodo, VerifiedTodos, VerifyTodosInput, VerifyTodosUseCase};
