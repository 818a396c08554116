//! Domain entities and value objects

pub mod priority;
pub mod todo;

pub use priority::Priority;
pub use todo::{Todo, TodoAttributes, TodoDraft, TodoPatch};
