//! Acadia core: multi-tenant academy management
//!
//! The layered Todo subsystem: domain entities and value objects, a
//! repository seam over SeaORM, one use case per operation, and the factory
//! that wires them per tenant. The `app` crate exposes this over HTTP.

pub mod config;
pub mod database;
pub mod domain;
pub mod entities;
pub mod error;
pub mod migrations;
pub mod repository;
pub mod testing;
pub mod usecase;

pub use database::{DbConnection, DB};
pub use domain::{Priority, Todo, TodoAttributes, TodoPatch};
pub use error::DomainError;
pub use repository::{TodoFilter, TodoRepository, TodoStats};
pub use usecase::TodoUseCaseFactory;
