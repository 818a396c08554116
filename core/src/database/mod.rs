//! Database module
//!
//! Connection pooling plus a process-wide facade for the server-side client.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use acadia_core::config::DatabaseConfig;
//! use acadia_core::database::DB;
//!
//! // 1. Initialize connection (in bootstrap)
//! DB::init(DatabaseConfig::from_env()).await?;
//!
//! // 2. Use anywhere in the app
//! let conn = DB::connection()?;
//! ```

pub mod connection;

pub use connection::DbConnection;

use std::sync::OnceLock;

use crate::config::DatabaseConfig;
use crate::error::DomainError;

static GLOBAL_CONNECTION: OnceLock<DbConnection> = OnceLock::new();

/// Database facade - main entry point for the shared server-side connection
///
/// Holds the singleton pool the application binary boots with. Repositories
/// built for tests or alternate clients take a `DbConnection` directly and
/// never touch the global.
pub struct DB;

impl DB {
    /// Initialize the shared database connection
    ///
    /// Establishes the pool and stores it process-wide. Calling it a second
    /// time is a no-op (the first connection wins).
    pub async fn init(config: DatabaseConfig) -> Result<(), DomainError> {
        let connection = DbConnection::connect(&config).await?;
        let _ = GLOBAL_CONNECTION.set(connection);
        Ok(())
    }

    /// Get the shared database connection
    ///
    /// # Errors
    ///
    /// Returns an error if `DB::init()` was not called.
    pub fn connection() -> Result<DbConnection, DomainError> {
        GLOBAL_CONNECTION
            .get()
            .cloned()
            .ok_or_else(|| DomainError::internal("database not initialized, call DB::init() first"))
    }
}

// Re-export sea_orm types that callers commonly need
pub use sea_orm;
