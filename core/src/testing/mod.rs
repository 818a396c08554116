//! Testing utilities
//!
//! `TestDatabase` gives each test an isolated in-memory store with the full
//! schema applied, plus factories bound to arbitrary tenants.
//!
//! # Example
//!
//! ```rust,ignore
//! let db = TestDatabase::new().await;
//! let factory = db.factory("tenant-1");
//! let todo = factory.create_todo().execute(input).await?;
//! ```

use sea_orm_migration::MigratorTrait;

use crate::config::DatabaseConfig;
use crate::database::DbConnection;
use crate::migrations::Migrator;
use crate::usecase::TodoUseCaseFactory;

/// Isolated in-memory database for tests
pub struct TestDatabase {
    conn: DbConnection,
}

impl TestDatabase {
    /// Connect to a fresh `sqlite::memory:` database and run all migrations
    ///
    /// The pool is pinned to a single connection; sqlite in-memory databases
    /// are per-connection, so a larger pool would see empty schemas.
    pub async fn new() -> Self {
        let config = DatabaseConfig::builder()
            .url("sqlite::memory:")
            .max_connections(1)
            .min_connections(1)
            .build();

        let conn = DbConnection::connect(&config)
            .await
            .expect("failed to open in-memory database");

        Migrator::up(conn.inner(), None)
            .await
            .expect("failed to run migrations");

        Self { conn }
    }

    /// Use-case factory bound to this database and the given tenant
    pub fn factory(&self, tenant_id: &str) -> TodoUseCaseFactory {
        TodoUseCaseFactory::new(self.conn.clone(), tenant_id)
    }
}
