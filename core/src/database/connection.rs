//! Database connection management

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::sync::Arc;
use std::time::Duration;

use crate::config::DatabaseConfig;
use crate::error::DomainError;

/// Wrapper around SeaORM's DatabaseConnection
///
/// Clonable and thread-safe so a single pool can be shared across requests
/// and handed to per-tenant repositories.
///
/// # Example
///
/// ```rust,ignore
/// let conn = DbConnection::connect(&config).await?;
/// let rows = todos::Entity::find().all(conn.inner()).await?;
/// ```
#[derive(Clone)]
pub struct DbConnection {
    inner: Arc<DatabaseConnection>,
}

impl DbConnection {
    /// Create a new database connection from config
    ///
    /// Establishes a connection pool. For SQLite URLs the database file is
    /// created on first use.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DomainError> {
        let url = if config.url.starts_with("sqlite://") {
            let path = config.url.trim_start_matches("sqlite://");
            let path = path.trim_start_matches("./");

            if path != ":memory:" && !path.starts_with(":memory:") {
                if let Some(parent) = std::path::Path::new(path).parent() {
                    if !parent.as_os_str().is_empty() {
                        std::fs::create_dir_all(parent).ok();
                    }
                }
                if !std::path::Path::new(path).exists() {
                    std::fs::File::create(path).ok();
                }
            }

            format!("sqlite:{}?mode=rwc", path)
        } else {
            config.url.clone()
        };

        let mut opt = ConnectOptions::new(&url);
        opt.max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect_timeout(Duration::from_secs(config.connect_timeout))
            .sqlx_logging(config.logging);

        let conn = Database::connect(opt)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;

        Ok(Self {
            inner: Arc::new(conn),
        })
    }

    /// Get a reference to the underlying SeaORM connection
    pub fn inner(&self) -> &DatabaseConnection {
        &self.inner
    }
}

impl AsRef<DatabaseConnection> for DbConnection {
    fn as_ref(&self) -> &DatabaseConnection {
        &self.inner
    }
}

impl std::ops::Deref for DbConnection {
    type Target = DatabaseConnection;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}
