//! Application bootstrap
//!
//! Loads the environment and brings up the shared database connection before
//! the router starts serving.

use std::path::Path;

use acadia_core::config::{load_dotenv, DatabaseConfig};
use acadia_core::DB;

pub async fn register() {
    let environment = load_dotenv(Path::new("."));
    tracing::info!(%environment, "booting acadia");

    DB::init(DatabaseConfig::from_env())
        .await
        .expect("failed to connect to database");
}
