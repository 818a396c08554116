//! Configuration: environment detection, .env layering and typed settings

pub mod database;
pub mod env;

pub use database::{DatabaseConfig, DatabaseConfigBuilder};
pub use env::{env, env_optional, load_dotenv, Environment};
