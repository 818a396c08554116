use std::path::Path;

/// Deployment environment, detected from `APP_ENV`
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Local,
    Development,
    Staging,
    Production,
    Testing,
    Custom(String),
}

impl Environment {
    /// Read `APP_ENV`; an unset variable means `Local`
    pub fn detect() -> Self {
        match std::env::var("APP_ENV").ok().as_deref() {
            Some("production") => Self::Production,
            Some("staging") => Self::Staging,
            Some("development") => Self::Development,
            Some("testing") => Self::Testing,
            Some("local") | None => Self::Local,
            Some(other) => Self::Custom(other.to_string()),
        }
    }

    fn file_suffix(&self) -> &str {
        match self {
            Self::Local => "local",
            Self::Development => "development",
            Self::Staging => "staging",
            Self::Production => "production",
            Self::Testing => "testing",
            Self::Custom(name) => name.as_str(),
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.file_suffix())
    }
}

/// Layer .env files onto the process environment
///
/// Later entries override earlier ones:
/// `.env` < `.env.local` < `.env.{environment}` < `.env.{environment}.local`
/// < variables already set in the process.
///
/// dotenvy never overwrites an existing variable, so the files are loaded in
/// reverse order.
pub fn load_dotenv(project_root: &Path) -> Environment {
    let env = Environment::detect();
    let suffix = env.file_suffix();

    let _ = dotenvy::from_path(project_root.join(format!(".env.{}.local", suffix)));
    let _ = dotenvy::from_path(project_root.join(format!(".env.{}", suffix)));
    let _ = dotenvy::from_path(project_root.join(".env.local"));
    let _ = dotenvy::from_path(project_root.join(".env"));

    env
}

/// Read an environment variable, falling back to `default` when it is unset
/// or fails to parse
///
/// # Example
/// ```
/// use acadia_core::config::env;
///
/// let max: u32 = env("DB_MAX_CONNECTIONS", 10);
/// ```
pub fn env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Read an optional environment variable
pub fn env_optional<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.parse().ok())
}
