//! Domain-wide error types
//!
//! Provides the single error type used across the domain, use-case and
//! repository layers. The HTTP layer maps it to a response via `status_code()`.

use thiserror::Error;

/// Domain error type
///
/// Every use case returns `Result<T, DomainError>`. Validation and transition
/// failures are raised before any persistence attempt; store failures are
/// wrapped by the repository so callers never see backend-specific errors.
///
/// # Example
///
/// ```rust,ignore
/// use acadia_core::error::DomainError;
///
/// fn require_title(title: &str) -> Result<(), DomainError> {
///     if title.trim().is_empty() {
///         return Err(DomainError::validation("title", "title must not be empty"));
///     }
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, Error)]
pub enum DomainError {
    /// A required field is missing or has an invalid value
    #[error("Validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation
        field: String,
        /// The validation error message
        message: String,
    },

    /// An entity lifecycle transition was attempted from the wrong state
    /// (e.g. verifying a todo that was never completed)
    #[error("{message}")]
    InvalidTransition {
        /// Why the transition is not allowed
        message: String,
    },

    /// The referenced entity does not exist under the caller's tenant scope
    ///
    /// Tenant mismatch is deliberately indistinguishable from true absence so
    /// existence information never leaks across tenants.
    #[error("{entity} not found")]
    NotFound {
        /// The name of the entity that was not found
        entity: String,
    },

    /// Underlying store error (network, constraint violation)
    #[error("Database error: {0}")]
    Database(String),

    /// Generic internal error
    #[error("Internal error: {message}")]
    Internal {
        /// The error message
        message: String,
    },
}

impl DomainError {
    /// Create a Validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create an InvalidTransition error
    pub fn invalid_transition(message: impl Into<String>) -> Self {
        Self::InvalidTransition {
            message: message.into(),
        }
    }

    /// Create a NotFound error
    pub fn not_found(entity: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
        }
    }

    /// Create a Database error
    pub fn database(message: impl Into<String>) -> Self {
        Self::Database(message.into())
    }

    /// Create an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Validation { .. } => 422,
            Self::InvalidTransition { .. } => 422,
            Self::NotFound { .. } => 404,
            Self::Database(_) => 500,
            Self::Internal { .. } => 500,
        }
    }
}

// Implement From<DbErr> for automatic error conversion with ?
impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        Self::Database(e.to_string())
    }
}
