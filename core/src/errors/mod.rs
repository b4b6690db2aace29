//! Domain-specific error types and error handling.

mod types;

// Re-export all error types
pub use types::{AuthError, TokenError, ValidationError};

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Business rule violation: {message}")]
    BusinessRule { message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    /// A unique key (email, username, sku) is already taken
    #[error("Duplicate value for {field}")]
    Conflict { field: String },

    #[error("Database error: {message}")]
    Database { message: String },

    #[error("Operation timed out: {operation}")]
    Timeout { operation: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    ValidationErr(#[from] ValidationError),
}

impl DomainError {
    pub fn not_found(resource: impl Into<String>) -> Self {
        DomainError::NotFound {
            resource: resource.into(),
        }
    }

    pub fn database(message: impl std::fmt::Display) -> Self {
        DomainError::Database {
            message: message.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, DomainError::NotFound { .. })
    }
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bridged_errors_keep_their_message() {
        let err: DomainError = AuthError::InvalidCredentials.into();
        assert_eq!(err.to_string(), "Invalid credentials");

        let err: DomainError = ValidationError::InvalidPrice { price_cents: 0 }.into();
        assert_eq!(err.to_string(), "Price must be greater than zero, got 0");
    }

    #[test]
    fn test_validation_error_field() {
        assert_eq!(ValidationError::InvalidEmail.field(), "email");
        assert_eq!(
            ValidationError::InvalidPrice { price_cents: -1 }.field(),
            "price_cents"
        );
    }

    #[test]
    fn test_not_found_helper() {
        let err = DomainError::not_found("product");
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Resource not found: product");
    }
}
