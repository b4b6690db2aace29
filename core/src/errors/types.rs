//! Error types for authentication, session tokens and input validation
//!
//! The HTTP layer decides status codes and wire messages; these enums only
//! describe what went wrong.

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Unknown email, deleted account or wrong password. One variant for all
    /// of them so callers cannot tell which.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("User not found")]
    UserNotFound,

    #[error("Insufficient permissions")]
    InsufficientPermissions,

    #[error("Password hashing failed")]
    PasswordHashingFailed,
}

/// Session token errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Missing token")]
    MissingToken,

    #[error("Invalid token format")]
    InvalidTokenFormat,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Invalid signing algorithm")]
    InvalidAlgorithm,

    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid claims")]
    InvalidClaims,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// Input validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required field: {field}")]
    RequiredField { field: String },

    #[error("Invalid length: {field} (min: {min}, max: {max})")]
    InvalidLength {
        field: String,
        min: usize,
        max: usize,
    },

    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Price must be greater than zero, got {price_cents}")]
    InvalidPrice { price_cents: i64 },

    #[error("Out of range: {field} (min: {min})")]
    OutOfRange { field: String, min: i64 },

    #[error("Username may only be an email address if it is the account's own email")]
    ForeignEmailUsername,
}

impl ValidationError {
    /// Name of the offending input field
    pub fn field(&self) -> &str {
        match self {
            ValidationError::RequiredField { field }
            | ValidationError::InvalidLength { field, .. }
            | ValidationError::OutOfRange { field, .. } => field,
            ValidationError::InvalidEmail => "email",
            ValidationError::ForeignEmailUsername => "username",
            ValidationError::InvalidPrice { .. } => "price_cents",
        }
    }
}
