//! Shared utilities and common types for the petshop server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration loaded from the environment
//! - The JSON error body returned by every endpoint
//! - Pagination and small response types
//! - Validation helpers

pub mod config;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, DatabaseConfig, Environment, LoggingConfig, ServerConfig,
};
pub use errors::{error_codes, ErrorResponse};
pub use types::{MessageResponse, PageParams, PaginatedResponse};
pub use utils::validation;
