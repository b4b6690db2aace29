//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the petshop backend.
//! It provides the MySQL-backed implementations of the repository traits
//! declared in `ps_core`.
//!
//! ## Architecture
//!
//! - **Database**: connection pool, embedded migrations and repositories using SQLx
//!
//! ## Features
//!
//! - `mysql`: Enable MySQL database support (default)

// Re-export core types for convenience
pub use ps_core::errors::*;

/// Database module - MySQL implementations using SQLx
#[cfg(feature = "mysql")]
pub mod database;

/// Configuration used by the infrastructure layer
pub mod config {
    pub use ps_shared::config::DatabaseConfig;
}

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration error
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
