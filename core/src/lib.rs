//! # Petshop Core
//!
//! Core business logic and domain layer for the petshop backend.
//! This crate contains domain entities, business services, repository interfaces
//! with in-memory adapters, and the error types shared by every layer above it.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{Claims, NewProduct, Product, User, UserRole};
pub use errors::{AuthError, DomainError, DomainResult, TokenError, ValidationError};
pub use repositories::{
    InMemoryProductRepository, InMemoryUserRepository, ProductRepository, UserRepository,
};
pub use services::{AuthService, PasswordHasher, ProductService, TokenService, UserService};
