//! Authentication service module
//!
//! This module provides password-based authentication:
//! - User registration with bcrypt-hashed passwords
//! - Login issuing a 24 hour session token
//! - Password change for an authenticated user

mod password;
mod service;

#[cfg(test)]
mod tests;

pub use password::PasswordHasher;
pub use service::AuthService;
