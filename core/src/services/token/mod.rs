//! Token service module for session token management
//!
//! Session tokens are HS256 JWTs carrying the user identifier in `sub` and an
//! absolute `exp`. They are verified per request and never stored.

mod service;

#[cfg(test)]
mod tests;

pub use service::TokenService;
