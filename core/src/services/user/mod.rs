//! User account service module

mod service;

#[cfg(test)]
mod tests;

pub use service::{validate_username, UserService, USERNAME_MAX_LEN, USERNAME_MIN_LEN};
