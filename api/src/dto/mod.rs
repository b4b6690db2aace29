//! Request and response bodies of the JSON API

pub mod auth;
pub mod product;
pub mod user;

pub use auth::{LoginRequest, RegisterRequest, TokenResponse};
pub use product::ProductRequest;
pub use user::{ChangePasswordRequest, ProfileUpdatedResponse, UpdateProfileRequest, UserResponse};
