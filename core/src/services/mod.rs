//! Business services containing domain logic and use cases.

pub mod auth;
pub mod product;
pub mod token;
pub mod user;

// Re-export commonly used types
pub use auth::{AuthService, PasswordHasher};
pub use product::ProductService;
pub use token::TokenService;
pub use user::UserService;
