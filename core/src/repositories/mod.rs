//! Repository interfaces and their in-memory adapters.

pub mod product;
pub mod user;

pub use product::{InMemoryProductRepository, ProductRepository};
pub use user::{InMemoryUserRepository, UserRepository};
