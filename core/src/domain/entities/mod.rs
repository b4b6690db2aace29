//! Domain entities representing core business objects.

pub mod product;
pub mod token;
pub mod user;

// Re-export commonly used types
pub use product::{NewProduct, Product, DESCRIPTION_MAX_LEN, NAME_MAX_LEN, NAME_MIN_LEN, SKU_MAX_LEN};
pub use token::{Claims, SESSION_TOKEN_TTL_HOURS};
pub use user::{User, UserRole};
