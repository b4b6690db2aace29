pub mod r#trait {
    pub use super::trait_::*;
}
#[path = "trait.rs"]
mod trait_;
pub mod memory;

pub use memory::InMemoryUserRepository;
pub use r#trait::UserRepository;

#[cfg(test)]
#[path = "tests/memory_tests.rs"]
mod tests;
