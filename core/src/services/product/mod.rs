//! Product service module

mod service;

#[cfg(test)]
mod tests;

pub use service::ProductService;
