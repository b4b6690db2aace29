//! Tests for product service

#[cfg(test)]
mod service_tests;
