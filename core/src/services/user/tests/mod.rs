//! Tests for user service

#[cfg(test)]
mod service_tests;
