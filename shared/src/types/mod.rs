//! Type definitions shared by the HTTP layer and the services
//!
//! - `pagination` - limit/offset paging for list endpoints
//! - `response` - small response bodies reused by several routes

pub mod pagination;
pub mod response;

pub use pagination::{PageParams, PaginatedResponse, DEFAULT_LIMIT, DEFAULT_OFFSET};
pub use response::{HealthResponse, MessageResponse};
