//! Route handlers grouped by resource

pub mod auth;
pub mod health;
pub mod products;
pub mod users;

use actix_web::HttpResponse;

use crate::handlers::invalid_id_response;

/// Parses a path identifier, answering 400 when it is not an integer
pub(crate) fn parse_id(raw: &str) -> Result<i64, HttpResponse> {
    raw.trim().parse::<i64>().map_err(|_| invalid_id_response(raw))
}
