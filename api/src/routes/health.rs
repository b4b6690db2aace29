use actix_web::HttpResponse;
use ps_shared::{error_codes, types::response::HealthResponse, ErrorResponse, MessageResponse};

/// GET /ping
pub async fn ping() -> HttpResponse {
    HttpResponse::Ok().json(MessageResponse::new("pong"))
}

/// GET /health
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse::healthy(env!("CARGO_PKG_VERSION")))
}

/// Default 404 handler
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}
