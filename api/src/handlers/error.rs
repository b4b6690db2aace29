//! Translation of domain outcomes into HTTP responses.
//!
//! Every handler funnels its failures through this module so that status codes
//! and the `ErrorResponse` body stay identical across endpoints.

use std::collections::HashMap;

use actix_web::{error::JsonPayloadError, http::StatusCode, HttpRequest, HttpResponse};
use ps_core::errors::{AuthError, DomainError, TokenError, ValidationError};
use ps_shared::{error_codes, ErrorResponse};
use validator::ValidationErrors;

/// Status code and body for a domain error
pub fn error_parts(error: &DomainError) -> (StatusCode, ErrorResponse) {
    match error {
        DomainError::Validation { message } => (
            StatusCode::BAD_REQUEST,
            ErrorResponse::new(error_codes::VALIDATION_ERROR, message.clone()),
        ),
        DomainError::BusinessRule { message } => (
            StatusCode::BAD_REQUEST,
            ErrorResponse::new(error_codes::BAD_REQUEST, message.clone()),
        ),
        DomainError::ValidationErr(validation_error) => (
            StatusCode::BAD_REQUEST,
            validation_body(validation_error),
        ),
        DomainError::NotFound { resource } => (
            StatusCode::NOT_FOUND,
            ErrorResponse::new(error_codes::NOT_FOUND, format!("{} not found", resource)),
        ),
        // Duplicate keys surface as a store failure on the wire
        DomainError::Conflict { field } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorResponse::new(error_codes::CONFLICT, format!("{} already exists", field))
                .add_detail("field", field),
        ),
        DomainError::Database { .. } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorResponse::new(error_codes::DATABASE_ERROR, "A database error occurred"),
        ),
        DomainError::Timeout { operation } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorResponse::new(error_codes::TIMEOUT, format!("{} timed out", operation)),
        ),
        DomainError::Internal { .. } => internal_parts(),
        DomainError::Auth(auth_error) => auth_parts(auth_error),
        DomainError::Token(token_error) => token_parts(token_error),
    }
}

fn auth_parts(error: &AuthError) -> (StatusCode, ErrorResponse) {
    match error {
        AuthError::InvalidCredentials => (
            StatusCode::UNAUTHORIZED,
            ErrorResponse::new(error_codes::INVALID_CREDENTIALS, "Invalid credentials"),
        ),
        AuthError::UserNotFound => (
            StatusCode::NOT_FOUND,
            ErrorResponse::new(error_codes::NOT_FOUND, "user not found"),
        ),
        AuthError::InsufficientPermissions => (
            StatusCode::FORBIDDEN,
            ErrorResponse::new(error_codes::FORBIDDEN, "Insufficient permissions"),
        ),
        AuthError::PasswordHashingFailed => internal_parts(),
    }
}

fn token_parts(error: &TokenError) -> (StatusCode, ErrorResponse) {
    match error {
        TokenError::MissingToken => (
            StatusCode::UNAUTHORIZED,
            ErrorResponse::new(error_codes::UNAUTHORIZED, "Authorization header missing"),
        ),
        TokenError::TokenExpired => (
            StatusCode::UNAUTHORIZED,
            ErrorResponse::new(error_codes::TOKEN_EXPIRED, "Token expired"),
        ),
        TokenError::TokenGenerationFailed => internal_parts(),
        TokenError::InvalidTokenFormat
        | TokenError::InvalidSignature
        | TokenError::InvalidAlgorithm
        | TokenError::InvalidClaims => (
            StatusCode::UNAUTHORIZED,
            ErrorResponse::new(error_codes::TOKEN_INVALID, "Invalid token"),
        ),
    }
}

fn internal_parts() -> (StatusCode, ErrorResponse) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        ErrorResponse::new(error_codes::INTERNAL_ERROR, "An internal error occurred"),
    )
}

fn validation_body(error: &ValidationError) -> ErrorResponse {
    ErrorResponse::new(error_codes::VALIDATION_ERROR, error.to_string())
        .add_detail("field", error.field())
}

/// Handle domain errors and convert them to appropriate HTTP responses
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    let (status, body) = error_parts(&error);
    if status.is_server_error() {
        log::error!("Domain error: {:?}", error);
    } else {
        log::debug!("Request rejected: {}", error);
    }
    HttpResponse::build(status).json(body)
}

/// 400 response listing every failed field of a request DTO
pub fn validation_error_response(errors: &ValidationErrors) -> HttpResponse {
    let mut details = HashMap::new();
    for (field, field_errors) in errors.field_errors() {
        let messages: Vec<String> = field_errors
            .iter()
            .map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string())
            })
            .collect();
        details.insert(field.to_string(), serde_json::json!(messages));
    }

    log::debug!("Validation failed: {:?}", details.keys().collect::<Vec<_>>());

    HttpResponse::BadRequest().json(ErrorResponse::with_details(
        error_codes::VALIDATION_ERROR,
        "Invalid request data",
        details,
    ))
}

/// 400 response for a path identifier that is not an integer
pub fn invalid_id_response(raw: &str) -> HttpResponse {
    HttpResponse::BadRequest().json(
        ErrorResponse::new(error_codes::INVALID_ID, "invalid id").add_detail("id", raw),
    )
}

/// Body for JSON payloads that fail to deserialize
pub fn json_error_response(error: &JsonPayloadError, _req: &HttpRequest) -> HttpResponse {
    let status = match error {
        JsonPayloadError::OverflowKnownLength { .. } | JsonPayloadError::Overflow { .. } => {
            StatusCode::PAYLOAD_TOO_LARGE
        }
        _ => StatusCode::BAD_REQUEST,
    };
    HttpResponse::build(status).json(ErrorResponse::new(
        error_codes::BAD_REQUEST,
        format!("Invalid JSON body: {}", error),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = vec![
            (DomainError::not_found("product"), StatusCode::NOT_FOUND),
            (AuthError::InvalidCredentials.into(), StatusCode::UNAUTHORIZED),
            (AuthError::InsufficientPermissions.into(), StatusCode::FORBIDDEN),
            (TokenError::TokenExpired.into(), StatusCode::UNAUTHORIZED),
            (TokenError::InvalidAlgorithm.into(), StatusCode::UNAUTHORIZED),
            (
                ValidationError::InvalidPrice { price_cents: 0 }.into(),
                StatusCode::BAD_REQUEST,
            ),
            (
                DomainError::Conflict {
                    field: "email".to_string(),
                },
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                DomainError::Timeout {
                    operation: "list users".to_string(),
                },
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (DomainError::database("connection reset"), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (error, expected) in cases {
            let (status, _) = error_parts(&error);
            assert_eq!(status, expected, "wrong status for {:?}", error);
        }
    }

    #[test]
    fn test_database_message_is_not_exposed() {
        let (_, body) = error_parts(&DomainError::database("Access denied for user 'root'"));
        assert_eq!(body.error, error_codes::DATABASE_ERROR);
        assert!(!body.message.contains("root"));
    }

    #[test]
    fn test_validation_error_carries_field() {
        let (_, body) = error_parts(&ValidationError::InvalidPrice { price_cents: -5 }.into());
        let details = body.details.unwrap();
        assert_eq!(details["field"], serde_json::json!("price_cents"));
    }
}
