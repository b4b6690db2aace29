//! Registration and login

use actix_web::{web, HttpResponse};
use ps_core::repositories::{ProductRepository, UserRepository};
use ps_shared::MessageResponse;
use validator::Validate;

use crate::app::AppState;
use crate::dto::auth::{LoginRequest, RegisterRequest, TokenResponse};
use crate::handlers::{handle_domain_error, validation_error_response};

/// Handler for POST /api/auth/register
///
/// # Request Body
///
/// ```json
/// { "email": "a@b.com", "password": "secret1", "username": "alice" }
/// ```
///
/// `username` is optional and defaults to the email address.
///
/// # Response
///
/// 201 `{"message": "user registered"}`
pub async fn register<U, P>(
    state: web::Data<AppState<U, P>>,
    request: web::Json<RegisterRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: ProductRepository + 'static,
{
    let request = request.into_inner();
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    match state
        .auth_service
        .register(&request.email, &request.password, request.username.as_deref())
        .await
    {
        Ok(user) => {
            log::info!("Registered user {}", user.id);
            HttpResponse::Created().json(MessageResponse::new("user registered"))
        }
        Err(e) => handle_domain_error(e),
    }
}

/// Handler for POST /api/auth/login
///
/// Returns 200 `{"token": "..."}`; every credential mismatch is a uniform 401.
pub async fn login<U, P>(
    state: web::Data<AppState<U, P>>,
    request: web::Json<LoginRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: ProductRepository + 'static,
{
    let request = request.into_inner();
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    match state.auth_service.login(&request.email, &request.password).await {
        Ok(token) => HttpResponse::Ok().json(TokenResponse { token }),
        Err(e) => handle_domain_error(e),
    }
}
