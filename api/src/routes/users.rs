//! Token-gated account endpoints
//!
//! Every handler here runs behind `JwtAuth`, so `AuthContext` is always present.

use actix_web::{web, HttpResponse};
use ps_core::repositories::{ProductRepository, UserRepository};
use ps_shared::MessageResponse;
use validator::Validate;

use super::parse_id;
use crate::app::AppState;
use crate::dto::user::{
    ChangePasswordRequest, ProfileUpdatedResponse, UpdateProfileRequest, UserResponse,
};
use crate::handlers::{handle_domain_error, validation_error_response};
use crate::middleware::auth::AuthContext;

/// Handler for GET /api/users/me
pub async fn get_profile<U, P>(
    state: web::Data<AppState<U, P>>,
    auth: AuthContext,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: ProductRepository + 'static,
{
    match state.user_service.profile(auth.user_id).await {
        Ok(user) => HttpResponse::Ok().json(UserResponse::from(&user)),
        Err(e) => handle_domain_error(e),
    }
}

/// Handler for PUT /api/users/me
pub async fn update_profile<U, P>(
    state: web::Data<AppState<U, P>>,
    auth: AuthContext,
    request: web::Json<UpdateProfileRequest>,
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
        .user_service
        .update_profile(auth.user_id, &request.username, &request.email)
        .await
    {
        Ok(user) => HttpResponse::Ok().json(ProfileUpdatedResponse {
            message: "Profile updated successfully".to_string(),
            user: UserResponse::from(&user),
        }),
        Err(e) => handle_domain_error(e),
    }
}

/// Handler for PUT /api/users/me/password
pub async fn change_password<U, P>(
    state: web::Data<AppState<U, P>>,
    auth: AuthContext,
    request: web::Json<ChangePasswordRequest>,
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
        .change_password(auth.user_id, &request.old_password, &request.new_password)
        .await
    {
        Ok(()) => HttpResponse::Ok().json(MessageResponse::new("Password updated successfully")),
        Err(e) => handle_domain_error(e),
    }
}

/// Handler for GET /api/users (admin only)
pub async fn list_users<U, P>(
    state: web::Data<AppState<U, P>>,
    auth: AuthContext,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: ProductRepository + 'static,
{
    match state.user_service.list_users(auth.user_id).await {
        Ok(users) => {
            let body: Vec<UserResponse> = users.iter().map(UserResponse::from).collect();
            HttpResponse::Ok().json(body)
        }
        Err(e) => handle_domain_error(e),
    }
}

/// Handler for DELETE /api/users/{id} (admin only)
pub async fn delete_user<U, P>(
    state: web::Data<AppState<U, P>>,
    auth: AuthContext,
    path: web::Path<String>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: ProductRepository + 'static,
{
    let user_id = match parse_id(&path) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.user_service.delete_user(auth.user_id, user_id).await {
        Ok(()) => HttpResponse::Ok().json(MessageResponse::new("User deleted successfully")),
        Err(e) => handle_domain_error(e),
    }
}
