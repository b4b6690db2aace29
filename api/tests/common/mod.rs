//! Shared fixtures for the HTTP tests

#![allow(dead_code, unused_macros)]

use std::sync::Arc;

use actix_web::{test, web};
use ps_api::AppState;
use ps_core::{
    InMemoryProductRepository, InMemoryUserRepository, PasswordHasher, User, UserRepository,
    UserRole,
};
use ps_shared::config::{AppConfig, AuthConfig};
use serde_json::json;

pub const TEST_SECRET: &str = "test_secret";

pub type TestState = AppState<InMemoryUserRepository, InMemoryProductRepository>;

/// App state over in-memory stores plus direct access to the user store
pub struct TestContext {
    pub state: web::Data<TestState>,
    pub users: Arc<InMemoryUserRepository>,
    pub config: AppConfig,
}

pub fn test_context() -> TestContext {
    let config = AppConfig {
        auth: AuthConfig::new(TEST_SECRET).with_bcrypt_cost(4),
        ..Default::default()
    };
    let users = Arc::new(InMemoryUserRepository::new());
    let products = Arc::new(InMemoryProductRepository::new());
    let state = web::Data::new(AppState::new(users.clone(), products, &config.auth));

    TestContext {
        state,
        users,
        config,
    }
}

/// Stores an admin account directly, bypassing registration
pub async fn seed_admin(users: &InMemoryUserRepository, email: &str, password: &str) -> i64 {
    let hash = PasswordHasher::new(4).hash(password).unwrap();
    let admin = User::new("admin".to_string(), email.to_string(), hash).with_role(UserRole::Admin);
    users.create(admin).await.unwrap().id
}

pub fn register_request(email: &str, password: &str) -> test::TestRequest {
    test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(json!({ "email": email, "password": password }))
}

pub fn login_request(email: &str, password: &str) -> test::TestRequest {
    test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({ "email": email, "password": password }))
}

pub fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", token))
}

/// Registers an account through the API and returns a session token for it
macro_rules! register_and_login {
    ($app:expr, $email:expr, $password:expr) => {{
        let resp = actix_web::test::call_service(
            &$app,
            crate::common::register_request($email, $password).to_request(),
        )
        .await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::CREATED);

        let body: serde_json::Value = actix_web::test::call_and_read_body_json(
            &$app,
            crate::common::login_request($email, $password).to_request(),
        )
        .await;
        body["token"].as_str().unwrap().to_string()
    }};
}
