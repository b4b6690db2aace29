//! Integration tests for JWT authentication middleware

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{http::StatusCode, test, web, App, HttpResponse};
    use ps_api::middleware::auth::{AuthContext, JwtAuth};
    use ps_core::TokenService;

    fn token_service() -> Arc<TokenService> {
        Arc::new(TokenService::new("middleware_secret", chrono::Duration::hours(24)))
    }

    async fn whoami(auth: AuthContext) -> HttpResponse {
        HttpResponse::Ok().json(serde_json::json!({ "user_id": auth.user_id }))
    }

    #[actix_web::test]
    async fn test_middleware_requires_auth_header() {
        let app = test::init_service(
            App::new()
                .wrap(JwtAuth::new(token_service()))
                .route("/protected", web::get().to(whoami)),
        )
        .await;

        let req = test::TestRequest::get().uri("/protected").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_middleware_rejects_invalid_token() {
        let app = test::init_service(
            App::new()
                .wrap(JwtAuth::new(token_service()))
                .route("/protected", web::get().to(whoami)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/protected")
            .insert_header(("Authorization", "Bearer invalid-token"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_middleware_injects_auth_context() {
        let tokens = token_service();
        let token = tokens.issue(42).unwrap();

        let app = test::init_service(
            App::new()
                .wrap(JwtAuth::new(tokens))
                .route("/protected", web::get().to(whoami)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/protected")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["user_id"], 42);
    }

    #[actix_web::test]
    async fn test_auth_context_extractor_without_middleware() {
        let app = test::init_service(App::new().route("/protected", web::get().to(whoami))).await;

        let req = test::TestRequest::get().uri("/protected").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
