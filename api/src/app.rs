//! Application state and factory
//!
//! This module holds the shared services handed to every handler and
//! provides the factory for creating the Actix-web application. The factory
//! is generic over the repositories so tests can run it on in-memory stores.

use std::sync::Arc;

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    error::InternalError,
    middleware::Logger,
    web, App, Error,
};
use ps_core::repositories::{ProductRepository, UserRepository};
use ps_core::services::{AuthService, ProductService, TokenService, UserService};
use ps_shared::config::{AppConfig, AuthConfig};

use crate::handlers::error::json_error_response;
use crate::middleware::{auth::JwtAuth, cors::create_cors};
use crate::routes::{auth, health, products, users};

/// Application state that holds shared services
pub struct AppState<U, P>
where
    U: UserRepository,
    P: ProductRepository,
{
    pub auth_service: Arc<AuthService<U>>,
    pub user_service: Arc<UserService<U>>,
    pub product_service: Arc<ProductService<P>>,
    pub token_service: Arc<TokenService>,
}

impl<U, P> AppState<U, P>
where
    U: UserRepository,
    P: ProductRepository,
{
    /// Wire every service over the given repositories
    pub fn new(user_repository: Arc<U>, product_repository: Arc<P>, config: &AuthConfig) -> Self {
        let token_service = Arc::new(TokenService::from_config(config));
        let auth_service = Arc::new(AuthService::new(
            Arc::clone(&user_repository),
            Arc::clone(&token_service),
            config,
        ));
        let user_service = Arc::new(UserService::new(user_repository, config));
        let product_service = Arc::new(ProductService::new(product_repository));

        Self {
            auth_service,
            user_service,
            product_service,
            token_service,
        }
    }
}

/// Create and configure the application with all dependencies
pub fn create_app<U, P>(
    app_state: web::Data<AppState<U, P>>,
    config: &AppConfig,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    P: ProductRepository + 'static,
{
    let cors = create_cors(config.environment);
    let jwt_auth = JwtAuth::new(Arc::clone(&app_state.token_service));

    let json_config = web::JsonConfig::default()
        .limit(config.server.max_payload_size)
        .error_handler(|err, req| {
            let response = json_error_response(&err, req);
            InternalError::from_response(err, response).into()
        });

    App::new()
        // Add application state
        .app_data(app_state)
        .app_data(json_config)
        // Add middleware (CORS outermost, then logging)
        .wrap(Logger::default())
        .wrap(cors)
        // Liveness endpoints
        .route("/ping", web::get().to(health::ping))
        .route("/health", web::get().to(health::health_check))
        // API routes
        .service(
            web::scope(&config.server.api_prefix)
                .service(
                    web::scope("/auth")
                        .route("/register", web::post().to(auth::register::<U, P>))
                        .route("/login", web::post().to(auth::login::<U, P>)),
                )
                .service(
                    web::resource("/products")
                        .route(web::get().to(products::list_products::<U, P>))
                        .route(web::post().to(products::create_product::<U, P>)),
                )
                .service(
                    web::resource("/products/{id}")
                        .route(web::get().to(products::get_product::<U, P>))
                        .route(web::put().to(products::update_product::<U, P>))
                        .route(web::delete().to(products::delete_product::<U, P>)),
                )
                .service(
                    web::scope("/users")
                        .wrap(jwt_auth)
                        .route("/me", web::get().to(users::get_profile::<U, P>))
                        .route("/me", web::put().to(users::update_profile::<U, P>))
                        .route("/me/password", web::put().to(users::change_password::<U, P>))
                        .route("", web::get().to(users::list_users::<U, P>))
                        .route("/{id}", web::delete().to(users::delete_user::<U, P>)),
                ),
        )
        // Default 404 handler
        .default_service(web::route().to(health::not_found))
}
