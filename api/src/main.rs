use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use log::{info, warn};

use ps_api::{create_app, AppState};
use ps_infra::database::{DatabasePool, MySqlProductRepository, MySqlUserRepository};
use ps_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();

    // Initialize logger; RUST_LOG still wins over LOG_LEVEL
    env_logger::init_from_env(
        env_logger::Env::new().default_filter_or(config.logging.level.as_str()),
    );

    config.validate().map_err(anyhow::Error::msg)?;
    if config.auth.is_using_default_secret() {
        warn!("JWT_SECRET is not set; using the development secret");
    }

    info!("Starting petshop API server ({})", config.environment);

    let pool = DatabasePool::new(config.database.clone())
        .await
        .context("failed to connect to the database")?;
    if config.database.run_migrations {
        pool.run_migrations()
            .await
            .context("failed to apply database migrations")?;
    }
    info!("Database ready: {}", pool.get_statistics());

    let user_repository = Arc::new(MySqlUserRepository::new(pool.get_pool().clone()));
    let product_repository = Arc::new(MySqlProductRepository::new(pool.get_pool().clone()));
    let app_state = web::Data::new(AppState::new(
        user_repository,
        product_repository,
        &config.auth,
    ));

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let workers = config.server.workers;
    let app_config = config.clone();
    let mut server = HttpServer::new(move || create_app(app_state.clone(), &app_config));
    if workers > 0 {
        server = server.workers(workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await?;

    pool.close().await;
    info!("Server stopped");
    Ok(())
}
