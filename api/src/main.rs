use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use dotenv::dotenv;
use log::{info, warn};

use tm_api::{create_app, AppState, CatalogRepositories, Config};
use tm_infra::{DatabasePool, MySqlCatalogRepository, MySqlNoteRepository, MySqlUserRepository};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let config = Config::from_env();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or(config.logging.level.as_str()));

    info!("Starting TennisManager API Server ({})", config.environment);
    for warning in config.security_warnings() {
        warn!("{}", warning);
    }

    let database = DatabasePool::connect_with_retry(config.database.clone())
        .await
        .context("database is unreachable")?;
    database
        .run_migrations()
        .await
        .context("failed to create database schema")?;
    info!("{}", database.get_statistics());

    let pool = database.get_pool().clone();
    let state = web::Data::new(
        AppState::new(
            Arc::new(MySqlUserRepository::new(pool.clone())),
            Arc::new(MySqlNoteRepository::new(pool.clone())),
            &config,
        )
        .with_database(Arc::new(database.clone())),
    );
    let catalog = CatalogRepositories::from_shared(Arc::new(MySqlCatalogRepository::new(pool)));

    let bind_address = config.bind_address();
    info!("Server will bind to: {}", bind_address);

    let cors = config.cors.clone();
    let max_payload_size = config.server.max_payload_size;
    let mut server = HttpServer::new(move || {
        create_app(state.clone(), catalog.clone(), &cors, max_payload_size)
    });
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await?;

    database.close().await;
    Ok(())
}
