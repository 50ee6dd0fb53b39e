// src/main.rs
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use migration::Migrator;
use sea_orm_migration::MigratorTrait;
use task_api::api::handlers::task_handler::task_router;
use task_api::config::Config;
use task_api::db::create_db_pool;
use task_api::service::task_service::TaskService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "task_api=info,tower_http=info".into()),
        )
        .with(fmt::layer())
        .init();

    tracing::info!("Starting Task API server...");

    let app_config = Config::from_env().expect("Failed to load configuration");
    tracing::info!("Configuration loaded: {:?}", app_config);

    let db_pool = create_db_pool(&app_config)
        .await
        .expect("Failed to create database pool");
    tracing::info!("Database pool created successfully.");

    Migrator::up(&db_pool, None)
        .await
        .expect("Failed to run migrations");
    tracing::info!("Migrations applied.");

    let task_service = Arc::new(TaskService::new(db_pool.clone()));

    let app_router = task_router(task_service).layer(TraceLayer::new_for_http());

    tracing::info!(
        "Router configured. Server listening on {}",
        app_config.server_addr
    );

    let listener = TcpListener::bind(&app_config.server_addr).await?;
    axum::serve(listener, app_router.into_make_service()).await?;

    Ok(())
}
