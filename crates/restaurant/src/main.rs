use anyhow::{Context, Result};
use restaurant::{
    config::{Config, StorageBackend},
    di::{DependenciesInjectDeps, ServiceSettings},
    handler::AppRouter,
    repository::memory::InMemorySequenceStore,
    scheduler::ResetRetryPolicy,
    seed::seed_menu,
    state::AppState,
};
use shared::{
    config::{ConnectionManager, ConnectionPool},
    utils::{Telemetry, init_logger, shutdown_signal},
};
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let (config, state, telemetry) = setup().await.context("Failed to setup application")?;

    let (shutdown_tx, _) = broadcast::channel::<()>(1);

    let scheduler = state.di_container.scheduler.clone();
    let scheduler_rx = shutdown_tx.subscribe();
    let scheduler_handle = tokio::spawn(async move { scheduler.run(scheduler_rx).await });

    shutdown_listener(shutdown_tx.clone());

    let server_result = AppRouter::serve(
        config.port,
        state,
        &config.cors_origins,
        shutdown_tx.subscribe(),
    )
    .await;

    // The server can also stop on its own (bind failure); take the scheduler down with it.
    let _ = shutdown_tx.send(());

    if let Err(e) = scheduler_handle.await {
        error!("❌ Daily reset scheduler task failed: {e}");
    }

    if let Some(telemetry) = telemetry {
        if let Err(e) = telemetry.shutdown() {
            error!("❌ Telemetry shutdown failed: {e:#}");
        }
    }

    info!("👋 Restaurant service stopped");
    server_result
}

async fn setup() -> Result<(Config, AppState, Option<Telemetry>)> {
    dotenv::dotenv().ok();

    let is_dev = std::env::var("DEV_MODE")
        .map(|v| v == "true" || v == "1")
        .unwrap_or(false);
    let is_enable_file = std::env::var("ENABLE_FILE_LOG")
        .map(|v| v == "true")
        .unwrap_or(false);

    let config = Config::init().context("Failed to load configuration")?;

    let telemetry = config
        .otel_endpoint
        .as_deref()
        .map(|endpoint| Telemetry::init("restaurant-service", endpoint))
        .transpose()
        .context("Failed to initialize telemetry")?;

    init_logger(
        telemetry.as_ref().map(Telemetry::logger_provider),
        "restaurant-service",
        is_dev,
        is_enable_file,
    );

    info!("🚀 Starting Restaurant Service initialization...");

    let deps = match &config.storage {
        StorageBackend::Postgres { database_url } => {
            let db_pool = ConnectionManager::new_pool(
                database_url,
                config.db_min_conn,
                config.db_max_conn,
                config.storage_timeout,
            )
            .await
            .context("Failed to initialize database pool")?;

            if config.run_migrations {
                run_migrations(&db_pool)
                    .await
                    .context("Failed to run database migrations")?;
            }

            DependenciesInjectDeps::postgres(db_pool)
        }
        StorageBackend::Memory { sequence_snapshot } => {
            let sequence = match sequence_snapshot {
                Some(path) => {
                    info!("💾 Order sequence snapshot: {}", path.display());
                    InMemorySequenceStore::with_snapshot(path)
                        .await
                        .context("Failed to load order sequence snapshot")?
                }
                None => {
                    warn!("⚠️ Using in-memory storage without SEQUENCE_SNAPSHOT_PATH; order numbers restart from 000001 after a restart");
                    InMemorySequenceStore::new()
                }
            };
            warn!("⚠️ In-memory storage is meant for development; orders, menu and bookings are lost on restart");
            DependenciesInjectDeps::in_memory_with(Arc::new(sequence))
        }
    };

    let state = AppState::new(
        deps,
        ServiceSettings {
            storage_timeout: config.storage_timeout,
            daily_reset_at: config.daily_reset_at,
            reset_retry: ResetRetryPolicy::default(),
        },
    )
    .await;

    if let Some(path) = &config.menu_seed_path {
        seed_menu(&state.di_container.menu_repository, path)
            .await
            .context("Failed to seed menu")?;
    }

    info!("✅ Application setup completed successfully.");
    Ok((config, state, telemetry))
}

async fn run_migrations(pool: &ConnectionPool) -> Result<()> {
    info!("📦 Running database migrations...");
    sqlx::migrate!("./migrations").run(pool).await?;
    info!("✅ Database migrations completed");
    Ok(())
}

fn shutdown_listener(shutdown_tx: broadcast::Sender<()>) {
    tokio::spawn(async move {
        shutdown_signal().await;
        info!("🛑 Shutdown signal detected, broadcasting shutdown...");
        if let Err(e) = shutdown_tx.send(()) {
            warn!("Failed to send shutdown signal: {}", e);
        }
    });
}
