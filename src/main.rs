//! Acme Dashboard binary entry point.

use std::sync::Arc;

use acme_dashboard::services::password::PasswordService;
use acme_dashboard::store::{MemoryInvoiceStore, MemoryUserStore, PgInvoiceStore, PgUserStore};
use acme_dashboard::{AppConfig, AppState, InMemoryViewCache};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "acme_dashboard=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting acme-dashboard");

    // Load configuration
    let config = AppConfig::load().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config, using defaults: {}", *e);
        AppConfig::default()
    });

    let passwords = PasswordService::with_params(
        config.password.memory_cost,
        config.password.time_cost,
        config.password.parallelism,
        Some(config.password.hash_length),
    );
    let view_cache = Arc::new(InMemoryViewCache::new());

    // Open the store at process start; the pool is closed again at shutdown.
    let mut pool_handle: Option<PgPool> = None;
    let state = match config.database.resolved_url() {
        Some(url) => {
            let pool = PgPoolOptions::new()
                .max_connections(config.database.max_connections)
                .connect(&url)
                .await?;

            tracing::info!("Running database migrations...");
            sqlx::migrate!("./migrations").run(&pool).await?;
            tracing::info!("Migrations complete!");

            let state = AppState::new(
                Arc::new(PgInvoiceStore::new(pool.clone())),
                Arc::new(PgUserStore::new(pool.clone())),
                view_cache,
                passwords,
            );
            pool_handle = Some(pool);
            state
        }
        None => {
            tracing::warn!("DATABASE_URL not set; using in-memory stores");
            AppState::new(
                Arc::new(MemoryInvoiceStore::new()),
                Arc::new(MemoryUserStore::new()),
                view_cache,
                passwords,
            )
        }
    };

    let app = acme_dashboard::router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Starting server on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(pool) = pool_handle {
        tracing::info!("Closing database pool");
        pool.close().await;
    }

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
}
