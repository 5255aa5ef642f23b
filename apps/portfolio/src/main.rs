mod config;
mod db;
mod errors;
mod models;
mod pages;
mod render;
mod routes;
mod state;
mod store;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::render::TemplateSet;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::PgContentStore;

/// Upper bound for schema creation plus seeding at startup.
const STORE_SETUP_TIMEOUT: Duration = Duration::from_secs(10);

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting portfolio v{}", env!("CARGO_PKG_VERSION"));

    let store = PgContentStore::connect(&config.database_url)
        .await
        .context("db open")?;
    prepare_store(&store).await?;

    let templates = TemplateSet::load(&config.templates_dir).context("templates")?;

    let state = AppState {
        store: Arc::new(store),
        templates: Arc::new(templates),
        config: config.clone(),
    };
    let app = build_router(state);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Creates missing tables and seeds empty sections, all within `STORE_SETUP_TIMEOUT`.
async fn prepare_store(store: &PgContentStore) -> Result<()> {
    tokio::time::timeout(STORE_SETUP_TIMEOUT, async {
        store.ensure_schema().await.context("db schema")?;

        let report = store.seed_if_empty().await.context("db seed")?;
        if report.is_empty() {
            info!("Content already present, nothing seeded");
        } else {
            info!("Seeded default content: {}", report.seeded.join(", "));
        }
        Ok::<_, anyhow::Error>(())
    })
    .await
    .context("store setup timed out")?
}
