use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;
use tracing::info;

/// Creates a PostgreSQL pool and checks that the server is reachable.
/// Pages only read, so the pool is the one piece of shared state requests touch.
pub async fn create_pool(database_url: &str) -> Result<PgPool> {
    let options = PgConnectOptions::from_str(database_url)
        .context("DATABASE_URL is not a valid PostgreSQL connection string")?;

    info!(
        host = options.get_host(),
        database = options.get_database().unwrap_or("<default>"),
        "Connecting to PostgreSQL..."
    );

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(5))
        .connect_with(options)
        .await
        .context("could not connect to PostgreSQL")?;

    info!("PostgreSQL connection pool established");
    Ok(pool)
}
