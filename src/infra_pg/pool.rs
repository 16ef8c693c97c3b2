use crate::settings;
use anyhow::Result;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::time::Duration;

/// Build a pool from settings. Callers own the handle and close it before
/// exit; nothing in this crate holds a global connection.
pub async fn connect(config: &settings::Database) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout_secs))
        .connect(&config.url)
        .await?;
    Ok(pool)
}
