use super::check_ident;
use anyhow::Result;
use sqlx::PgPool;
use tracing::info;

/// Repair the migration tool's version table. It holds a single row naming
/// the revision the schema is at; a failed upgrade can leave it stale or
/// empty, after which the tool refuses to run.
pub async fn stamp_revision(pool: &PgPool, table: &str, revision: &str) -> Result<()> {
    let table = check_ident(table)?;

    let mut tx = pool.begin().await?;

    let previous: Option<String> =
        sqlx::query_scalar(&format!("SELECT version_num FROM {table} LIMIT 1"))
            .fetch_optional(tx.as_mut())
            .await?;

    match &previous {
        Some(_) => {
            sqlx::query(&format!("UPDATE {table} SET version_num = $1"))
                .bind(revision)
                .execute(tx.as_mut())
                .await?;
        }
        None => {
            sqlx::query(&format!("INSERT INTO {table} (version_num) VALUES ($1)"))
                .bind(revision)
                .execute(tx.as_mut())
                .await?;
        }
    }

    tx.commit().await?;

    info!(?previous, revision, "stamped migration revision");
    match previous {
        Some(previous) => println!("{table}: {previous} -> {revision}"),
        None => println!("{table}: (empty) -> {revision}"),
    }
    Ok(())
}
