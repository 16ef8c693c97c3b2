use super::{check_ident, check_sql_type};
use anyhow::Result;
use sqlx::PgPool;
use tracing::info;

/// One-off migration: add a nullable column to an existing table.
pub async fn add_column(pool: &PgPool, table: &str, column: &str, sql_type: &str) -> Result<()> {
    let table = check_ident(table)?;
    let column = check_ident(column)?;
    let sql_type = check_sql_type(sql_type)?;

    let already: bool = sqlx::query_scalar(
        r#"
SELECT EXISTS (
    SELECT 1 FROM information_schema.columns
    WHERE table_schema = current_schema() AND table_name = $1 AND column_name = $2
)
"#,
    )
    .bind(table)
    .bind(column)
    .fetch_one(pool)
    .await?;

    if already {
        println!("{table}.{column} already exists, nothing to do");
        return Ok(());
    }

    let statement = format!("ALTER TABLE {table} ADD COLUMN IF NOT EXISTS {column} {sql_type}");
    info!(%statement, "applying ad-hoc migration");
    sqlx::query(&statement).execute(pool).await?;

    println!("added {table}.{column} ({sql_type})");
    Ok(())
}
