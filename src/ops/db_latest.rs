use super::check_ident;
use anyhow::Result;
use sqlx::PgPool;

/// Print the newest rows of a table as JSON, one object per line.
/// `row_to_json` keeps this usable against any table without knowing its
/// column layout up front.
pub async fn latest(pool: &PgPool, table: &str, order_by: &str, limit: i64) -> Result<()> {
    let table = check_ident(table)?;
    let order_by = check_ident(order_by)?;

    let query = format!(
        "SELECT row_to_json(t)::text FROM \
         (SELECT * FROM {table} ORDER BY {order_by} DESC LIMIT $1) t"
    );
    let rows: Vec<String> = sqlx::query_scalar(&query).bind(limit).fetch_all(pool).await?;

    if rows.is_empty() {
        println!("{table}: no rows");
        return Ok(());
    }
    for row in rows {
        println!("{row}");
    }
    Ok(())
}
