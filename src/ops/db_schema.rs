use anyhow::{Result, bail};
use sqlx::{PgPool, Row};

pub async fn schema(pool: &PgPool, table: &str) -> Result<()> {
    let rows = sqlx::query(
        r#"
SELECT column_name, data_type, is_nullable, column_default
FROM information_schema.columns
WHERE table_schema = current_schema() AND table_name = $1
ORDER BY ordinal_position
"#,
    )
    .bind(table)
    .fetch_all(pool)
    .await?;

    if rows.is_empty() {
        bail!("no table {table:?} in the current schema");
    }

    println!("{table}:");
    for row in rows {
        let name: String = row.try_get("column_name")?;
        let data_type: String = row.try_get("data_type")?;
        let is_nullable: String = row.try_get("is_nullable")?;
        let default: Option<String> = row.try_get("column_default")?;

        let null_marker = if is_nullable == "YES" { "null" } else { "not null" };
        match default {
            Some(default) => println!("  {name:<24} {data_type} {null_marker} default {default}"),
            None => println!("  {name:<24} {data_type} {null_marker}"),
        }
    }
    Ok(())
}
