use anyhow::{Result, bail};
use sqlx::{PgPool, Row};

fn contype_name(contype: &str) -> &'static str {
    match contype {
        "p" => "primary key",
        "f" => "foreign key",
        "u" => "unique",
        "c" => "check",
        "n" => "not null",
        "x" => "exclusion",
        _ => "other",
    }
}

pub async fn constraints(pool: &PgPool, table: &str) -> Result<()> {
    let rows = sqlx::query(
        r#"
SELECT c.conname::text AS name, c.contype::text AS contype,
       pg_get_constraintdef(c.oid) AS definition
FROM pg_constraint c
JOIN pg_class t ON t.oid = c.conrelid
WHERE t.relname = $1
ORDER BY c.conname
"#,
    )
    .bind(table)
    .fetch_all(pool)
    .await?;

    if rows.is_empty() {
        bail!("no constraints found for table {table:?} (does it exist?)");
    }

    println!("{table}:");
    for row in rows {
        let name: String = row.try_get("name")?;
        let contype: String = row.try_get("contype")?;
        let definition: String = row.try_get("definition")?;
        println!("  {name:<32} [{}] {definition}", contype_name(&contype));
    }
    Ok(())
}
