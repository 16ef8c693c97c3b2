use anyhow::Result;
use sqlx::PgPool;

pub async fn encoding(pool: &PgPool) -> Result<()> {
    let (server_encoding, collate, ctype): (String, String, String) = sqlx::query_as(
        r#"
SELECT pg_encoding_to_char(encoding)::text, datcollate::text, datctype::text
FROM pg_database
WHERE datname = current_database()
"#,
    )
    .fetch_one(pool)
    .await?;

    let client_encoding: String =
        sqlx::query_scalar("SELECT current_setting('client_encoding')")
            .fetch_one(pool)
            .await?;

    println!("server encoding: {server_encoding}");
    println!("client encoding: {client_encoding}");
    println!("collate:         {collate}");
    println!("ctype:           {ctype}");
    Ok(())
}
