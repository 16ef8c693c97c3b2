use anyhow::Result;
use sqlx::PgPool;
use std::time::Instant;

pub async fn ping(pool: &PgPool) -> Result<()> {
    let started = Instant::now();
    let one: i32 = sqlx::query_scalar("SELECT 1").fetch_one(pool).await?;
    let round_trip = started.elapsed();

    let version: String = sqlx::query_scalar("SELECT version()").fetch_one(pool).await?;
    let (database, user): (String, String) =
        sqlx::query_as("SELECT current_database()::text, current_user::text")
            .fetch_one(pool)
            .await?;

    println!("SELECT 1 -> {one} ({round_trip:?})");
    println!("server:   {version}");
    println!("database: {database} (as {user})");
    Ok(())
}
