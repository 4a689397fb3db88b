//! Connection pool bootstrap and the `movies` table DDL.

use crate::config::Config;
use crate::service::MOVIES_TABLE;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Open the pool and ping it once, so a bad URL or a down server fails at startup.
pub async fn connect(config: &Config) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;
    ping(&pool).await?;
    tracing::info!(max_connections = config.max_connections, "connected to database");
    Ok(pool)
}

pub async fn ping(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Create the movies table if it does not exist. Idempotent; existing rows are left alone.
pub async fn ensure_movies_table(pool: &PgPool) -> Result<(), sqlx::Error> {
    let ddl = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            id BIGINT PRIMARY KEY,
            name TEXT NOT NULL
        )
        "#,
        MOVIES_TABLE
    );
    sqlx::query(&ddl).execute(pool).await?;
    Ok(())
}
