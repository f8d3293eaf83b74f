//! Persistence layer for the `hero` table.

pub mod config;
pub mod models;
pub mod repositories;

use sqlx::mysql::MySqlPoolOptions;

use crate::config::DbConfig;

pub type DbPool = sqlx::MySqlPool;

/// DDL for the only table. Indexes are declared inline because MySQL has no
/// `CREATE INDEX IF NOT EXISTS`.
const HERO_TABLE_DDL: &str = "CREATE TABLE IF NOT EXISTS hero (
    id BIGINT NOT NULL AUTO_INCREMENT,
    name VARCHAR(255) NOT NULL,
    age INT NULL,
    secret_name VARCHAR(255) NOT NULL,
    PRIMARY KEY (id),
    INDEX ix_hero_name (name),
    INDEX ix_hero_age (age)
)";

/// Create a connection pool from explicit connection settings.
pub async fn create_pool(config: &DbConfig) -> Result<DbPool, sqlx::Error> {
    MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(config.connect_options())
        .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Create the `hero` table if it does not already exist. Idempotent.
pub async fn ensure_schema(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query(HERO_TABLE_DDL).execute(pool).await?;
    tracing::debug!("hero table ensured");
    Ok(())
}
