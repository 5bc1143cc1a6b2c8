use anyhow::Context;
use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use sqlx::PgPool;
use std::env;

const DEFAULT_MIGRATIONS_PATH: &str = "./migrations";

/// Initialize database connection pool from environment variables and bring
/// the schema up to date.
///
/// Environment variables:
/// - DATABASE_URL: PostgreSQL connection string (required)
/// - DATABASE_MAX_CONNECTIONS: Pool size (default: 5)
/// - DATABASE_MIGRATIONS_PATH: Migrations directory (default: "./migrations")
///
/// # Errors
/// Returns error if DATABASE_URL is not set, the connection fails or a
/// migration cannot be applied
pub async fn init_database() -> anyhow::Result<PgPool> {
    let db_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let config = pool_config(db_url, env::var("DATABASE_MAX_CONNECTIONS").ok())?;

    let pool = create_postgres_pool(&config).await?;
    tracing::info!("Connected to database (max {} connections)", config.max_connections);

    let migrations_path = env::var("DATABASE_MIGRATIONS_PATH")
        .unwrap_or_else(|_| DEFAULT_MIGRATIONS_PATH.to_string());
    run_migrations(&pool, &migrations_path).await?;
    tracing::info!("Migrations applied from {}", migrations_path);

    Ok(pool)
}

fn pool_config(db_url: String, max_connections: Option<String>) -> anyhow::Result<DatabaseConfig> {
    let config = DatabaseConfig::new(db_url);
    match max_connections {
        Some(raw) => {
            let max = raw
                .parse::<u32>()
                .with_context(|| format!("DATABASE_MAX_CONNECTIONS is not a number: {raw}"))?;
            Ok(config.with_max_connections(max))
        }
        None => Ok(config),
    }
}
