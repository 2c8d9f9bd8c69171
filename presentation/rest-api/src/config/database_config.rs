use anyhow::Context;
use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use sqlx::PgPool;
use std::env;

const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_MIGRATIONS_PATH: &str = "infrastructure/persistence/migrations";

/// Database settings
///
/// Environment variables:
/// - DATABASE_URL: PostgreSQL connection string (required)
/// - DATABASE_MAX_CONNECTIONS: Pool size (default: 5)
/// - MIGRATIONS_PATH: Directory holding the SQL migrations
///   (default: "infrastructure/persistence/migrations")
#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
    pub migrations_path: String,
}

impl DatabaseSettings {
    pub fn from_env() -> anyhow::Result<Self> {
        let url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
        let max_connections = match env::var("DATABASE_MAX_CONNECTIONS") {
            Ok(value) => parse_max_connections(&value)?,
            Err(_) => DEFAULT_MAX_CONNECTIONS,
        };
        let migrations_path =
            env::var("MIGRATIONS_PATH").unwrap_or_else(|_| DEFAULT_MIGRATIONS_PATH.to_string());

        Ok(Self {
            url,
            max_connections,
            migrations_path,
        })
    }
}

/// Open the connection pool and bring the schema up to date
///
/// # Errors
/// Returns error if the connection fails or a migration cannot be applied
pub async fn init_database(settings: &DatabaseSettings) -> anyhow::Result<PgPool> {
    let config =
        DatabaseConfig::new(settings.url.clone()).with_max_connections(settings.max_connections);
    let pool = create_postgres_pool(&config).await?;

    run_migrations(&pool, &settings.migrations_path)
        .await
        .with_context(|| {
            format!(
                "failed to apply migrations from {}",
                settings.migrations_path
            )
        })?;
    tracing::info!(path = %settings.migrations_path, "database migrations applied");

    Ok(pool)
}

fn parse_max_connections(value: &str) -> anyhow::Result<u32> {
    let parsed: u32 = value
        .trim()
        .parse()
        .with_context(|| format!("DATABASE_MAX_CONNECTIONS is not a number: {}", value))?;
    anyhow::ensure!(parsed > 0, "DATABASE_MAX_CONNECTIONS must be positive");
    Ok(parsed)
}
