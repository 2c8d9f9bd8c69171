use super::{cors_config, database_config::DatabaseSettings, server_config::ServerConfig};
use poem::middleware::Cors;

/// Everything the binary reads from the environment, loaded once at startup.
pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub database: DatabaseSettings,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            server: ServerConfig::from_env()?,
            cors: cors_config::init_cors(),
            database: DatabaseSettings::from_env()?,
        })
    }
}
