use std::time::Duration;

use core_config::{ConfigError, FromEnv, env_parse};
use database::postgres::PostgresConfig;
use grpc_server::ServerConfig;

/// Everything the catalog server reads from the environment
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub server: ServerConfig,
    pub database: PostgresConfig,
    /// Share one pool across calls instead of a connection per call
    pub pooled: bool,
    /// Seconds between store health probes; 0 disables probing
    pub health_probe_interval_secs: u64,
}

impl CatalogConfig {
    pub fn health_probe_interval(&self) -> Option<Duration> {
        (self.health_probe_interval_secs > 0)
            .then(|| Duration::from_secs(self.health_probe_interval_secs))
    }
}

impl FromEnv for CatalogConfig {
    /// Reads the server and database variables plus:
    /// - `CATALOG_POOLED` (default: false)
    /// - `HEALTH_PROBE_INTERVAL_SECS` (default: 15)
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            server: ServerConfig::from_env()?,
            database: PostgresConfig::from_env()?,
            pooled: env_parse("CATALOG_POOLED", "false")?,
            health_probe_interval_secs: env_parse("HEALTH_PROBE_INTERVAL_SECS", "15")?,
        })
    }
}
