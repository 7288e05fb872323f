//! PostgreSQL connection options, connectors and health probes

mod config;
mod connector;
mod health;

pub use config::{PostgresConfig, StoreOptions};
pub use connector::{close, connect_lazy, connect_with_options};
pub use health::{HealthStatus, check_health, check_health_detailed, check_health_with_query};

// Re-export SeaORM types for convenience
pub use sea_orm::{ConnectOptions, DatabaseConnection, DbErr};
