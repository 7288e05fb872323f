//! Connection Provisioner
//!
//! Hands out a data-store handle per call. Callers pair every successful
//! [`ConnectionProvider::acquire`] with exactly one
//! [`ConnectionProvider::release`].

use async_trait::async_trait;
use database::postgres::{self, ConnectOptions, DatabaseConnection, DbErr, PostgresConfig};
use tracing::debug;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait ConnectionProvider: Send + Sync {
    /// Check out a handle owned exclusively by the caller
    async fn acquire(&self) -> Result<DatabaseConnection, DbErr>;

    /// Give the handle back; never fails
    async fn release(&self, handle: DatabaseConnection);
}

/// Opens a fresh connection on every acquire and closes it on release.
///
/// Construction only assembles connect options; nothing touches the network
/// until the first `acquire`.
#[derive(Debug, Clone)]
pub struct PerCallProvider {
    options: ConnectOptions,
}

impl PerCallProvider {
    pub fn new(config: &PostgresConfig) -> Self {
        let mut options = config.connect_options();
        options.max_connections(1).min_connections(0);
        Self { options }
    }

    pub fn options(&self) -> &ConnectOptions {
        &self.options
    }
}

#[async_trait]
impl ConnectionProvider for PerCallProvider {
    async fn acquire(&self) -> Result<DatabaseConnection, DbErr> {
        postgres::connect_with_options(self.options.clone()).await
    }

    async fn release(&self, handle: DatabaseConnection) {
        postgres::close(handle).await;
    }
}

/// Shares one bounded, lazily connected pool across calls.
///
/// Each acquire hands out a clone of the pool handle; statements run on it
/// check a connection out of the pool and return it when they finish.
#[derive(Debug, Clone)]
pub struct PooledProvider {
    pool: DatabaseConnection,
}

impl PooledProvider {
    /// Build the pool without connecting.
    pub async fn connect(config: &PostgresConfig) -> Result<Self, DbErr> {
        let pool = postgres::connect_lazy(config.connect_options()).await?;
        debug!(
            max_connections = config.max_connections,
            "Catalog pool configured"
        );
        Ok(Self { pool })
    }

    /// Close the shared pool
    pub async fn close(self) {
        postgres::close(self.pool).await;
    }
}

#[async_trait]
impl ConnectionProvider for PooledProvider {
    async fn acquire(&self) -> Result<DatabaseConnection, DbErr> {
        Ok(self.pool.clone())
    }

    async fn release(&self, handle: DatabaseConnection) {
        drop(handle);
    }
}
