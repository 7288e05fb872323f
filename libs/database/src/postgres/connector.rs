use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use tracing::{debug, warn};

/// Open a connection (pool) with the given options.
///
/// # Example
/// ```ignore
/// use database::postgres::{PostgresConfig, connect_with_options};
///
/// let db = connect_with_options(config.connect_options()).await?;
/// ```
pub async fn connect_with_options(options: ConnectOptions) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(options).await?;
    debug!("Opened PostgreSQL connection");
    Ok(db)
}

/// Build a pool that connects on first use.
///
/// No connection is attempted here; errors surface when a statement first runs.
pub async fn connect_lazy(mut options: ConnectOptions) -> Result<DatabaseConnection, DbErr> {
    options.connect_lazy(true);
    let db = Database::connect(options).await?;
    debug!("Created lazy PostgreSQL pool");
    Ok(db)
}

/// Close a connection, logging rather than returning any failure.
pub async fn close(db: DatabaseConnection) {
    if let Err(e) = db.close().await {
        warn!(error = %e, "Failed to close PostgreSQL connection");
    }
}
