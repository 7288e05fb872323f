use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, Statement};
use tracing::debug;

use crate::common::{DatabaseError, DatabaseResult};

/// Check PostgreSQL health with `SELECT 1`.
///
/// # Example
/// ```ignore
/// use database::postgres::check_health;
///
/// check_health(&db).await?;
/// ```
pub async fn check_health(db: &DatabaseConnection) -> DatabaseResult<()> {
    check_health_with_query(db, "SELECT 1").await
}

/// Check PostgreSQL health with a custom query.
///
/// Useful to verify that a specific table is reachable, e.g.
/// `SELECT 1 FROM catalog LIMIT 1`.
pub async fn check_health_with_query(
    db: &DatabaseConnection,
    query: &str,
) -> DatabaseResult<()> {
    debug!(query, "Running PostgreSQL health check");

    let stmt = Statement::from_string(DatabaseBackend::Postgres, query.to_owned());
    db.query_one_raw(stmt).await.map_err(|e| {
        DatabaseError::HealthCheckFailed(format!("query '{}' failed: {}", query, e))
    })?;

    debug!("PostgreSQL health check passed");
    Ok(())
}

/// Health check result for status reporting
#[derive(Debug, Clone)]
pub struct HealthStatus {
    pub healthy: bool,

    /// Failure description when unhealthy
    pub message: Option<String>,

    pub response_time_ms: u64,
}

impl HealthStatus {
    pub fn healthy(response_time_ms: u64) -> Self {
        Self {
            healthy: true,
            message: None,
            response_time_ms,
        }
    }

    pub fn unhealthy(message: String, response_time_ms: u64) -> Self {
        Self {
            healthy: false,
            message: Some(message),
            response_time_ms,
        }
    }
}

/// Run `query` and report the outcome with its latency
pub async fn check_health_detailed(db: &DatabaseConnection, query: &str) -> HealthStatus {
    let start = std::time::Instant::now();
    let result = check_health_with_query(db, query).await;
    let elapsed = start.elapsed().as_millis() as u64;

    match result {
        Ok(_) => HealthStatus::healthy(elapsed),
        Err(e) => HealthStatus::unhealthy(e.to_string(), elapsed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DbErr, MockDatabase};
    use std::collections::BTreeMap;

    #[tokio::test]
    async fn test_check_health_passes_with_row() {
        let row: BTreeMap<&str, sea_orm::Value> = BTreeMap::from([("?column?", 1i32.into())]);
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row]])
            .into_connection();

        assert!(check_health(&db).await.is_ok());
    }

    #[tokio::test]
    async fn test_check_health_detailed_reports_failure() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection refused".to_string())])
            .into_connection();

        let status = check_health_detailed(&db, "SELECT 1 FROM catalog LIMIT 1").await;
        assert!(!status.healthy);
        let message = status.message.unwrap();
        assert!(message.contains("catalog"));
        assert!(message.contains("connection refused"));
    }

    #[test]
    fn test_health_status_constructors() {
        let ok = HealthStatus::healthy(42);
        assert!(ok.healthy);
        assert!(ok.message.is_none());

        let bad = HealthStatus::unhealthy("down".to_string(), 100);
        assert!(!bad.healthy);
        assert_eq!(bad.message.as_deref(), Some("down"));
        assert_eq!(bad.response_time_ms, 100);
    }
}
