//! Store reachability feeding the gRPC health service.
//!
//! The catalog service is reported SERVING only while a probe through the
//! configured provider can read the `catalog` table.

use std::time::Duration;

use database::postgres::check_health_detailed;
use domain_catalog::ConnectionProvider;
use grpc_server::{GrpcServer, HealthReporter};
use rpc::catalog::catalog_service_server::SERVICE_NAME;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

pub const PROBE_QUERY: &str = "SELECT 1 FROM catalog LIMIT 1";

/// Run one probe, releasing the handle before returning.
pub async fn probe<P: ConnectionProvider>(provider: &P) -> bool {
    let db = match provider.acquire().await {
        Ok(db) => db,
        Err(e) => {
            warn!(error = %e, "Health probe could not acquire a connection");
            return false;
        }
    };

    let status = check_health_detailed(&db, PROBE_QUERY).await;
    provider.release(db).await;

    if status.healthy {
        debug!(response_time_ms = status.response_time_ms, "Health probe passed");
    } else {
        warn!(
            reason = status.message.as_deref().unwrap_or("unknown"),
            "Health probe failed"
        );
    }
    status.healthy
}

/// Probe every `interval` and flip the serving status when it changes.
///
/// Returns `None` when probing is disabled.
pub fn spawn_watcher<P>(
    provider: P,
    reporter: HealthReporter,
    interval: Option<Duration>,
) -> Option<JoinHandle<()>>
where
    P: ConnectionProvider + 'static,
{
    let interval = interval?;

    Some(tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        let mut serving = true;

        loop {
            ticker.tick().await;
            let healthy = probe(&provider).await;
            if healthy != serving {
                GrpcServer::set_serving(&reporter, SERVICE_NAME, healthy).await;
                serving = healthy;
            }
        }
    }))
}
