//! gRPC Server utilities.

use super::config::ServerConfig;
use tonic_health::ServingStatus;
use tonic_health::server::HealthReporter;
use tracing::{info, warn};

/// Helpers for bringing up tonic servers with health checks.
pub struct GrpcServer;

impl GrpcServer {
    /// Log server startup information for a single service.
    pub fn log_startup(config: &ServerConfig, service_name: &str) {
        info!(
            addr = %config.addr_string(),
            service = service_name,
            compression = config.enable_compression,
            request_timeout_secs = config.request_timeout_secs,
            "gRPC server starting"
        );
    }

    /// Mark `service_name` and the empty service name as serving.
    ///
    /// The empty name is what generic health probes query.
    pub async fn setup_health(health_reporter: &HealthReporter, service_name: &str) {
        Self::set_serving(health_reporter, service_name, true).await;
        info!(service = service_name, "Service marked as serving");
    }

    /// Flip the serving status of `service_name` (and the empty service name).
    pub async fn set_serving(health_reporter: &HealthReporter, service_name: &str, serving: bool) {
        let status = || {
            if serving {
                ServingStatus::Serving
            } else {
                ServingStatus::NotServing
            }
        };

        health_reporter
            .set_service_status(service_name, status())
            .await;
        health_reporter.set_service_status("", status()).await;

        if !serving {
            warn!(service = service_name, "Service marked as not serving");
        }
    }
}

// Re-export health_reporter for convenience
pub use tonic_health::server::health_reporter as create_health_service;

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_setup_and_flip_health() {
        let (reporter, _service) = create_health_service();
        GrpcServer::setup_health(&reporter, "catalog.CatalogService").await;
        GrpcServer::set_serving(&reporter, "catalog.CatalogService", false).await;
    }
}
