//! gRPC server initialization and lifecycle management
//!
//! - Tracing initialization
//! - Connection provider selection (per call or pooled)
//! - Health check service (grpc.health.v1.Health) backed by store probes
//! - gRPC server configuration, startup and graceful shutdown

use core_config::{Environment, FromEnv};
use domain_catalog::{CatalogService, ConnectionProvider, PerCallProvider, PooledProvider};
use eyre::{Result, WrapErr};
use grpc_server::{
    GrpcError, GrpcServer, HealthReporter, RequestIdInterceptor, ServerConfig,
    create_health_service, shutdown_signal,
};
use rpc::catalog::catalog_service_server::{CatalogServiceServer, SERVICE_NAME};
use tonic::codec::CompressionEncoding;
use tonic::service::interceptor::InterceptedService;
use tonic::transport::Server;
use tonic::transport::server::Router;
use tracing::info;

use crate::config::CatalogConfig;
use crate::health;
use crate::service::CatalogServiceImpl;

/// Run the gRPC server
///
/// 1. Sets up structured logging (JSON for prod, pretty for dev)
/// 2. Loads configuration from the environment
/// 3. Chooses the connection provider (`CATALOG_POOLED`)
/// 4. Serves until Ctrl-C or SIGTERM
///
/// No connection is opened at startup; an unreachable store surfaces as
/// `INTERNAL` on the first call and NOT_SERVING on the health service.
pub async fn run() -> Result<()> {
    let environment = Environment::from_env();
    core_config::tracing::init_tracing(&environment);

    let config = CatalogConfig::from_env().wrap_err("Failed to load catalog configuration")?;
    info!(store = ?config.database.store, pooled = config.pooled, "Configuration loaded");

    if config.pooled {
        let provider = PooledProvider::connect(&config.database)
            .await
            .wrap_err("Failed to configure connection pool")?;
        serve(provider.clone(), &config).await?;
        provider.close().await;
        Ok(())
    } else {
        serve(PerCallProvider::new(&config.database), &config).await
    }
}

/// Serve the catalog with `provider` until a shutdown signal arrives.
pub async fn serve<P>(provider: P, config: &CatalogConfig) -> Result<()>
where
    P: ConnectionProvider + Clone + 'static,
{
    let addr = config
        .server
        .socket_addr()
        .await
        .wrap_err("Invalid listen address")?;

    let (router, reporter) = build_router(provider.clone(), &config.server).await;
    let watcher = health::spawn_watcher(provider, reporter, config.health_probe_interval());

    GrpcServer::log_startup(&config.server, SERVICE_NAME);
    let served = router
        .serve_with_shutdown(addr, shutdown_signal())
        .await
        .map_err(GrpcError::from);

    if let Some(watcher) = watcher {
        watcher.abort();
    }
    served.wrap_err("gRPC server failed")?;

    info!("Catalog server stopped");
    Ok(())
}

/// Assemble the health service and the catalog service behind the
/// request-id interceptor.
pub async fn build_router<P>(provider: P, config: &ServerConfig) -> (Router, HealthReporter)
where
    P: ConnectionProvider + 'static,
{
    let (health_reporter, health_service) = create_health_service();
    GrpcServer::setup_health(&health_reporter, SERVICE_NAME).await;

    let catalog = CatalogServiceImpl::new(CatalogService::new(provider));
    let mut catalog = CatalogServiceServer::new(catalog)
        .max_decoding_message_size(config.max_message_size)
        .max_encoding_message_size(config.max_message_size);
    if config.enable_compression {
        catalog = catalog
            .accept_compressed(CompressionEncoding::Zstd)
            .send_compressed(CompressionEncoding::Zstd);
    }

    let router = Server::builder()
        .timeout(config.request_timeout())
        .add_service(health_service)
        .add_service(InterceptedService::new(catalog, RequestIdInterceptor::new()));

    (router, health_reporter)
}
