//! # gRPC Server Kit
//!
//! Shared plumbing for tonic servers: environment-driven server configuration,
//! health reporting, graceful shutdown, request-id tagging, and error helpers
//! for turning domain failures into `tonic::Status`.
//!
//! ## Quick Start
//!
//! ```ignore
//! use grpc_server::{GrpcServer, RequestIdInterceptor, ServerConfig, create_health_service, shutdown_signal};
//! use rpc::catalog::catalog_service_server::{CatalogServiceServer, SERVICE_NAME};
//! use tonic::codec::CompressionEncoding;
//! use tonic::service::interceptor::InterceptedService;
//! use tonic::transport::Server;
//!
//! let config = ServerConfig::from_env()?;
//! let (health_reporter, health_service) = create_health_service();
//! GrpcServer::setup_health(&health_reporter, SERVICE_NAME).await;
//! GrpcServer::log_startup(&config, SERVICE_NAME);
//!
//! let service = CatalogServiceServer::new(my_impl)
//!     .accept_compressed(CompressionEncoding::Zstd)
//!     .send_compressed(CompressionEncoding::Zstd);
//!
//! Server::builder()
//!     .timeout(config.request_timeout())
//!     .add_service(health_service)
//!     .add_service(InterceptedService::new(service, RequestIdInterceptor::new()))
//!     .serve_with_shutdown(config.socket_addr().await?, shutdown_signal())
//!     .await?;
//! ```

pub mod error;
pub mod interceptors;
pub mod server;

pub use error::{GrpcError, GrpcResult, ToTonicResult};
pub use interceptors::{REQUEST_ID_HEADER, RequestId, RequestIdInterceptor};
pub use server::{GrpcServer, ServerConfig, create_health_service, shutdown_signal};
pub use tonic_health::server::HealthReporter;
