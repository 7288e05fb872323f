//! gRPC Server Builder
//!
//! Environment-driven [`ServerConfig`], health reporting through [`GrpcServer`],
//! and [`shutdown_signal`] for graceful termination.

mod builder;
mod config;
mod shutdown;

pub use builder::{GrpcServer, create_health_service};
pub use config::ServerConfig;
pub use shutdown::shutdown_signal;
