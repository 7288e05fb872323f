//! Catalog gRPC Service
//!
//! Registers and searches products over gRPC.
//!
//! ## Architecture
//!
//! ```text
//! Client
//!   ↓ (gRPC, optional Zstd compression, x-request-id)
//! CatalogServiceImpl (service.rs)
//!   ↓ (proto ↔ domain conversions)
//! CatalogService (domain layer)
//!   ↓ (acquire / release)
//! PerCallProvider | PooledProvider
//!   ↓
//! PostgreSQL
//! ```
//!
//! ## Modules
//!
//! - `config`: environment configuration
//! - `health`: periodic store probe feeding `grpc.health.v1.Health`
//! - `server`: server initialization and lifecycle
//! - `service`: gRPC service implementation (CatalogServiceImpl)

pub mod config;
pub mod health;
pub mod server;
pub mod service;

pub use config::CatalogConfig;
pub use server::{build_router, run};
pub use service::CatalogServiceImpl;
