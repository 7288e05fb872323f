//! Catalog Domain
//!
//! Registers products and looks them up by exact sku, name or category.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────┐
//! │ CatalogService │  ← validation, execution, outcome classification
//! └───────┬────────┘
//!         │ acquire / release
//! ┌───────▼────────────┐
//! │ ConnectionProvider │  ← per-call connection or shared pool
//! └───────┬────────────┘
//!         │
//! ┌───────▼────────┐
//! │ catalog table  │  ← sku is the primary key
//! └────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use database::postgres::{PostgresConfig, StoreOptions};
//! use domain_catalog::{CatalogService, CreateProduct, PerCallProvider, SearchQuery};
//!
//! # async fn example() -> Result<(), domain_catalog::CatalogError> {
//! let store = StoreOptions::new()
//!     .with_store_name("catalog")
//!     .with_store_location("localhost:5432")
//!     .with_user_name("catalog")
//!     .with_password("secret");
//!
//! let service = CatalogService::new(PerCallProvider::new(&PostgresConfig::new(store)));
//! service.create(CreateProduct::new("1234", "Glossy White", "Paint")).await?;
//! let paint = service.search(SearchQuery::new("Paint")).await?;
//! # Ok(())
//! # }
//! ```

pub mod classify;
pub mod conversions;
pub mod entity;
pub mod error;
pub mod models;
pub mod provisioner;
pub mod service;

pub use classify::{ErrorClass, ErrorClassifier, PostgresErrorClassifier};
pub use error::{CatalogError, CatalogResult, ErrorKind};
pub use models::{CreateProduct, Product, SearchQuery};
pub use provisioner::{ConnectionProvider, PerCallProvider, PooledProvider};
pub use service::CatalogService;

#[cfg(any(test, feature = "mock"))]
pub use provisioner::MockConnectionProvider;
