//! Database connection plumbing for the catalog service
//!
//! Builds PostgreSQL data-source descriptors from discrete connection options,
//! turns them into SeaORM connection settings, and offers a health probe.
//!
//! # Features
//!
//! - `postgres` (default) - PostgreSQL support with SeaORM
//! - `config` - Load settings from the environment with `core_config::FromEnv`
//!
//! # Example
//!
//! ```ignore
//! use database::postgres::{self, PostgresConfig, StoreOptions};
//!
//! let store = StoreOptions::default()
//!     .with_store_name("shop")
//!     .with_store_location("localhost:5432")
//!     .with_user_name("catalog")
//!     .with_password("secret");
//!
//! let config = PostgresConfig::new(store);
//! let db = postgres::connect_with_options(config.connect_options()).await?;
//! postgres::check_health(&db).await?;
//! ```

pub mod common;

#[cfg(feature = "postgres")]
pub mod postgres;

pub use common::{DatabaseError, DatabaseResult};
