//! PostgreSQL test infrastructure
//!
//! `TestDatabase` starts a PostgreSQL container and applies the workspace
//! migrations so the `catalog` table exists.

use database::postgres::StoreOptions;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection};
use testcontainers::runners::AsyncRunner;
use testcontainers::{ContainerAsync, ImageExt};
use testcontainers_modules::postgres::Postgres;

const CATALOG_MIGRATION: &str = include_str!("../../../../migrations/0001_catalog.sql");

const USER: &str = "postgres";
const PASSWORD: &str = "postgres";
const STORE: &str = "postgres";

/// Test database wrapper that ensures proper cleanup
///
/// The container is stopped and removed when this struct is dropped.
pub struct TestDatabase {
    #[allow(dead_code)]
    container: ContainerAsync<Postgres>,
    pub connection: DatabaseConnection,
    pub connection_string: String,
    host_port: u16,
}

impl TestDatabase {
    /// Create a new test database with the catalog table in place
    ///
    /// ```no_run
    /// use test_utils::TestDatabase;
    ///
    /// # async fn example() {
    /// let db = TestDatabase::new().await;
    /// # }
    /// ```
    pub async fn new() -> Self {
        let postgres = Postgres::default().with_tag("18-alpine");

        let container = postgres
            .start()
            .await
            .expect("Failed to start Postgres container");

        let host_port = container
            .get_host_port_ipv4(5432)
            .await
            .expect("Failed to get host port");

        let options = Self::options_for(host_port);
        let connection_string = options.data_source_name();

        let connection = Database::connect(&connection_string)
            .await
            .expect("Failed to connect to test database");

        Self::run_migrations(&connection).await;

        tracing::info!(port = host_port, "Test database ready (Postgres 18)");

        Self {
            container,
            connection,
            connection_string,
            host_port,
        }
    }

    async fn run_migrations(connection: &DatabaseConnection) {
        connection
            .execute_unprepared(CATALOG_MIGRATION)
            .await
            .expect("Failed to create catalog table");

        tracing::info!("Migrations complete");
    }

    fn options_for(host_port: u16) -> StoreOptions {
        StoreOptions::new()
            .with_store_name(STORE)
            .with_store_location(format!("127.0.0.1:{}", host_port))
            .with_user_name(USER)
            .with_password(PASSWORD)
    }

    /// Store options pointing at this container
    pub fn store_options(&self) -> StoreOptions {
        Self::options_for(self.host_port)
    }
}

impl Drop for TestDatabase {
    fn drop(&mut self) {
        tracing::debug!("Cleaning up test database container");
    }
}
