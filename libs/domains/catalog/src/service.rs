use std::sync::Arc;

use sea_orm::{EntityTrait, QueryFilter};
use tracing::{error, info, instrument, warn};
use validator::Validate;

use crate::classify::{ErrorClass, ErrorClassifier, PostgresErrorClassifier};
use crate::entity;
use crate::error::{CatalogError, CatalogResult};
use crate::models::{CreateProduct, Product, SearchQuery};
use crate::provisioner::ConnectionProvider;

/// Catalog Service: validation, statement execution and outcome classification.
///
/// Each operation checks out its own handle from the provider and gives it
/// back before classifying the outcome. Nothing is kept between calls.
pub struct CatalogService<P, C = PostgresErrorClassifier> {
    provider: Arc<P>,
    classifier: C,
}

impl<P: ConnectionProvider> CatalogService<P> {
    pub fn new(provider: P) -> Self {
        Self::with_classifier(provider, PostgresErrorClassifier)
    }
}

impl<P, C> CatalogService<P, C>
where
    P: ConnectionProvider,
    C: ErrorClassifier,
{
    pub fn with_classifier(provider: P, classifier: C) -> Self {
        Self {
            provider: Arc::new(provider),
            classifier,
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Register a product
    #[instrument(
        skip(self, input),
        fields(sku = %input.sku, name = %input.name, category = %input.category)
    )]
    pub async fn create(&self, input: CreateProduct) -> CatalogResult<()> {
        self.try_create(input).await.inspect_err(log_failure)
    }

    /// Find every product whose sku, name or category equals the query
    ///
    /// Rows come back in the order the store returns them. An empty match
    /// is reported as `NotFound`.
    #[instrument(skip(self, query), fields(query = %query.query))]
    pub async fn search(&self, query: SearchQuery) -> CatalogResult<Vec<Product>> {
        self.try_search(query).await.inspect_err(log_failure)
    }

    async fn try_create(&self, input: CreateProduct) -> CatalogResult<()> {
        if input.validate().is_err() {
            return Err(CatalogError::fields_required());
        }

        let db = self.provider.acquire().await?;
        let outcome = entity::Entity::insert(entity::ActiveModel::from(input))
            .exec_without_returning(&db)
            .await;
        self.provider.release(db).await;

        match outcome {
            Ok(_) => {
                info!("Product created");
                Ok(())
            }
            Err(err) => match self.classifier.classify(&err) {
                ErrorClass::DuplicateKey => Err(CatalogError::already_exists()),
                ErrorClass::Other => Err(err.into()),
            },
        }
    }

    async fn try_search(&self, query: SearchQuery) -> CatalogResult<Vec<Product>> {
        if query.validate().is_err() {
            return Err(CatalogError::query_required());
        }

        let db = self.provider.acquire().await?;
        let rows = entity::Entity::find()
            .filter(entity::matching(&query.query))
            .all(&db)
            .await;
        self.provider.release(db).await;

        let rows = rows?;
        if rows.is_empty() {
            return Err(CatalogError::no_result());
        }

        info!(count = rows.len(), "Products found");
        Ok(rows.into_iter().map(Product::from).collect())
    }
}

fn log_failure(err: &CatalogError) {
    if err.is_client_fault() {
        warn!(kind = ?err.kind(), error = %err, "Catalog request rejected");
    } else {
        error!(error = %err, "Catalog request failed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::provisioner::MockConnectionProvider;
    use sea_orm::{
        DatabaseBackend, DatabaseConnection, DbErr, MockDatabase, MockExecResult, RuntimeErr,
        Transaction,
    };
    use std::sync::Mutex;

    type Released = Arc<Mutex<Option<DatabaseConnection>>>;

    /// Provider handing out `db` once and keeping it after release so the
    /// statement log can be inspected.
    fn provider_with(db: DatabaseConnection) -> (MockConnectionProvider, Released) {
        let released: Released = Arc::new(Mutex::new(None));
        let slot = released.clone();

        let mut provider = MockConnectionProvider::new();
        provider
            .expect_acquire()
            .times(1)
            .return_once(move || Ok(db));
        provider
            .expect_release()
            .times(1)
            .returning(move |db| {
                *slot.lock().unwrap() = Some(db);
            });

        (provider, released)
    }

    fn untouched_provider() -> MockConnectionProvider {
        let mut provider = MockConnectionProvider::new();
        provider.expect_acquire().never();
        provider.expect_release().never();
        provider
    }

    fn statements(released: &Released) -> Vec<Transaction> {
        released
            .lock()
            .unwrap()
            .take()
            .expect("connection was released")
            .into_transaction_log()
    }

    fn duplicate_by_message(err: &DbErr) -> ErrorClass {
        if err.to_string().contains("duplicate key") {
            ErrorClass::DuplicateKey
        } else {
            ErrorClass::Other
        }
    }

    fn row(sku: &str, name: &str, category: &str) -> entity::Model {
        entity::Model {
            sku: sku.to_string(),
            name: name.to_string(),
            category: category.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_inserts_product() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();
        let (provider, released) = provider_with(db);
        let service = CatalogService::new(provider);

        service
            .create(CreateProduct::new("1234", "Glossy White", "Paint"))
            .await
            .unwrap();

        let log = statements(&released);
        assert_eq!(log.len(), 1);
        let statement = format!("{:?}", log[0]);
        assert!(statement.contains("INSERT INTO"), "{statement}");
        assert!(statement.contains("Glossy White"), "{statement}");
        assert!(!statement.contains("RETURNING"), "{statement}");
    }

    #[tokio::test]
    async fn test_create_rejects_missing_fields_without_store_access() {
        let service = CatalogService::new(untouched_provider());

        for input in [
            CreateProduct::new("", "Glossy White", "Paint"),
            CreateProduct::new("1234", "", "Paint"),
            CreateProduct::new("1234", "Glossy White", ""),
        ] {
            let err = service.create(input).await.unwrap_err();
            assert_eq!(err, CatalogError::fields_required());
        }
    }

    #[tokio::test]
    async fn test_create_duplicate_is_already_exists() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_errors([DbErr::Custom(
                "duplicate key value violates unique constraint \"catalog_pkey\"".into(),
            )])
            .into_connection();
        let (provider, _released) = provider_with(db);
        let service = CatalogService::with_classifier(provider, duplicate_by_message);

        let err = service
            .create(CreateProduct::new("1234", "Glossy White", "Paint"))
            .await
            .unwrap_err();

        assert_eq!(err, CatalogError::already_exists());
    }

    #[tokio::test]
    async fn test_create_store_failure_is_internal() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_errors([DbErr::Exec(RuntimeErr::Internal(
                "database is down".into(),
            ))])
            .into_connection();
        let (provider, _released) = provider_with(db);
        let service = CatalogService::with_classifier(provider, duplicate_by_message);

        let err = service
            .create(CreateProduct::new("1234", "Glossy White", "Paint"))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Internal);
        assert!(err.to_string().contains("database is down"));
    }

    fn refusing_provider() -> MockConnectionProvider {
        let mut provider = MockConnectionProvider::new();
        provider.expect_acquire().times(1).returning(|| {
            Err(DbErr::Conn(RuntimeErr::Internal(
                "connection refused".into(),
            )))
        });
        provider.expect_release().never();
        provider
    }

    #[tokio::test]
    async fn test_create_acquire_failure_is_internal_and_skips_release() {
        let service = CatalogService::new(refusing_provider());

        let err = service
            .create(CreateProduct::new("1234", "Glossy White", "Paint"))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Internal);
        assert!(err.to_string().contains("connection refused"));
    }

    #[tokio::test]
    async fn test_search_acquire_failure_is_internal_and_skips_release() {
        let service = CatalogService::new(refusing_provider());

        let err = service.search(SearchQuery::new("Paint")).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Internal);
        assert!(err.to_string().contains("connection refused"));
    }

    #[tokio::test]
    async fn test_search_returns_rows_in_store_order() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![
                row("1234", "Glossy White", "Paint"),
                row("5678", "Matte White", "Paint"),
            ]])
            .into_connection();
        let (provider, released) = provider_with(db);
        let service = CatalogService::new(provider);

        let products = service.search(SearchQuery::new("Paint")).await.unwrap();

        assert_eq!(
            products,
            vec![
                Product {
                    sku: "1234".into(),
                    name: "Glossy White".into(),
                    category: "Paint".into(),
                },
                Product {
                    sku: "5678".into(),
                    name: "Matte White".into(),
                    category: "Paint".into(),
                },
            ]
        );

        let log = statements(&released);
        assert_eq!(log.len(), 1);
        let statement = format!("{:?}", log[0]);
        assert!(statement.contains("SELECT"), "{statement}");
        assert!(statement.contains(" OR "), "{statement}");
        assert!(!statement.contains("ORDER BY"), "{statement}");
    }

    #[tokio::test]
    async fn test_search_without_match_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<entity::Model>::new()])
            .into_connection();
        let (provider, _released) = provider_with(db);
        let service = CatalogService::new(provider);

        let err = service
            .search(SearchQuery::new("nonexistent-term"))
            .await
            .unwrap_err();

        assert_eq!(err, CatalogError::no_result());
    }

    #[tokio::test]
    async fn test_search_query_failure_is_internal() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Query(RuntimeErr::Internal(
                "query timed out".into(),
            ))])
            .into_connection();
        let (provider, _released) = provider_with(db);
        let service = CatalogService::new(provider);

        let err = service.search(SearchQuery::new("Paint")).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Internal);
        assert!(err.to_string().contains("query timed out"));
    }

    #[tokio::test]
    async fn test_search_rejects_empty_query_without_store_access() {
        let service = CatalogService::new(untouched_provider());

        let err = service.search(SearchQuery::new("")).await.unwrap_err();

        assert_eq!(err, CatalogError::query_required());
    }
}
