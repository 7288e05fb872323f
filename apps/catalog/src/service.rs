//! Catalog gRPC service implementation
//!
//! Thin adapter: proto messages in, domain calls, `CatalogError` mapped to
//! `tonic::Status` on the way out.

use std::sync::Arc;

use domain_catalog::conversions::search_response;
use domain_catalog::{
    CatalogService, ConnectionProvider, CreateProduct, ErrorClassifier, PostgresErrorClassifier,
    SearchQuery,
};
use grpc_server::{RequestId, ToTonicResult};
use rpc::catalog::catalog_service_server::CatalogService as CatalogRpc;
use rpc::catalog::{CreateRequest, CreateResponse, SearchRequest, SearchResponse};
use tonic::{Request, Response, Status};
use tracing::{Span, field, instrument};

/// gRPC service implementation for the catalog
///
/// Generic over the connection provider and error classifier for testability.
pub struct CatalogServiceImpl<P, C = PostgresErrorClassifier> {
    service: Arc<CatalogService<P, C>>,
}

impl<P, C> CatalogServiceImpl<P, C>
where
    P: ConnectionProvider + 'static,
    C: ErrorClassifier + 'static,
{
    pub fn new(service: CatalogService<P, C>) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

fn record_request_id<T>(request: &Request<T>) {
    if let Some(id) = request.extensions().get::<RequestId>() {
        Span::current().record("request_id", id.as_str());
    }
}

#[tonic::async_trait]
impl<P, C> CatalogRpc for CatalogServiceImpl<P, C>
where
    P: ConnectionProvider + 'static,
    C: ErrorClassifier + 'static,
{
    #[instrument(skip_all, fields(request_id = field::Empty))]
    async fn create(
        &self,
        request: Request<CreateRequest>,
    ) -> Result<Response<CreateResponse>, Status> {
        record_request_id(&request);

        let input: CreateProduct = request.into_inner().into();
        self.service.create(input).await.to_tonic()?;
        Ok(Response::new(CreateResponse {}))
    }

    #[instrument(skip_all, fields(request_id = field::Empty))]
    async fn search(
        &self,
        request: Request<SearchRequest>,
    ) -> Result<Response<SearchResponse>, Status> {
        record_request_id(&request);

        let query: SearchQuery = request.into_inner().into();
        let products = self.service.search(query).await.to_tonic()?;
        Ok(Response::new(search_response(products)))
    }
}
