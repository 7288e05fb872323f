//! Catalog over a real gRPC connection, backed by a scripted store.

use std::net::SocketAddr;

use catalog_server::build_router;
use domain_catalog::MockConnectionProvider;
use domain_catalog::entity::Model;
use grpc_server::ServerConfig;
use rpc::catalog::catalog_service_client::CatalogServiceClient;
use rpc::catalog::{CreateRequest, SearchRequest};
use sea_orm::{DatabaseBackend, MockDatabase};
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::Code;
use tonic::codec::CompressionEncoding;
use tonic::transport::Channel;
use tonic_health::pb::HealthCheckRequest;
use tonic_health::pb::health_check_response::ServingStatus;
use tonic_health::pb::health_client::HealthClient;

async fn start(provider: MockConnectionProvider) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (router, _reporter) = build_router(provider, &ServerConfig::default()).await;

    tokio::spawn(router.serve_with_incoming(TcpListenerStream::new(listener)));
    addr
}

async fn channel(addr: SocketAddr) -> Channel {
    Channel::from_shared(format!("http://{}", addr))
        .unwrap()
        .connect()
        .await
        .unwrap()
}

#[tokio::test]
async fn test_search_over_the_wire() {
    let mut provider = MockConnectionProvider::new();
    provider.expect_acquire().times(1).returning(|| {
        Ok(MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![
                Model {
                    sku: "1234".into(),
                    name: "Glossy White".into(),
                    category: "Paint".into(),
                },
                Model {
                    sku: "5678".into(),
                    name: "Matte White".into(),
                    category: "Paint".into(),
                },
            ]])
            .into_connection())
    });
    provider.expect_release().times(1).return_const(());

    let addr = start(provider).await;
    let mut client = CatalogServiceClient::new(channel(addr).await)
        .send_compressed(CompressionEncoding::Zstd)
        .accept_compressed(CompressionEncoding::Zstd);

    let mut request = tonic::Request::new(SearchRequest {
        query: "Paint".into(),
    });
    request
        .metadata_mut()
        .insert("x-request-id", "roundtrip-1".parse().unwrap());

    let response = client.search(request).await.unwrap().into_inner();
    let skus: Vec<_> = response.results.iter().map(|p| p.sku.as_str()).collect();
    assert_eq!(skus, ["1234", "5678"]);
}

#[tokio::test]
async fn test_invalid_create_over_the_wire() {
    let mut provider = MockConnectionProvider::new();
    provider.expect_acquire().never();
    provider.expect_release().never();

    let addr = start(provider).await;
    let mut client = CatalogServiceClient::new(channel(addr).await);

    let status = client
        .create(CreateRequest {
            sku: "1234".into(),
            name: "Glossy White".into(),
            category: String::new(),
        })
        .await
        .unwrap_err();

    assert_eq!(status.code(), Code::InvalidArgument);
    assert_eq!(status.message(), "sku, category and name fields are required");
}

#[tokio::test]
async fn test_health_reports_serving() {
    let addr = start(MockConnectionProvider::new()).await;
    let mut health = HealthClient::new(channel(addr).await);

    for service in ["catalog.CatalogService", ""] {
        let response = health
            .check(HealthCheckRequest {
                service: service.into(),
            })
            .await
            .unwrap()
            .into_inner();
        assert_eq!(response.status(), ServingStatus::Serving);
    }
}
