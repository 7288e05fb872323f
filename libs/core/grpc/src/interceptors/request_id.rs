use tonic::{Request, Status};

/// Metadata key carrying the caller's correlation id
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Correlation id attached to every inbound request's extensions
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestId(pub String);

impl RequestId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Server-side interceptor that tags each call with a request id.
///
/// Reuses the caller's `x-request-id` when present and valid, otherwise
/// generates a UUID v4. The id is stored as a [`RequestId`] extension so
/// handlers can record it on their spans.
///
/// # Example
/// ```ignore
/// use grpc_server::RequestIdInterceptor;
/// use tonic::service::interceptor::InterceptedService;
///
/// let svc = InterceptedService::new(CatalogServiceServer::new(imp), RequestIdInterceptor::new());
/// ```
#[derive(Clone, Debug, Default)]
pub struct RequestIdInterceptor;

impl RequestIdInterceptor {
    pub fn new() -> Self {
        Self
    }
}

impl tonic::service::Interceptor for RequestIdInterceptor {
    fn call(&mut self, mut request: Request<()>) -> Result<Request<()>, Status> {
        let request_id = request
            .metadata()
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.is_empty())
            .map(str::to_owned)
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

        tracing::debug!(request_id = %request_id, "Inbound gRPC request");

        request.extensions_mut().insert(RequestId(request_id));
        Ok(request)
    }
}
