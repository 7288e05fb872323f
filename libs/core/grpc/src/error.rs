use thiserror::Error;

pub type GrpcResult<T> = Result<T, GrpcError>;

/// Errors raised while configuring or running a gRPC server
#[derive(Error, Debug)]
pub enum GrpcError {
    /// The configured host/port do not resolve to a socket address
    #[error("Invalid listen address '{addr}': {source}")]
    InvalidAddress {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// Transport failure while binding or serving
    #[error("Transport error: {0}")]
    Transport(#[from] tonic::transport::Error),
}

/// Extension trait for converting `Result<T, E>` into `Result<T, tonic::Status>`
/// through the error type's `Into<tonic::Status>` mapping.
///
/// # Example
/// ```ignore
/// use grpc_server::ToTonicResult;
///
/// let products = service.search(query).await.to_tonic()?;
/// ```
pub trait ToTonicResult<T> {
    fn to_tonic(self) -> Result<T, tonic::Status>;
}

impl<T, E> ToTonicResult<T> for Result<T, E>
where
    E: Into<tonic::Status>,
{
    fn to_tonic(self) -> Result<T, tonic::Status> {
        self.map_err(Into::into)
    }
}
