use thiserror::Error;

pub const FIELDS_REQUIRED: &str = "sku, category and name fields are required";
pub const QUERY_REQUIRED: &str = "search query required";
pub const PRODUCT_EXISTS: &str = "product already exists";
pub const NO_RESULT: &str = "no result found";

/// Failure of a catalog operation.
///
/// The display text is exactly the message handed to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("{0}")]
    InvalidArgument(String),

    #[error("{0}")]
    AlreadyExists(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Internal(String),
}

/// Discriminant of [`CatalogError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    AlreadyExists,
    NotFound,
    Internal,
}

pub type CatalogResult<T> = Result<T, CatalogError>;

impl CatalogError {
    pub fn fields_required() -> Self {
        Self::InvalidArgument(FIELDS_REQUIRED.to_string())
    }

    pub fn query_required() -> Self {
        Self::InvalidArgument(QUERY_REQUIRED.to_string())
    }

    pub fn already_exists() -> Self {
        Self::AlreadyExists(PRODUCT_EXISTS.to_string())
    }

    pub fn no_result() -> Self {
        Self::NotFound(NO_RESULT.to_string())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Self::AlreadyExists(_) => ErrorKind::AlreadyExists,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::Internal(_) => ErrorKind::Internal,
        }
    }

    /// Faults caused by the caller rather than the store
    pub fn is_client_fault(&self) -> bool {
        !matches!(self, Self::Internal(_))
    }
}

impl From<sea_orm::DbErr> for CatalogError {
    fn from(err: sea_orm::DbErr) -> Self {
        CatalogError::Internal(err.to_string())
    }
}

impl From<CatalogError> for tonic::Status {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::InvalidArgument(msg) => tonic::Status::invalid_argument(msg),
            CatalogError::AlreadyExists(msg) => tonic::Status::already_exists(msg),
            CatalogError::NotFound(msg) => tonic::Status::not_found(msg),
            CatalogError::Internal(msg) => tonic::Status::internal(msg),
        }
    }
}
