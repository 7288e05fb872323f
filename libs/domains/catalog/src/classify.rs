//! Two-valued classification of data-store failures.
//!
//! The service only ever asks whether an insert failed because the `sku`
//! already exists; everything else is reported as an internal failure.

use sea_orm::{DbErr, SqlErr};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    DuplicateKey,
    Other,
}

pub trait ErrorClassifier: Send + Sync {
    fn classify(&self, err: &DbErr) -> ErrorClass;
}

impl<F> ErrorClassifier for F
where
    F: Fn(&DbErr) -> ErrorClass + Send + Sync,
{
    fn classify(&self, err: &DbErr) -> ErrorClass {
        self(err)
    }
}

/// Reads the SQLSTATE exposed by SeaORM (`23505` for PostgreSQL).
#[derive(Debug, Clone, Copy, Default)]
pub struct PostgresErrorClassifier;

impl ErrorClassifier for PostgresErrorClassifier {
    fn classify(&self, err: &DbErr) -> ErrorClass {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => ErrorClass::DuplicateKey,
            _ => ErrorClass::Other,
        }
    }
}
