//! Database error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("Query error: {0}")]
    Query(#[from] sqlx::Error),

    #[error("Unique constraint violated: {0}")]
    UniqueViolation(String),

    #[error("Schema error: {0}")]
    Schema(String),
}

impl DbError {
    /// Map an sqlx error, promoting unique-constraint violations to their
    /// own variant so services can turn them into conflicts.
    pub fn classify(e: sqlx::Error) -> Self {
        if let sqlx::Error::Database(ref db) = e {
            if db.is_unique_violation() {
                return DbError::UniqueViolation(db.message().to_string());
            }
        }
        DbError::Query(e)
    }
}

pub type DbResult<T> = Result<T, DbError>;
