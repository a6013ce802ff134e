//! Error types for the dairy ledger domain

use thiserror::Error;

/// Ledger operation errors
///
/// The display strings double as client-facing messages for the
/// user-correctable variants, so they are worded for the farmer, not the
/// operator.
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("Phone number already registered")]
    DuplicatePhone,

    #[error("Litres and fat must be greater than 0")]
    NonPositiveQuantity,

    #[error("Fat percentage must be between 0 and 10")]
    FatPercentageOutOfRange,

    #[error("Fat rate is 0, update it first")]
    RateUnset,

    #[error("{0}")]
    Validation(String),

    #[error("Password hashing error: {0}")]
    Crypto(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

/// Result type alias for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
