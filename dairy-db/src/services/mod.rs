//! Business-rule services over the repositories
//!
//! Services own the translation from storage errors to the domain
//! taxonomy; the API layer never sees `sqlx` types.

pub mod account_service;
pub mod expense_service;
pub mod milk_service;
pub mod rate_service;
pub mod stats_service;
pub mod withdrawal_service;

pub use account_service::AccountService;
pub use expense_service::{ExpenseInput, ExpenseService};
pub use milk_service::{MilkRecordInput, MilkService};
pub use rate_service::RateService;
pub use stats_service::{DashboardTotals, StatsService};
pub use withdrawal_service::{WithdrawalInput, WithdrawalService};

use dairy_core::LedgerError;

use crate::error::DbError;

/// Convert database errors to ledger errors. The phone-number column is the
/// only unique constraint in the schema, so a unique violation always means
/// a duplicate registration.
pub(crate) fn map_db_error(e: DbError) -> LedgerError {
    match e {
        DbError::UniqueViolation(_) => LedgerError::DuplicatePhone,
        other => LedgerError::Storage(other.to_string()),
    }
}
