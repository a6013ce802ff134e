//! Dairy Database Layer
//!
//! SQLite persistence for the dairy ledger via `sqlx`.
//!
//! Layout:
//! - [`schema`] - the SQL schema applied at init
//! - [`entities`] - row structs
//! - [`repos`] - one repository per table, parameterized queries only
//! - [`services`] - business-rule orchestration over the repositories,
//!   returning [`dairy_core::LedgerError`] to the API layer
//!
//! Every query that reads or mutates an owned record binds the caller's
//! user id in the same statement as the record id; an affected-row count of
//! zero is reported as not-found, never as silent success.

pub mod database;
pub mod entities;
pub mod error;
pub mod repos;
pub mod schema;
pub mod services;

pub use database::Database;
pub use entities::*;
pub use error::{DbError, DbResult};
pub use schema::DAIRY_SCHEMA;
pub use services::{
    AccountService, DashboardTotals, ExpenseInput, ExpenseService, MilkRecordInput, MilkService,
    RateService, StatsService, WithdrawalInput, WithdrawalService,
};
