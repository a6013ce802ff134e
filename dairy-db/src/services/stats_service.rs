//! Balance aggregation
//!
//! `availableBalance = earnings - expenses - withdrawals`, scoped to one
//! user. The balance is never clamped; overdraft shows up as a negative
//! number and the caller decides how to render it.

use std::sync::Arc;

use dairy_core::{LedgerResult, UserId};

use crate::database::Database;
use crate::services::map_db_error;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashboardTotals {
    pub total_earning: i64,
    pub total_expenses: f64,
    pub total_withdrawn: f64,
    pub available_balance: f64,
}

pub struct StatsService {
    database: Arc<Database>,
}

impl StatsService {
    pub fn new(database: Arc<Database>) -> Self {
        Self { database }
    }

    pub async fn dashboard_totals(&self, user_id: UserId) -> LedgerResult<DashboardTotals> {
        let total_earning = self
            .database
            .milk
            .total_amount(user_id.0)
            .await
            .map_err(map_db_error)?;
        let total_expenses = self
            .database
            .expenses
            .total_amount(user_id.0)
            .await
            .map_err(map_db_error)?;
        let total_withdrawn = self
            .database
            .withdrawals
            .total_amount(user_id.0)
            .await
            .map_err(map_db_error)?;

        Ok(DashboardTotals {
            total_earning,
            total_expenses,
            total_withdrawn,
            available_balance: total_earning as f64 - total_expenses - total_withdrawn,
        })
    }
}
