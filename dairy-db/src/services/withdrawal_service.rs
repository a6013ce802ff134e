//! Withdrawal service

use std::sync::Arc;

use chrono::NaiveDate;
use dairy_core::{LedgerError, LedgerResult, UserId};

use crate::database::Database;
use crate::entities::WithdrawalEntity;
use crate::services::map_db_error;

#[derive(Debug, Clone)]
pub struct WithdrawalInput {
    pub amount: f64,
    pub date: NaiveDate,
}

pub struct WithdrawalService {
    database: Arc<Database>,
}

impl WithdrawalService {
    pub fn new(database: Arc<Database>) -> Self {
        Self { database }
    }

    pub async fn add_withdrawal(
        &self,
        user_id: UserId,
        input: WithdrawalInput,
    ) -> LedgerResult<WithdrawalEntity> {
        self.database
            .withdrawals
            .insert(user_id.0, input.amount, input.date)
            .await
            .map_err(map_db_error)
    }

    pub async fn list_withdrawals(&self, user_id: UserId) -> LedgerResult<Vec<WithdrawalEntity>> {
        self.database
            .withdrawals
            .list_for_user(user_id.0)
            .await
            .map_err(map_db_error)
    }

    pub async fn update_withdrawal(
        &self,
        user_id: UserId,
        withdrawal_id: i64,
        input: WithdrawalInput,
    ) -> LedgerResult<()> {
        let affected = self
            .database
            .withdrawals
            .update_owned(withdrawal_id, user_id.0, input.amount, input.date)
            .await
            .map_err(map_db_error)?;

        if affected == 0 {
            return Err(LedgerError::NotFound("Withdrawal".to_string()));
        }
        Ok(())
    }

    pub async fn delete_withdrawal(
        &self,
        user_id: UserId,
        withdrawal_id: i64,
    ) -> LedgerResult<()> {
        let affected = self
            .database
            .withdrawals
            .delete_owned(withdrawal_id, user_id.0)
            .await
            .map_err(map_db_error)?;

        if affected == 0 {
            return Err(LedgerError::NotFound("Withdrawal".to_string()));
        }
        Ok(())
    }
}
