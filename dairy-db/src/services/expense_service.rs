//! Expense service

use std::sync::Arc;

use chrono::NaiveDate;
use dairy_core::{LedgerError, LedgerResult, UserId};

use crate::database::Database;
use crate::entities::ExpenseEntity;
use crate::services::map_db_error;

#[derive(Debug, Clone)]
pub struct ExpenseInput {
    pub amount: f64,
    pub description: String,
    pub date: NaiveDate,
}

pub struct ExpenseService {
    database: Arc<Database>,
}

impl ExpenseService {
    pub fn new(database: Arc<Database>) -> Self {
        Self { database }
    }

    pub async fn add_expense(
        &self,
        user_id: UserId,
        input: ExpenseInput,
    ) -> LedgerResult<ExpenseEntity> {
        self.database
            .expenses
            .insert(user_id.0, input.amount, &input.description, input.date)
            .await
            .map_err(map_db_error)
    }

    pub async fn list_expenses(&self, user_id: UserId) -> LedgerResult<Vec<ExpenseEntity>> {
        self.database
            .expenses
            .list_for_user(user_id.0)
            .await
            .map_err(map_db_error)
    }

    pub async fn update_expense(
        &self,
        user_id: UserId,
        expense_id: i64,
        input: ExpenseInput,
    ) -> LedgerResult<()> {
        let affected = self
            .database
            .expenses
            .update_owned(
                expense_id,
                user_id.0,
                input.amount,
                &input.description,
                input.date,
            )
            .await
            .map_err(map_db_error)?;

        if affected == 0 {
            return Err(LedgerError::NotFound("Expense".to_string()));
        }
        Ok(())
    }

    pub async fn delete_expense(&self, user_id: UserId, expense_id: i64) -> LedgerResult<()> {
        let affected = self
            .database
            .expenses
            .delete_owned(expense_id, user_id.0)
            .await
            .map_err(map_db_error)?;

        if affected == 0 {
            return Err(LedgerError::NotFound("Expense".to_string()));
        }
        Ok(())
    }
}
