//! Expense repository

use chrono::{NaiveDate, Utc};
use sqlx::SqlitePool;

use crate::entities::ExpenseEntity;
use crate::error::DbResult;

const COLUMNS: &str = "id, user_id, amount, description, date, created_at";

pub struct ExpenseRepo {
    pool: SqlitePool,
}

impl ExpenseRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn insert(
        &self,
        user_id: i64,
        amount: f64,
        description: &str,
        date: NaiveDate,
    ) -> DbResult<ExpenseEntity> {
        let expense = sqlx::query_as::<_, ExpenseEntity>(&format!(
            "INSERT INTO expenses (user_id, amount, description, date, created_at) \
             VALUES (?, ?, ?, ?, ?) RETURNING {COLUMNS}"
        ))
        .bind(user_id)
        .bind(amount)
        .bind(description)
        .bind(date)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;
        Ok(expense)
    }

    pub async fn list_for_user(&self, user_id: i64) -> DbResult<Vec<ExpenseEntity>> {
        let expenses = sqlx::query_as::<_, ExpenseEntity>(&format!(
            "SELECT {COLUMNS} FROM expenses WHERE user_id = ? ORDER BY date DESC, id DESC"
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(expenses)
    }

    pub async fn update_owned(
        &self,
        id: i64,
        user_id: i64,
        amount: f64,
        description: &str,
        date: NaiveDate,
    ) -> DbResult<u64> {
        let result = sqlx::query(
            "UPDATE expenses SET amount = ?, description = ?, date = ? \
             WHERE id = ? AND user_id = ?",
        )
        .bind(amount)
        .bind(description)
        .bind(date)
        .bind(id)
        .bind(user_id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    pub async fn delete_owned(&self, id: i64, user_id: i64) -> DbResult<u64> {
        let result = sqlx::query("DELETE FROM expenses WHERE id = ? AND user_id = ?")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    pub async fn total_amount(&self, user_id: i64) -> DbResult<f64> {
        let total = sqlx::query_scalar::<_, f64>(
            "SELECT CAST(COALESCE(SUM(amount), 0) AS REAL) FROM expenses WHERE user_id = ?",
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(total)
    }
}
