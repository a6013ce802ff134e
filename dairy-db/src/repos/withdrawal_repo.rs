//! Withdrawal repository

use chrono::{NaiveDate, Utc};
use sqlx::SqlitePool;

use crate::entities::WithdrawalEntity;
use crate::error::DbResult;

const COLUMNS: &str = "id, user_id, amount, date, created_at";

pub struct WithdrawalRepo {
    pool: SqlitePool,
}

impl WithdrawalRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn insert(
        &self,
        user_id: i64,
        amount: f64,
        date: NaiveDate,
    ) -> DbResult<WithdrawalEntity> {
        let withdrawal = sqlx::query_as::<_, WithdrawalEntity>(&format!(
            "INSERT INTO withdrawals (user_id, amount, date, created_at) \
             VALUES (?, ?, ?, ?) RETURNING {COLUMNS}"
        ))
        .bind(user_id)
        .bind(amount)
        .bind(date)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;
        Ok(withdrawal)
    }

    pub async fn list_for_user(&self, user_id: i64) -> DbResult<Vec<WithdrawalEntity>> {
        let withdrawals = sqlx::query_as::<_, WithdrawalEntity>(&format!(
            "SELECT {COLUMNS} FROM withdrawals WHERE user_id = ? ORDER BY date DESC, id DESC"
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(withdrawals)
    }

    pub async fn update_owned(
        &self,
        id: i64,
        user_id: i64,
        amount: f64,
        date: NaiveDate,
    ) -> DbResult<u64> {
        let result =
            sqlx::query("UPDATE withdrawals SET amount = ?, date = ? WHERE id = ? AND user_id = ?")
                .bind(amount)
                .bind(date)
                .bind(id)
                .bind(user_id)
                .execute(&self.pool)
                .await?;
        Ok(result.rows_affected())
    }

    pub async fn delete_owned(&self, id: i64, user_id: i64) -> DbResult<u64> {
        let result = sqlx::query("DELETE FROM withdrawals WHERE id = ? AND user_id = ?")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    pub async fn total_amount(&self, user_id: i64) -> DbResult<f64> {
        let total = sqlx::query_scalar::<_, f64>(
            "SELECT CAST(COALESCE(SUM(amount), 0) AS REAL) FROM withdrawals WHERE user_id = ?",
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(total)
    }
}
