//! Milk record repository

use chrono::{NaiveDate, Utc};
use sqlx::SqlitePool;

use crate::entities::MilkRecordEntity;
use crate::error::DbResult;

const COLUMNS: &str =
    "id, user_id, date, session, litres, fat_percentage, rate_per_fat, amount, created_at";

pub struct MilkRecordRepo {
    pool: SqlitePool,
}

/// Column values for an insert or full-field update, earnings already
/// computed and rate already snapshotted by the service.
pub struct MilkRecordRow {
    pub date: NaiveDate,
    pub session: String,
    pub litres: f64,
    pub fat_percentage: f64,
    pub rate_per_fat: f64,
    pub amount: i64,
}

impl MilkRecordRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, user_id: i64, row: &MilkRecordRow) -> DbResult<MilkRecordEntity> {
        let record = sqlx::query_as::<_, MilkRecordEntity>(&format!(
            "INSERT INTO milk_records \
             (user_id, date, session, litres, fat_percentage, rate_per_fat, amount, created_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?) RETURNING {COLUMNS}"
        ))
        .bind(user_id)
        .bind(row.date)
        .bind(&row.session)
        .bind(row.litres)
        .bind(row.fat_percentage)
        .bind(row.rate_per_fat)
        .bind(row.amount)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;
        Ok(record)
    }

    pub async fn list_for_user(&self, user_id: i64) -> DbResult<Vec<MilkRecordEntity>> {
        let records = sqlx::query_as::<_, MilkRecordEntity>(&format!(
            "SELECT {COLUMNS} FROM milk_records WHERE user_id = ? ORDER BY date DESC, id DESC"
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(records)
    }

    pub async fn get_owned(&self, id: i64, user_id: i64) -> DbResult<Option<MilkRecordEntity>> {
        let record = sqlx::query_as::<_, MilkRecordEntity>(&format!(
            "SELECT {COLUMNS} FROM milk_records WHERE id = ? AND user_id = ?"
        ))
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(record)
    }

    /// Full-field update, ownership checked in the same statement.
    /// Returns the affected-row count; 0 means absent or not owned.
    pub async fn update_owned(&self, id: i64, user_id: i64, row: &MilkRecordRow) -> DbResult<u64> {
        let result = sqlx::query(
            "UPDATE milk_records SET date = ?, session = ?, litres = ?, fat_percentage = ?, \
             rate_per_fat = ?, amount = ? WHERE id = ? AND user_id = ?",
        )
        .bind(row.date)
        .bind(&row.session)
        .bind(row.litres)
        .bind(row.fat_percentage)
        .bind(row.rate_per_fat)
        .bind(row.amount)
        .bind(id)
        .bind(user_id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    pub async fn delete_owned(&self, id: i64, user_id: i64) -> DbResult<u64> {
        let result = sqlx::query("DELETE FROM milk_records WHERE id = ? AND user_id = ?")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    pub async fn total_amount(&self, user_id: i64) -> DbResult<i64> {
        let total = sqlx::query_scalar::<_, i64>(
            "SELECT CAST(COALESCE(SUM(amount), 0) AS INTEGER) FROM milk_records WHERE user_id = ?",
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(total)
    }
}
