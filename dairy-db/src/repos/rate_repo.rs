//! Fat rate config repository
//!
//! The config is a single row with id 1. It is never read during balance
//! aggregation; only record writes snapshot it.

use chrono::Utc;
use sqlx::SqlitePool;

use crate::entities::FatRateEntity;
use crate::error::{DbError, DbResult};

pub struct RateRepo {
    pool: SqlitePool,
}

impl RateRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn get(&self) -> DbResult<Option<FatRateEntity>> {
        let row = sqlx::query_as::<_, FatRateEntity>(
            "SELECT id, rate_per_fat, updated_at FROM fat_rate_config WHERE id = 1",
        )
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    /// Fetch the config row, creating it with rate 0 if the database is
    /// fresh. A concurrent writer may win the insert; the follow-up read
    /// returns whatever landed.
    pub async fn get_or_init(&self) -> DbResult<FatRateEntity> {
        if let Some(row) = self.get().await? {
            return Ok(row);
        }

        sqlx::query(
            "INSERT INTO fat_rate_config (id, rate_per_fat, updated_at) VALUES (1, 0, ?) \
             ON CONFLICT(id) DO NOTHING",
        )
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        self.get()
            .await?
            .ok_or_else(|| DbError::Schema("fat_rate_config row missing after init".to_string()))
    }

    /// Upsert the rate.
    pub async fn set(&self, rate_per_fat: f64) -> DbResult<()> {
        sqlx::query(
            "INSERT INTO fat_rate_config (id, rate_per_fat, updated_at) VALUES (1, ?, ?) \
             ON CONFLICT(id) DO UPDATE SET rate_per_fat = excluded.rate_per_fat, \
             updated_at = excluded.updated_at",
        )
        .bind(rate_per_fat)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}
