//! User repository

use chrono::Utc;
use sqlx::SqlitePool;

use crate::entities::UserEntity;
use crate::error::{DbError, DbResult};

pub struct UserRepo {
    pool: SqlitePool,
}

impl UserRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new user. A duplicate phone number surfaces as
    /// [`DbError::UniqueViolation`] from the schema constraint.
    pub async fn insert(&self, phone_number: &str, password_hash: &str) -> DbResult<UserEntity> {
        sqlx::query_as::<_, UserEntity>(
            "INSERT INTO users (phone_number, password_hash, created_at) VALUES (?, ?, ?) \
             RETURNING id, phone_number, password_hash, created_at",
        )
        .bind(phone_number)
        .bind(password_hash)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(DbError::classify)
    }

    pub async fn find_by_phone(&self, phone_number: &str) -> DbResult<Option<UserEntity>> {
        let user = sqlx::query_as::<_, UserEntity>(
            "SELECT id, phone_number, password_hash, created_at FROM users WHERE phone_number = ?",
        )
        .bind(phone_number)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    /// Delete a user and every record they own, atomically.
    ///
    /// Returns the number of user rows removed (0 when the account was
    /// already gone).
    pub async fn delete_with_dependents(&self, user_id: i64) -> DbResult<u64> {
        let mut tx = self.pool.begin().await?;

        for sql in [
            "DELETE FROM milk_records WHERE user_id = ?",
            "DELETE FROM expenses WHERE user_id = ?",
            "DELETE FROM withdrawals WHERE user_id = ?",
        ] {
            sqlx::query(sql).bind(user_id).execute(&mut *tx).await?;
        }

        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected())
    }
}
