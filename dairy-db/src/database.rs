//! Database handle and schema init

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

use crate::error::{DbError, DbResult};
use crate::repos::{ExpenseRepo, MilkRecordRepo, RateRepo, UserRepo, WithdrawalRepo};
use crate::schema::DAIRY_SCHEMA;

/// Aggregate over the pooled connection and the per-table repositories.
pub struct Database {
    pool: SqlitePool,
    pub users: UserRepo,
    pub rates: RateRepo,
    pub milk: MilkRecordRepo,
    pub expenses: ExpenseRepo,
    pub withdrawals: WithdrawalRepo,
}

impl Database {
    /// Connect to the given SQLite URL, creating the file if needed.
    pub async fn connect(url: &str) -> DbResult<Self> {
        let options = SqliteConnectOptions::from_str(url)
            .map_err(DbError::Query)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        Ok(Self::from_pool(pool))
    }

    /// Wrap an existing pool. Used by tests running against `:memory:`
    /// databases, where the pool must be capped at a single connection.
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self {
            users: UserRepo::new(pool.clone()),
            rates: RateRepo::new(pool.clone()),
            milk: MilkRecordRepo::new(pool.clone()),
            expenses: ExpenseRepo::new(pool.clone()),
            withdrawals: WithdrawalRepo::new(pool.clone()),
            pool,
        }
    }

    /// Apply the schema. Idempotent.
    pub async fn init_schema(&self) -> DbResult<()> {
        sqlx::raw_sql(DAIRY_SCHEMA).execute(&self.pool).await?;
        tracing::debug!("database schema applied");
        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
