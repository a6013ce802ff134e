//! Row entities
//!
//! One struct per table, decoded straight from query results. These stay
//! private to the server side; the API layer maps them into wire DTOs.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct UserEntity {
    pub id: i64,
    pub phone_number: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// The single global rate row.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct FatRateEntity {
    pub id: i64,
    pub rate_per_fat: f64,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct MilkRecordEntity {
    pub id: i64,
    pub user_id: i64,
    pub date: NaiveDate,
    /// `morning` or `night`; constrained by the schema.
    pub session: String,
    pub litres: f64,
    pub fat_percentage: f64,
    /// Rate frozen into the record at write time.
    pub rate_per_fat: f64,
    pub amount: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ExpenseEntity {
    pub id: i64,
    pub user_id: i64,
    pub amount: f64,
    pub description: String,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct WithdrawalEntity {
    pub id: i64,
    pub user_id: i64,
    pub amount: f64,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}
