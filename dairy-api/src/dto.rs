//! Data Transfer Objects for API requests and responses
//!
//! Request fields are optional so the handlers can answer missing input
//! with the envelope's own messages instead of the framework's
//! deserialization errors. The wire format keeps the original camelCase
//! names on auth/rate fields and snake_case on record fields.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use dairy_db::{ExpenseEntity, MilkRecordEntity, WithdrawalEntity};

// ============ Shared ============

/// Plain `{success, message}` acknowledgement.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

// ============ Auth ============

#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    #[serde(rename = "phoneNumber")]
    pub phone_number: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UserDto {
    pub id: i64,
    #[serde(rename = "phoneNumber")]
    pub phone_number: String,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub success: bool,
    pub message: String,
    pub token: String,
    pub user: UserDto,
}

// ============ Fat rate ============

#[derive(Debug, Deserialize)]
pub struct UpdateFatRateRequest {
    #[serde(rename = "ratePerFat")]
    pub rate_per_fat: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct FatRateResponse {
    pub success: bool,
    #[serde(rename = "ratePerFat")]
    pub rate_per_fat: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

// ============ Milk records ============

#[derive(Debug, Deserialize)]
pub struct MilkRecordRequest {
    pub date: Option<NaiveDate>,
    pub session: Option<String>,
    pub litres: Option<f64>,
    pub fat_percentage: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct MilkRecordDto {
    pub id: i64,
    pub date: NaiveDate,
    pub session: String,
    pub litres: f64,
    pub fat_percentage: f64,
    pub rate_per_fat: f64,
    pub amount: i64,
    pub created_at: DateTime<Utc>,
}

impl From<MilkRecordEntity> for MilkRecordDto {
    fn from(entity: MilkRecordEntity) -> Self {
        Self {
            id: entity.id,
            date: entity.date,
            session: entity.session,
            litres: entity.litres,
            fat_percentage: entity.fat_percentage,
            rate_per_fat: entity.rate_per_fat,
            amount: entity.amount,
            created_at: entity.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MilkRecordResponse {
    pub success: bool,
    pub message: String,
    pub record: MilkRecordDto,
}

#[derive(Debug, Serialize)]
pub struct MilkRecordListResponse {
    pub success: bool,
    pub records: Vec<MilkRecordDto>,
}

// ============ Expenses ============

#[derive(Debug, Deserialize)]
pub struct ExpenseRequest {
    pub amount: Option<f64>,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub struct ExpenseDto {
    pub id: i64,
    pub amount: f64,
    pub description: String,
    pub date: NaiveDate,
}

impl From<ExpenseEntity> for ExpenseDto {
    fn from(entity: ExpenseEntity) -> Self {
        Self {
            id: entity.id,
            amount: entity.amount,
            description: entity.description,
            date: entity.date,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ExpenseListResponse {
    pub success: bool,
    pub expenses: Vec<ExpenseDto>,
}

// ============ Withdrawals ============

#[derive(Debug, Deserialize)]
pub struct WithdrawalRequest {
    pub amount: Option<f64>,
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub struct WithdrawalDto {
    pub id: i64,
    pub amount: f64,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl From<WithdrawalEntity> for WithdrawalDto {
    fn from(entity: WithdrawalEntity) -> Self {
        Self {
            id: entity.id,
            amount: entity.amount,
            date: entity.date,
            created_at: entity.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct WithdrawalListResponse {
    pub success: bool,
    pub withdrawals: Vec<WithdrawalDto>,
}

// ============ Dashboard & history ============

#[derive(Debug, Serialize)]
pub struct DashboardStatsResponse {
    pub success: bool,
    #[serde(rename = "totalEarning")]
    pub total_earning: i64,
    #[serde(rename = "totalExpenses")]
    pub total_expenses: f64,
    #[serde(rename = "totalWithdrawn")]
    pub total_withdrawn: f64,
    #[serde(rename = "availableBalance")]
    pub available_balance: f64,
}

/// Read-only history envelope; `data` holds whichever record shape the
/// endpoint serves.
#[derive(Debug, Serialize)]
pub struct HistoryResponse<T> {
    pub success: bool,
    pub data: Vec<T>,
}

#[derive(Debug, Serialize)]
pub struct ExpenseHistoryDto {
    pub id: i64,
    pub date: NaiveDate,
    pub amount: f64,
    pub description: String,
}

impl From<ExpenseEntity> for ExpenseHistoryDto {
    fn from(entity: ExpenseEntity) -> Self {
        Self {
            id: entity.id,
            date: entity.date,
            amount: entity.amount,
            description: entity.description,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct WithdrawalHistoryDto {
    pub id: i64,
    pub date: NaiveDate,
    pub amount: f64,
}

impl From<WithdrawalEntity> for WithdrawalHistoryDto {
    fn from(entity: WithdrawalEntity) -> Self {
        Self {
            id: entity.id,
            date: entity.date,
            amount: entity.amount,
        }
    }
}

// ============ Health ============

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
