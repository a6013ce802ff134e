//! Milk record service
//!
//! Reads the global rate at write time, computes the earnings amount, and
//! freezes both into the stored record. Updates re-snapshot the current
//! rate; nothing ever recomputes historical rows.

use std::sync::Arc;

use chrono::NaiveDate;
use dairy_core::{earnings, LedgerError, LedgerResult, MilkSession, UserId};

use crate::database::Database;
use crate::entities::MilkRecordEntity;
use crate::repos::milk_repo::MilkRecordRow;
use crate::services::map_db_error;

/// Validated create/update input, all fields required.
#[derive(Debug, Clone)]
pub struct MilkRecordInput {
    pub date: NaiveDate,
    pub session: MilkSession,
    pub litres: f64,
    pub fat_percentage: f64,
}

pub struct MilkService {
    database: Arc<Database>,
}

impl MilkService {
    pub fn new(database: Arc<Database>) -> Self {
        Self { database }
    }

    async fn build_row(&self, input: &MilkRecordInput) -> LedgerResult<MilkRecordRow> {
        let rate = self
            .database
            .rates
            .get_or_init()
            .await
            .map_err(map_db_error)?
            .rate_per_fat;

        let amount = earnings::compute_amount(input.litres, input.fat_percentage, rate)?;

        Ok(MilkRecordRow {
            date: input.date,
            session: input.session.as_str().to_string(),
            litres: input.litres,
            fat_percentage: input.fat_percentage,
            rate_per_fat: rate,
            amount,
        })
    }

    pub async fn add_record(
        &self,
        user_id: UserId,
        input: MilkRecordInput,
    ) -> LedgerResult<MilkRecordEntity> {
        let row = self.build_row(&input).await?;
        let record = self
            .database
            .milk
            .insert(user_id.0, &row)
            .await
            .map_err(map_db_error)?;

        tracing::debug!(user_id = %user_id, record_id = record.id, amount = record.amount, "milk record added");
        Ok(record)
    }

    pub async fn list_records(&self, user_id: UserId) -> LedgerResult<Vec<MilkRecordEntity>> {
        self.database
            .milk
            .list_for_user(user_id.0)
            .await
            .map_err(map_db_error)
    }

    pub async fn update_record(
        &self,
        user_id: UserId,
        record_id: i64,
        input: MilkRecordInput,
    ) -> LedgerResult<MilkRecordEntity> {
        let row = self.build_row(&input).await?;
        let affected = self
            .database
            .milk
            .update_owned(record_id, user_id.0, &row)
            .await
            .map_err(map_db_error)?;

        if affected == 0 {
            return Err(LedgerError::NotFound("Record".to_string()));
        }

        self.database
            .milk
            .get_owned(record_id, user_id.0)
            .await
            .map_err(map_db_error)?
            .ok_or_else(|| LedgerError::NotFound("Record".to_string()))
    }

    pub async fn delete_record(&self, user_id: UserId, record_id: i64) -> LedgerResult<()> {
        let affected = self
            .database
            .milk
            .delete_owned(record_id, user_id.0)
            .await
            .map_err(map_db_error)?;

        if affected == 0 {
            return Err(LedgerError::NotFound("Record".to_string()));
        }
        Ok(())
    }
}
