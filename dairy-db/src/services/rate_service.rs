//! Fat rate service

use std::sync::Arc;

use dairy_core::{LedgerError, LedgerResult};

use crate::database::Database;
use crate::services::map_db_error;

pub struct RateService {
    database: Arc<Database>,
}

impl RateService {
    pub fn new(database: Arc<Database>) -> Self {
        Self { database }
    }

    /// Current global rate. A fresh database gets its config row created
    /// here with rate 0, which keeps earnings entry blocked until the
    /// farmer configures a real rate.
    pub async fn current_rate(&self) -> LedgerResult<f64> {
        let row = self
            .database
            .rates
            .get_or_init()
            .await
            .map_err(map_db_error)?;
        Ok(row.rate_per_fat)
    }

    /// Set the global rate. Zero is allowed (it parks earnings entry);
    /// negative or non-finite values are not.
    pub async fn set_rate(&self, rate_per_fat: f64) -> LedgerResult<f64> {
        if !rate_per_fat.is_finite() || rate_per_fat < 0.0 {
            return Err(LedgerError::Validation("Invalid rate".to_string()));
        }

        self.database
            .rates
            .set(rate_per_fat)
            .await
            .map_err(map_db_error)?;

        tracing::info!(rate_per_fat, "fat rate updated");
        Ok(rate_per_fat)
    }
}
