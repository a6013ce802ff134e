//! Account service

use std::sync::Arc;

use dairy_core::{LedgerResult, UserId};

use crate::database::Database;
use crate::entities::UserEntity;
use crate::services::map_db_error;

pub struct AccountService {
    database: Arc<Database>,
}

impl AccountService {
    pub fn new(database: Arc<Database>) -> Self {
        Self { database }
    }

    /// Register a user. The password must already be hashed; a duplicate
    /// phone number surfaces as [`dairy_core::LedgerError::DuplicatePhone`]
    /// straight from the unique constraint, so two racing signups cannot
    /// both succeed.
    pub async fn signup(&self, phone_number: &str, password_hash: &str) -> LedgerResult<UserEntity> {
        let user = self
            .database
            .users
            .insert(phone_number, password_hash)
            .await
            .map_err(map_db_error)?;

        tracing::info!(user_id = user.id, "user registered");
        Ok(user)
    }

    pub async fn find_by_phone(&self, phone_number: &str) -> LedgerResult<Option<UserEntity>> {
        self.database
            .users
            .find_by_phone(phone_number)
            .await
            .map_err(map_db_error)
    }

    /// Delete the account and everything it owns in one transaction.
    /// Idempotent: deleting an already-removed account is not an error,
    /// matching the hard-delete semantics of the record endpoints' owner.
    pub async fn delete_account(&self, user_id: UserId) -> LedgerResult<()> {
        let removed = self
            .database
            .users
            .delete_with_dependents(user_id.0)
            .await
            .map_err(map_db_error)?;

        tracing::info!(user_id = %user_id, removed, "account deleted");
        Ok(())
    }
}
