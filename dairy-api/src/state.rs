//! Application state for the API server

use std::sync::Arc;

use dairy_db::{
    AccountService, Database, DbError, ExpenseService, MilkService, RateService, StatsService,
    WithdrawalService,
};

use crate::middleware::auth::{AuthState, JwtConfig};

/// API server state
#[derive(Clone)]
pub struct AppState {
    pub accounts: Arc<AccountService>,
    pub rates: Arc<RateService>,
    pub milk: Arc<MilkService>,
    pub expenses: Arc<ExpenseService>,
    pub withdrawals: Arc<WithdrawalService>,
    pub stats: Arc<StatsService>,
    pub auth: AuthState,
    pub version: String,
}

impl AppState {
    /// Build the state, applying the schema first so a fresh database is
    /// usable immediately.
    pub async fn new(database: Arc<Database>, jwt: JwtConfig) -> Result<Self, DbError> {
        database.init_schema().await?;

        Ok(Self {
            accounts: Arc::new(AccountService::new(database.clone())),
            rates: Arc::new(RateService::new(database.clone())),
            milk: Arc::new(MilkService::new(database.clone())),
            expenses: Arc::new(ExpenseService::new(database.clone())),
            withdrawals: Arc::new(WithdrawalService::new(database.clone())),
            stats: Arc::new(StatsService::new(database)),
            auth: AuthState::new(jwt),
            version: env!("CARGO_PKG_VERSION").to_string(),
        })
    }
}

/// API server configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
    pub enable_cors: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            enable_cors: true,
        }
    }
}
