//! API route handlers

pub mod auth;
pub mod dashboard;
pub mod expense;
pub mod health;
pub mod history;
pub mod milk;
pub mod rate;
pub mod withdrawal;

use axum::{
    middleware::from_fn_with_state,
    routing::{delete, get, post, put},
    Router,
};

use crate::error::ApiError;
use crate::middleware::auth::require_auth;
use crate::state::AppState;

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    let protected = Router::new()
        // Account
        .route("/api/auth/profile", delete(auth::delete_profile))
        // Fat rate config
        .route(
            "/api/fat-rate",
            get(rate::get_fat_rate).put(rate::update_fat_rate),
        )
        // Milk records
        .route(
            "/api/milk-records",
            post(milk::add_record).get(milk::list_records),
        )
        .route(
            "/api/milk-records/:id",
            put(milk::update_record).delete(milk::delete_record),
        )
        // Expenses
        .route(
            "/api/expenses",
            post(expense::add_expense).get(expense::list_expenses),
        )
        .route(
            "/api/expenses/:id",
            put(expense::update_expense).delete(expense::delete_expense),
        )
        // Withdrawals
        .route(
            "/api/withdrawals",
            post(withdrawal::add_withdrawal).get(withdrawal::list_withdrawals),
        )
        .route(
            "/api/withdrawals/:id",
            put(withdrawal::update_withdrawal).delete(withdrawal::delete_withdrawal),
        )
        // Dashboard and history
        .route("/api/dashboard/stats", get(dashboard::get_stats))
        .route("/api/history/earnings", get(history::earnings_history))
        .route("/api/history/expenses", get(history::expenses_history))
        .route("/api/history/withdrawals", get(history::withdrawals_history))
        .route_layer(from_fn_with_state(state.auth.clone(), require_auth));

    Router::new()
        .route("/health", get(health::health_check))
        .route("/api/auth/signup", post(auth::signup))
        .route("/api/auth/login", post(auth::login))
        .merge(protected)
        .fallback(route_not_found)
        .with_state(state)
}

/// JSON 404 for unmatched paths, keeping the response envelope.
async fn route_not_found() -> ApiError {
    ApiError::NotFound("API route not found".to_string())
}
