//! Dashboard summary endpoint

use axum::{extract::State, Extension, Json};

use crate::dto::DashboardStatsResponse;
use crate::error::ApiResult;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Totals and available balance for the caller. The balance may be
/// negative; it is reported as-is so the client can render the overdraft.
pub async fn get_stats(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<Json<DashboardStatsResponse>> {
    let totals = state.stats.dashboard_totals(user.id).await?;

    Ok(Json(DashboardStatsResponse {
        success: true,
        total_earning: totals.total_earning,
        total_expenses: totals.total_expenses,
        total_withdrawn: totals.total_withdrawn,
        available_balance: totals.available_balance,
    }))
}
