//! Read-only history views for the dashboard modals

use axum::{extract::State, Extension, Json};

use crate::dto::{ExpenseHistoryDto, HistoryResponse, MilkRecordDto, WithdrawalHistoryDto};
use crate::error::ApiResult;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Milk deliveries with the rate each was paid at
pub async fn earnings_history(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<Json<HistoryResponse<MilkRecordDto>>> {
    let records = state.milk.list_records(user.id).await?;

    Ok(Json(HistoryResponse {
        success: true,
        data: records.into_iter().map(Into::into).collect(),
    }))
}

pub async fn expenses_history(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<Json<HistoryResponse<ExpenseHistoryDto>>> {
    let expenses = state.expenses.list_expenses(user.id).await?;

    Ok(Json(HistoryResponse {
        success: true,
        data: expenses.into_iter().map(Into::into).collect(),
    }))
}

pub async fn withdrawals_history(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<Json<HistoryResponse<WithdrawalHistoryDto>>> {
    let withdrawals = state.withdrawals.list_withdrawals(user.id).await?;

    Ok(Json(HistoryResponse {
        success: true,
        data: withdrawals.into_iter().map(Into::into).collect(),
    }))
}
