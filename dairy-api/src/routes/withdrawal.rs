//! Withdrawal endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};

use dairy_db::WithdrawalInput;

use crate::dto::{MessageResponse, WithdrawalListResponse, WithdrawalRequest};
use crate::error::{ApiError, ApiResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

pub async fn add_withdrawal(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(req): Json<WithdrawalRequest>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    let input = parse_withdrawal_request(req)?;
    state.withdrawals.add_withdrawal(user.id, input).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::ok("Withdrawal added successfully")),
    ))
}

pub async fn list_withdrawals(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<Json<WithdrawalListResponse>> {
    let withdrawals = state.withdrawals.list_withdrawals(user.id).await?;

    Ok(Json(WithdrawalListResponse {
        success: true,
        withdrawals: withdrawals.into_iter().map(Into::into).collect(),
    }))
}

pub async fn update_withdrawal(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(withdrawal_id): Path<i64>,
    Json(req): Json<WithdrawalRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let input = parse_withdrawal_request(req)?;
    state
        .withdrawals
        .update_withdrawal(user.id, withdrawal_id, input)
        .await?;

    Ok(Json(MessageResponse::ok("Withdrawal updated successfully")))
}

pub async fn delete_withdrawal(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(withdrawal_id): Path<i64>,
) -> ApiResult<Json<MessageResponse>> {
    state
        .withdrawals
        .delete_withdrawal(user.id, withdrawal_id)
        .await?;
    Ok(Json(MessageResponse::ok("Withdrawal deleted successfully")))
}

// Helper functions

fn parse_withdrawal_request(req: WithdrawalRequest) -> Result<WithdrawalInput, ApiError> {
    let (Some(amount), Some(date)) = (req.amount, req.date) else {
        return Err(invalid_withdrawal());
    };

    if amount <= 0.0 {
        return Err(invalid_withdrawal());
    }

    Ok(WithdrawalInput { amount, date })
}

fn invalid_withdrawal() -> ApiError {
    ApiError::BadRequest("Invalid withdrawal data".to_string())
}
