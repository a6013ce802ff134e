//! Expense endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};

use dairy_db::ExpenseInput;

use crate::dto::{ExpenseListResponse, ExpenseRequest, MessageResponse};
use crate::error::{ApiError, ApiResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

pub async fn add_expense(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(req): Json<ExpenseRequest>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    let input = parse_expense_request(req)?;
    state.expenses.add_expense(user.id, input).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::ok("Expense added successfully")),
    ))
}

pub async fn list_expenses(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<Json<ExpenseListResponse>> {
    let expenses = state.expenses.list_expenses(user.id).await?;

    Ok(Json(ExpenseListResponse {
        success: true,
        expenses: expenses.into_iter().map(Into::into).collect(),
    }))
}

pub async fn update_expense(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(expense_id): Path<i64>,
    Json(req): Json<ExpenseRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let input = parse_expense_request(req)?;
    state
        .expenses
        .update_expense(user.id, expense_id, input)
        .await?;

    Ok(Json(MessageResponse::ok("Expense updated successfully")))
}

pub async fn delete_expense(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(expense_id): Path<i64>,
) -> ApiResult<Json<MessageResponse>> {
    state.expenses.delete_expense(user.id, expense_id).await?;
    Ok(Json(MessageResponse::ok("Expense deleted successfully")))
}

// Helper functions

fn parse_expense_request(req: ExpenseRequest) -> Result<ExpenseInput, ApiError> {
    let (Some(amount), Some(description), Some(date)) = (req.amount, req.description, req.date)
    else {
        return Err(invalid_expense());
    };

    if amount <= 0.0 || description.trim().is_empty() {
        return Err(invalid_expense());
    }

    Ok(ExpenseInput {
        amount,
        description,
        date,
    })
}

fn invalid_expense() -> ApiError {
    ApiError::BadRequest("Invalid expense data".to_string())
}
