//! Milk record endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};

use dairy_core::MilkSession;
use dairy_db::MilkRecordInput;

use crate::dto::{MessageResponse, MilkRecordListResponse, MilkRecordRequest, MilkRecordResponse};
use crate::error::{ApiError, ApiResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Record a milk delivery
pub async fn add_record(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(req): Json<MilkRecordRequest>,
) -> ApiResult<(StatusCode, Json<MilkRecordResponse>)> {
    let input = parse_record_request(req)?;
    let record = state.milk.add_record(user.id, input).await?;

    Ok((
        StatusCode::CREATED,
        Json(MilkRecordResponse {
            success: true,
            message: "Milk record added successfully".to_string(),
            record: record.into(),
        }),
    ))
}

/// All milk records of the caller, newest first
pub async fn list_records(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<Json<MilkRecordListResponse>> {
    let records = state.milk.list_records(user.id).await?;

    Ok(Json(MilkRecordListResponse {
        success: true,
        records: records.into_iter().map(Into::into).collect(),
    }))
}

/// Full-field update of an owned record; re-snapshots the current rate
pub async fn update_record(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(record_id): Path<i64>,
    Json(req): Json<MilkRecordRequest>,
) -> ApiResult<Json<MilkRecordResponse>> {
    let input = parse_record_request(req)?;
    let record = state.milk.update_record(user.id, record_id, input).await?;

    Ok(Json(MilkRecordResponse {
        success: true,
        message: "Milk record updated successfully".to_string(),
        record: record.into(),
    }))
}

/// Hard-delete an owned record
pub async fn delete_record(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(record_id): Path<i64>,
) -> ApiResult<Json<MessageResponse>> {
    state.milk.delete_record(user.id, record_id).await?;
    Ok(Json(MessageResponse::ok("Milk record deleted successfully")))
}

// Helper functions

fn parse_record_request(req: MilkRecordRequest) -> Result<MilkRecordInput, ApiError> {
    let (Some(date), Some(session), Some(litres), Some(fat_percentage)) =
        (req.date, req.session, req.litres, req.fat_percentage)
    else {
        return Err(ApiError::BadRequest("Please provide all fields".to_string()));
    };

    let session = MilkSession::parse(&session)
        .ok_or_else(|| ApiError::BadRequest("Session must be morning or night".to_string()))?;

    Ok(MilkRecordInput {
        date,
        session,
        litres,
        fat_percentage,
    })
}
