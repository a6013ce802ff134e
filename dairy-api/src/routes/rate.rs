//! Global fat rate endpoints

use axum::{extract::State, Json};

use crate::dto::{FatRateResponse, UpdateFatRateRequest};
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Current global rate; creates the config row on a fresh database.
pub async fn get_fat_rate(State(state): State<AppState>) -> ApiResult<Json<FatRateResponse>> {
    let rate = state.rates.current_rate().await?;

    Ok(Json(FatRateResponse {
        success: true,
        rate_per_fat: rate,
        message: None,
    }))
}

/// Update the global rate. Only new milk records pick it up; stored
/// records keep the rate they were written with.
pub async fn update_fat_rate(
    State(state): State<AppState>,
    Json(req): Json<UpdateFatRateRequest>,
) -> ApiResult<Json<FatRateResponse>> {
    let rate = req
        .rate_per_fat
        .ok_or_else(|| ApiError::BadRequest("Invalid rate".to_string()))?;

    let rate = state.rates.set_rate(rate).await?;

    Ok(Json(FatRateResponse {
        success: true,
        rate_per_fat: rate,
        message: Some("Fat rate updated".to_string()),
    }))
}
