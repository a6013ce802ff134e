//! Signup, login, and account deletion

use axum::{extract::State, http::StatusCode, Extension, Json};

use dairy_core::{password, UserId};

use crate::dto::{AuthResponse, CredentialsRequest, MessageResponse, UserDto};
use crate::error::{ApiError, ApiResult};
use crate::middleware::auth::{issue_token, AuthUser};
use crate::state::AppState;

const MIN_PASSWORD_CHARS: usize = 6;

/// Register a new user
pub async fn signup(
    State(state): State<AppState>,
    Json(req): Json<CredentialsRequest>,
) -> ApiResult<(StatusCode, Json<AuthResponse>)> {
    let (phone, password) = required_credentials(req)?;

    if !is_valid_phone(&phone) {
        return Err(ApiError::BadRequest(
            "Phone number must be 10-12 digits".to_string(),
        ));
    }
    if password.chars().count() < MIN_PASSWORD_CHARS {
        return Err(ApiError::BadRequest(
            "Password must be at least 6 characters".to_string(),
        ));
    }

    let hash = password::hash_password(&password)?;
    let user = state.accounts.signup(&phone, &hash).await?;

    let token = issue_token(&state.auth.config, UserId(user.id), &user.phone_number)
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            success: true,
            message: "Signup successful".to_string(),
            token,
            user: UserDto {
                id: user.id,
                phone_number: user.phone_number,
            },
        }),
    ))
}

/// Log in with phone number and password
///
/// Unknown phone and wrong password answer with the same message so the
/// response never reveals which half was wrong.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<CredentialsRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let (phone, password) = required_credentials(req)?;

    let user = state
        .accounts
        .find_by_phone(&phone)
        .await?
        .ok_or_else(invalid_credentials)?;

    if !password::verify_password(&password, &user.password_hash)? {
        return Err(invalid_credentials());
    }

    let token = issue_token(&state.auth.config, UserId(user.id), &user.phone_number)
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    Ok(Json(AuthResponse {
        success: true,
        message: "Login successful".to_string(),
        token,
        user: UserDto {
            id: user.id,
            phone_number: user.phone_number,
        },
    }))
}

/// Delete the authenticated account and everything it owns
pub async fn delete_profile(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<Json<MessageResponse>> {
    state.accounts.delete_account(user.id).await?;
    Ok(Json(MessageResponse::ok("Account deleted successfully")))
}

// Helper functions

fn required_credentials(req: CredentialsRequest) -> Result<(String, String), ApiError> {
    let phone = req.phone_number.unwrap_or_default();
    let password = req.password.unwrap_or_default();
    if phone.is_empty() || password.is_empty() {
        return Err(ApiError::BadRequest(
            "Phone number and password are required".to_string(),
        ));
    }
    Ok((phone, password))
}

fn invalid_credentials() -> ApiError {
    ApiError::Unauthorized("Invalid phone number or password".to_string())
}

fn is_valid_phone(phone: &str) -> bool {
    (10..=12).contains(&phone.len()) && phone.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_validation() {
        assert!(is_valid_phone("9876543210"));
        assert!(is_valid_phone("919876543210"));
        assert!(!is_valid_phone("987654321")); // 9 digits
        assert!(!is_valid_phone("9198765432101")); // 13 digits
        assert!(!is_valid_phone("98765x3210"));
        assert!(!is_valid_phone("+919876543210"));
        assert!(!is_valid_phone(""));
    }
}
