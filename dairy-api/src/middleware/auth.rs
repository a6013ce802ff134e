//! JWT authentication middleware
//!
//! Issues and validates the bearer tokens that gate every owner-scoped
//! endpoint. All token failures are answered with 401; the body does not
//! distinguish expired from forged tokens.

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use dairy_core::UserId;

use crate::error::ErrorResponse;

/// Token lifetime.
pub const TOKEN_TTL_DAYS: i64 = 7;

/// JWT configuration (HS256)
#[derive(Debug, Clone)]
pub struct JwtConfig {
    secret: String,
}

/// Error type for JWT configuration
#[derive(Debug, Clone)]
pub struct JwtConfigError {
    pub message: String,
}

impl std::fmt::Display for JwtConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "JWT config error: {}", self.message)
    }
}

impl std::error::Error for JwtConfigError {}

impl JwtConfig {
    /// Minimum secret length for HS256.
    const MIN_SECRET_LENGTH: usize = 32;

    /// Create a config, rejecting secrets shorter than
    /// [`Self::MIN_SECRET_LENGTH`] bytes.
    pub fn try_new(secret: impl Into<String>) -> Result<Self, JwtConfigError> {
        let secret = secret.into();
        if secret.len() < Self::MIN_SECRET_LENGTH {
            return Err(JwtConfigError {
                message: format!(
                    "JWT secret must be at least {} bytes, got {}. \
                     Use a cryptographically secure random value.",
                    Self::MIN_SECRET_LENGTH,
                    secret.len()
                ),
            });
        }
        Ok(Self { secret })
    }

    /// Read the secret from an environment variable.
    pub fn try_from_env(env_var: &str) -> Result<Self, JwtConfigError> {
        let secret = std::env::var(env_var).map_err(|_| JwtConfigError {
            message: format!(
                "JWT secret environment variable '{env_var}' is not set. \
                 Set it to a cryptographically secure random value (at least 32 bytes)."
            ),
        })?;
        Self::try_new(secret)
    }

    #[cfg(test)]
    fn for_testing() -> Self {
        Self {
            secret: "unit-test-secret-0123456789abcdefghij".to_string(),
        }
    }
}

/// JWT claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthClaims {
    /// Subject: the user id, as a decimal string
    pub sub: String,
    /// Phone number the account was registered with
    pub phone: String,
    /// Issued at (Unix timestamp)
    pub iat: u64,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
}

impl AuthClaims {
    pub fn user_id(&self) -> Option<UserId> {
        self.sub.parse::<i64>().ok().map(UserId)
    }
}

/// The authenticated caller, attached to request extensions by
/// [`require_auth`] for downstream ownership checks.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: UserId,
    pub phone: String,
}

/// Authentication error. Every variant maps to 401.
#[derive(Debug)]
pub enum AuthError {
    /// Missing authorization header
    MissingToken,
    /// Header present but not `Bearer <token>`
    InvalidTokenFormat,
    /// Expired, forged, malformed, or missing a usable subject
    InvalidToken,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let message = match self {
            AuthError::MissingToken => "Authorization header missing",
            AuthError::InvalidTokenFormat => "Invalid authorization header format",
            AuthError::InvalidToken => "Invalid or expired token",
        };

        let body = ErrorResponse {
            success: false,
            message: message.to_string(),
        };

        (StatusCode::UNAUTHORIZED, Json(body)).into_response()
    }
}

/// Sign a token for a freshly authenticated user.
pub fn issue_token(
    config: &JwtConfig,
    user_id: UserId,
    phone: &str,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = Utc::now();
    let claims = AuthClaims {
        sub: user_id.0.to_string(),
        phone: phone.to_string(),
        iat: now.timestamp() as u64,
        exp: (now + chrono::Duration::days(TOKEN_TTL_DAYS)).timestamp() as u64,
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Extract the token from an `Authorization: Bearer <token>` header value.
pub fn extract_token(auth_header: &str) -> Result<&str, AuthError> {
    auth_header
        .strip_prefix("Bearer ")
        .ok_or(AuthError::InvalidTokenFormat)
}

/// Validate a token and return its claims.
pub fn validate_token(token: &str, config: &JwtConfig) -> Result<AuthClaims, AuthError> {
    let validation = Validation::new(Algorithm::HS256);
    let key = DecodingKey::from_secret(config.secret.as_bytes());

    decode::<AuthClaims>(token, &key, &validation)
        .map(|data| data.claims)
        .map_err(|_| AuthError::InvalidToken)
}

/// Authentication state shared with the middleware
#[derive(Clone)]
pub struct AuthState {
    pub config: Arc<JwtConfig>,
}

impl AuthState {
    pub fn new(config: JwtConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

/// Require-authentication middleware
///
/// Validates the bearer token and stores the caller in request extensions.
pub async fn require_auth(
    State(auth_state): State<AuthState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or(AuthError::MissingToken)?;

    let token = extract_token(auth_header)?;
    let claims = validate_token(token, &auth_state.config)?;
    let user_id = claims.user_id().ok_or(AuthError::InvalidToken)?;

    request.extensions_mut().insert(AuthUser {
        id: user_id,
        phone: claims.phone,
    });

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_token() {
        assert!(extract_token("Bearer abc123").is_ok());
        assert!(extract_token("Basic abc123").is_err());
        assert!(extract_token("abc123").is_err());
    }

    #[test]
    fn test_issue_and_validate_round_trip() {
        let config = JwtConfig::for_testing();

        let token = issue_token(&config, UserId(42), "9876543210").expect("issue");
        let claims = validate_token(&token, &config).expect("validate");

        assert_eq!(claims.sub, "42");
        assert_eq!(claims.phone, "9876543210");
        assert_eq!(claims.user_id(), Some(UserId(42)));
    }

    #[test]
    fn test_expired_token_rejected() {
        let config = JwtConfig::for_testing();

        let now = Utc::now();
        let claims = AuthClaims {
            sub: "42".to_string(),
            phone: "9876543210".to_string(),
            iat: (now - chrono::Duration::days(8)).timestamp() as u64,
            exp: (now - chrono::Duration::days(1)).timestamp() as u64,
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret("unit-test-secret-0123456789abcdefghij".as_bytes()),
        )
        .expect("encode");

        assert!(matches!(
            validate_token(&token, &config),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let config = JwtConfig::for_testing();
        let other = JwtConfig::try_new("another-secret-0123456789abcdefghij").expect("config");

        let token = issue_token(&other, UserId(42), "9876543210").expect("issue");
        assert!(matches!(
            validate_token(&token, &config),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn test_short_secret_rejected() {
        assert!(JwtConfig::try_new("short").is_err());
    }

    #[test]
    fn test_non_numeric_subject_has_no_user_id() {
        let claims = AuthClaims {
            sub: "not-a-number".to_string(),
            phone: "9876543210".to_string(),
            iat: 0,
            exp: 0,
        };
        assert_eq!(claims.user_id(), None);
    }
}
