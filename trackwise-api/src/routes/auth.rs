/// Credential check endpoint
///
/// # Endpoints
///
/// - `POST /api/login` - Check a name/password pair
///
/// Login issues no session or token; it only reports whether the pair
/// matches a stored user. No other endpoint checks identity.

use crate::{app::AppState, error::ApiResult, extract::ValidatedJson};
use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use trackwise_shared::auth::password::PasswordError;
use validator::Validate;

/// Login request
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    /// User name (exact match)
    pub name: String,

    /// Password
    pub password: String,
}

/// Login response
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Whether the credentials matched
    pub success: bool,

    /// Failure reason
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Login endpoint
///
/// # Endpoint
///
/// ```text
/// POST /api/login
/// Content-Type: application/json
///
/// { "name": "al", "password": "x" }
/// ```
///
/// # Response
///
/// `200 {"success": true}` when the pair matches, otherwise
/// `401 {"success": false, "message": "Invalid credentials"}`.
///
/// # Errors
///
/// - `400 Bad Request`: Body unreadable or a field missing
/// - `500 Internal Server Error`: Storage failure
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> ApiResult<(StatusCode, Json<LoginResponse>)> {
    let user = state.users.find_by_name(&req.name).await?;

    let valid = match user {
        Some(user) => match state.hasher.verify(&req.password, &user.password) {
            Ok(valid) => valid,
            // Stored under a different scheme; cannot match
            Err(PasswordError::InvalidHash(reason)) => {
                tracing::warn!(user_id = user.id, %reason, "Stored password is not in the configured scheme");
                false
            }
            Err(e) => return Err(e.into()),
        },
        None => false,
    };

    if valid {
        tracing::info!(name = %req.name, "Login succeeded");
        Ok((
            StatusCode::OK,
            Json(LoginResponse {
                success: true,
                message: None,
            }),
        ))
    } else {
        tracing::warn!(name = %req.name, "Login failed");
        Ok((
            StatusCode::UNAUTHORIZED,
            Json(LoginResponse {
                success: false,
                message: Some("Invalid credentials".to_string()),
            }),
        ))
    }
}
