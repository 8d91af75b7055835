/// User endpoints
///
/// - `GET    /api/users` - List users, passwords included as stored
/// - `POST   /api/users` - Create a user
/// - `DELETE /api/users/:id` - Delete a user
///
/// The listing returns the stored password column verbatim. Under the default
/// plaintext scheme that exposes every password; switch `PASSWORD_SCHEME` to
/// `argon2` to return hashes instead.

use crate::{
    app::AppState,
    error::ApiResult,
    extract::{RecordId, ValidatedJson},
    routes::SuccessResponse,
};
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use trackwise_shared::models::user::{CreateUser, User};
use validator::Validate;

/// Create user request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    /// Login name, unique
    #[validate(length(min = 1, max = 80, message = "Name must be 1-80 characters"))]
    pub name: String,

    /// Password
    #[validate(length(min = 1, max = 120, message = "Password must be 1-120 characters"))]
    pub password: String,
}

/// User as returned by the listing
#[derive(Debug, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: i64,
    pub name: String,
    pub password: String,
}

impl From<User> for UserRecord {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            password: user.password,
        }
    }
}

/// User as returned after creation
#[derive(Debug, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: i64,
    pub name: String,
}

/// Lists all users
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<UserRecord>>> {
    let users = state.users.list().await?;
    Ok(Json(users.into_iter().map(UserRecord::from).collect()))
}

/// Creates a user
///
/// # Errors
///
/// - `400 Bad Request`: Missing or invalid field
/// - `409 Conflict`: Name already taken (no row is written)
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateUserRequest>,
) -> ApiResult<Json<UserSummary>> {
    let password = state.hasher.hash(&req.password)?;

    let user = state
        .users
        .create(CreateUser {
            name: req.name,
            password,
        })
        .await?;

    tracing::info!(user_id = user.id, name = %user.name, "Created user");

    Ok(Json(UserSummary {
        id: user.id,
        name: user.name,
    }))
}

/// Deletes a user
///
/// # Errors
///
/// - `404 Not Found`: No user with this id
pub async fn delete_user(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> ApiResult<Json<SuccessResponse>> {
    state.users.delete(id).await?;
    tracing::info!(user_id = id, "Deleted user");
    Ok(Json(SuccessResponse::ok()))
}
