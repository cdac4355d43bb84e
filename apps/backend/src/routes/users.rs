//! User registration and status endpoints

use axum::{extract::State, Extension, Json};

use crate::error::{ApiError, Result};
use crate::models::{RegisterUserRequest, RegisterUserResponse, UserStatusResponse};
use crate::routes::auth::AuthenticatedUser;
use crate::services::auth::{generate_token, hash_token};
use crate::AppState;

/// POST /api/users/register
/// Creates a new user and returns its token; only the token hash is stored
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterUserRequest>,
) -> Result<Json<RegisterUserResponse>> {
    let name = payload.name.trim();
    if name.is_empty() {
        return Err(ApiError::BadRequest("Name is required".to_string()));
    }

    let token = generate_token();
    let user = state.db.create_user(name, &hash_token(&token)).await?;

    tracing::info!("Registered new user: {}", user.id);

    Ok(Json(RegisterUserResponse {
        user_id: user.id,
        token,
    }))
}

/// GET /api/users/me
pub async fn me(
    Extension(auth): Extension<AuthenticatedUser>,
    State(state): State<AppState>,
) -> Result<Json<UserStatusResponse>> {
    let user = state
        .db
        .get_user(auth.user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    Ok(Json(UserStatusResponse {
        user_id: user.id,
        name: user.name,
        last_seen_at: user.last_seen_at,
    }))
}
