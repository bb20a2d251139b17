//! User endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::domain::user::User;
use crate::infrastructure::user::UserInput;

/// Request body for creating or updating a user. The id is never taken
/// from the body: storage assigns it on create and the path carries it
/// on update.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserApiRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub age: i32,
}

impl From<UserApiRequest> for UserInput {
    fn from(request: UserApiRequest) -> Self {
        Self {
            first_name: request.first_name,
            last_name: request.last_name,
            email: request.email,
            age: request.age,
        }
    }
}

/// User response body
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub age: i32,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().unwrap_or_default().to_string(),
            first_name: user.first_name().to_string(),
            last_name: user.last_name().to_string(),
            email: user.email().to_string(),
            age: user.age(),
        }
    }
}

/// POST /users
pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<UserApiRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    debug!(first_name = %request.first_name, last_name = %request.last_name, "creating user");

    let user = state
        .user_service
        .create(request.into())
        .await
        .map_err(ApiError::from)?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(&user))))
}

/// PUT /users/{id}
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UserApiRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    debug!(user_id = %id, "updating user");

    let user = state
        .user_service
        .update(&id, request.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Json(UserResponse::from(&user)))
}

/// GET /users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<UserResponse>, ApiError> {
    debug!(user_id = %id, "getting user");

    let user = state.user_service.find(&id).await.map_err(ApiError::from)?;

    Ok(Json(UserResponse::from(&user)))
}
