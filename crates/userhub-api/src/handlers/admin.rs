//! Admin user management handlers.

use axum::Json;
use axum::extract::{Path, State};
use validator::Validate;

use userhub_core::error::AppError;
use userhub_entity::user::{CreateUser, UpdateUser};

use crate::dto::request::{CreateUserRequest, UpdateUserRequest};
use crate::dto::response::{ApiResponse, UserResponse};
use crate::error::ApiError;
use crate::extractors::AuthHeader;
use crate::state::AppState;

/// GET /api/admin/users
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<UserResponse>>>, ApiError> {
    let users = state.admin_user_service.list_users().await?;
    Ok(Json(ApiResponse::ok(
        users.into_iter().map(UserResponse::from).collect(),
    )))
}

/// GET /api/admin/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let user = state.admin_user_service.get_user(id).await?;
    Ok(Json(ApiResponse::ok(user.into())))
}

/// POST /api/admin/users
pub async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let user = state
        .admin_user_service
        .create_user(CreateUser {
            name: req.name,
            email: req.email,
        })
        .await?;
    Ok(Json(ApiResponse::ok(user.into())))
}

/// PUT /api/admin/users/{id}
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateUserRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let user = state
        .admin_user_service
        .update_user(
            id,
            UpdateUser {
                name: req.name,
                email: req.email,
            },
        )
        .await?;
    Ok(Json(ApiResponse::ok(user.into())))
}

/// DELETE /api/admin/users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    AuthHeader(auth): AuthHeader,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let removed = state.admin_user_service.delete_user(&auth, id).await?;
    Ok(Json(ApiResponse::ok(removed.into())))
}
