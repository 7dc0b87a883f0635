//! User management handlers (admin only)

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::error::AppResult;
use crate::middleware::{require_admin, CurrentUser};
use crate::services::users::{CreateUserInput, UpdateUserInput};
use crate::services::UserService;
use crate::AppState;
use shared::models::SafeUser;

pub async fn list_users(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> AppResult<Json<Vec<SafeUser>>> {
    require_admin(&user)?;

    let service = UserService::new(state.db.clone());
    Ok(Json(service.list().await?))
}

pub async fn create_user(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(input): Json<CreateUserInput>,
) -> AppResult<(StatusCode, Json<SafeUser>)> {
    require_admin(&user)?;

    let service = UserService::new(state.db.clone());
    let created = service.create(input).await?;

    tracing::info!(user_id = %created.id, by = %user.user_id, "User created");
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn get_user(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<SafeUser>> {
    require_admin(&user)?;

    let service = UserService::new(state.db.clone());
    Ok(Json(service.get(id).await?))
}

pub async fn update_user(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
    Json(input): Json<UpdateUserInput>,
) -> AppResult<Json<SafeUser>> {
    require_admin(&user)?;

    let service = UserService::new(state.db.clone());
    Ok(Json(service.update(id, input).await?))
}

pub async fn delete_user(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    require_admin(&user)?;

    let service = UserService::new(state.db.clone());
    service.delete(id).await?;

    tracing::info!(user_id = %id, by = %user.user_id, "User deleted");
    Ok(StatusCode::NO_CONTENT)
}
