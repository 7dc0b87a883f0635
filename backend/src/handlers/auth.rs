//! Authentication handlers

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::error::AppResult;
use crate::middleware::CurrentUser;
use crate::services::{auth::LoginResponse, AuthService, UserService};
use crate::AppState;
use shared::models::SafeUser;

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login endpoint handler
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let auth_service = AuthService::new(state.db.clone(), &state.config);
    let response = auth_service.login(&body.email, &body.password).await?;
    Ok(Json(response))
}

/// Profile of the authenticated user
pub async fn me(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> AppResult<Json<SafeUser>> {
    let service = UserService::new(state.db.clone());
    let profile = service.get(user.user_id).await?;
    Ok(Json(profile))
}
