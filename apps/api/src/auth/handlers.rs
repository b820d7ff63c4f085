use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;

use crate::auth::CurrentUser;
use crate::errors::AppError;
use crate::extract::AppJson;
use crate::models::User;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
}

/// POST /api/v1/auth/login
pub async fn handle_login(
    State(state): State<AppState>,
    AppJson(req): AppJson<LoginRequest>,
) -> Result<Json<User>, AppError> {
    let user = state.auth.login(&req.email, &req.password).await?;
    Ok(Json(user))
}

/// POST /api/v1/auth/register
pub async fn handle_register(
    State(state): State<AppState>,
    AppJson(req): AppJson<RegisterRequest>,
) -> Result<(StatusCode, Json<User>), AppError> {
    let user = state
        .auth
        .register(&req.email, &req.password, &req.name)
        .await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// POST /api/v1/auth/logout
/// Ends the session and drops the saved applications, as a fresh start would.
pub async fn handle_logout(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    state.auth.logout()?;
    state.jobs.write().await.reset()?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/auth/me
pub async fn handle_me(CurrentUser(user): CurrentUser) -> Json<User> {
    Json(user)
}
