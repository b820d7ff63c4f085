use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::request::Parts};

use crate::errors::AppError;
use crate::models::User;
use crate::state::AppState;

/// Gate for dashboard routes: resolves the session user or rejects with 401.
pub struct CurrentUser(pub User);

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        state
            .auth
            .current_user()?
            .map(CurrentUser)
            .ok_or(AppError::Unauthorized)
    }
}
