use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::CurrentUser;
use crate::errors::AppError;
use crate::extract::{AppJson, AppPath};
use crate::jobs::analytics::{compute_funnel_report, FunnelReport};
use crate::jobs::transition::move_job;
use crate::jobs::view::{self, BoardColumn, DashboardView, StatusFilter, ViewMode};
use crate::models::{JobApplication, JobStatus, JobUpdate, NewJobApplication};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct FilterQuery {
    #[serde(default)]
    pub search: String,
    pub status: Option<String>,
}

impl FilterQuery {
    fn status_filter(&self) -> Result<StatusFilter, AppError> {
        self.status
            .as_deref()
            .map_or(Ok(StatusFilter::All), StatusFilter::parse)
    }
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Job application {id} not found"))
}

/// GET /api/v1/jobs
pub async fn handle_list_jobs(
    State(state): State<AppState>,
    _user: CurrentUser,
    Query(params): Query<FilterQuery>,
) -> Result<Json<Vec<JobApplication>>, AppError> {
    let status = params.status_filter()?;
    let store = state.jobs.read().await;
    let rows = view::filter_jobs(store.list(), &params.search, status)
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(rows))
}

/// POST /api/v1/jobs
pub async fn handle_create_job(
    State(state): State<AppState>,
    _user: CurrentUser,
    AppJson(req): AppJson<NewJobApplication>,
) -> Result<(StatusCode, Json<JobApplication>), AppError> {
    let job = state.jobs.write().await.add(req)?;
    Ok((StatusCode::CREATED, Json(job)))
}

/// GET /api/v1/jobs/:id
pub async fn handle_get_job(
    State(state): State<AppState>,
    _user: CurrentUser,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<JobApplication>, AppError> {
    let job = state.jobs.read().await.get_by_id(id).cloned();
    job.map(Json).ok_or_else(|| not_found(id))
}

/// PATCH /api/v1/jobs/:id
pub async fn handle_update_job(
    State(state): State<AppState>,
    _user: CurrentUser,
    AppPath(id): AppPath<Uuid>,
    AppJson(req): AppJson<JobUpdate>,
) -> Result<Json<JobApplication>, AppError> {
    let updated = state.jobs.write().await.update(id, req)?;
    updated.map(Json).ok_or_else(|| not_found(id))
}

/// DELETE /api/v1/jobs/:id
pub async fn handle_delete_job(
    State(state): State<AppState>,
    _user: CurrentUser,
    AppPath(id): AppPath<Uuid>,
) -> Result<StatusCode, AppError> {
    if state.jobs.write().await.delete(id)? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}

#[derive(Deserialize)]
pub struct MoveRequest {
    pub status: JobStatus,
}

#[derive(Serialize)]
pub struct MoveResponse {
    pub moved: bool,
    pub job: JobApplication,
}

/// POST /api/v1/jobs/:id/move
/// Drop of a card onto a board column.
pub async fn handle_move_job(
    State(state): State<AppState>,
    _user: CurrentUser,
    AppPath(id): AppPath<Uuid>,
    AppJson(req): AppJson<MoveRequest>,
) -> Result<Json<MoveResponse>, AppError> {
    let outcome = move_job(&mut *state.jobs.write().await, id, req.status)?;
    Ok(Json(MoveResponse {
        moved: outcome.moved(),
        job: outcome.into_job(),
    }))
}

/// GET /api/v1/board
pub async fn handle_board(
    State(state): State<AppState>,
    _user: CurrentUser,
    Query(params): Query<FilterQuery>,
) -> Result<Json<Vec<BoardColumn>>, AppError> {
    let status = params.status_filter()?;
    let store = state.jobs.read().await;
    let filtered = view::filter_jobs(store.list(), &params.search, status);
    Ok(Json(view::board_columns(&filtered)))
}

/// GET /api/v1/dashboard
/// The filtered subset in whichever presentation mode is active.
pub async fn handle_dashboard(
    State(state): State<AppState>,
    _user: CurrentUser,
    Query(params): Query<FilterQuery>,
) -> Result<Json<DashboardView>, AppError> {
    let status = params.status_filter()?;
    let mode = *state.view_mode.read().await;
    let store = state.jobs.read().await;
    let filtered = view::filter_jobs(store.list(), &params.search, status);
    Ok(Json(view::render(mode, &filtered)))
}

#[derive(Serialize, Deserialize)]
pub struct ViewModeBody {
    pub mode: ViewMode,
}

/// GET /api/v1/view
pub async fn handle_get_view(
    State(state): State<AppState>,
    _user: CurrentUser,
) -> Json<ViewModeBody> {
    let mode = *state.view_mode.read().await;
    Json(ViewModeBody { mode })
}

/// PUT /api/v1/view
pub async fn handle_set_view(
    State(state): State<AppState>,
    _user: CurrentUser,
    AppJson(req): AppJson<ViewModeBody>,
) -> Json<ViewModeBody> {
    *state.view_mode.write().await = req.mode;
    Json(req)
}

/// GET /api/v1/analytics
pub async fn handle_analytics(
    State(state): State<AppState>,
    _user: CurrentUser,
) -> Json<FunnelReport> {
    let store = state.jobs.read().await;
    Json(compute_funnel_report(store.list()))
}
