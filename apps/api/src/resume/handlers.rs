use axum::{
    extract::{Multipart, State},
    Json,
};

use crate::auth::CurrentUser;
use crate::errors::AppError;
use crate::resume::{ResumeAnalysis, ResumeUpload};
use crate::state::AppState;

/// Multipart field carrying the resume file.
const RESUME_FIELD: &str = "resume";

/// POST /api/v1/resume/analyze
pub async fn handle_analyze(
    State(state): State<AppState>,
    _user: CurrentUser,
    mut multipart: Multipart,
) -> Result<Json<ResumeAnalysis>, AppError> {
    let mut upload = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed upload: {e}")))?
    {
        if field.name() != Some(RESUME_FIELD) {
            continue;
        }
        let file_name = field.file_name().unwrap_or_default().to_string();
        let content_type = field.content_type().map(str::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Malformed upload: {e}")))?;
        upload = Some(ResumeUpload {
            file_name,
            content_type,
            size_bytes: bytes.len(),
        });
    }

    let upload = upload.ok_or_else(|| {
        AppError::Validation("No resume uploaded: please upload a resume first".to_string())
    })?;
    let analysis = state.analyzer.analyze(&upload).await?;
    Ok(Json(analysis))
}
