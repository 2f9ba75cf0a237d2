use axum::{extract::State, Json};

use crate::backend::Backend;
use crate::errors::AppError;
use crate::models::{PrepRequest, PrepResponse, ResumeRequest, ResumeResponse};
use crate::state::AppState;

/// POST /api/ai/resume
pub async fn handle_resume(
    State(state): State<AppState>,
    Json(req): Json<ResumeRequest>,
) -> Result<Json<ResumeResponse>, AppError> {
    let bullet_points = state
        .backend
        .generate_resume(&req.job_role, &req.experience)
        .await?;
    Ok(Json(ResumeResponse { bullet_points }))
}

/// POST /api/ai/prep
pub async fn handle_prep(
    State(state): State<AppState>,
    Json(req): Json<PrepRequest>,
) -> Result<Json<PrepResponse>, AppError> {
    let prep_plan = state
        .backend
        .generate_prep_plan(&req.job_role, &req.company)
        .await?;
    Ok(Json(PrepResponse { prep_plan }))
}
