use axum::{
    extract::{Path, State},
    Json,
};

use crate::backend::Backend;
use crate::errors::AppError;
use crate::models::{JobApplication, JobFields, MessageResponse};
use crate::state::AppState;
use crate::validation::{first_error_message, validate_job_fields};

/// GET /api/jobs
pub async fn handle_list_jobs(
    State(state): State<AppState>,
) -> Result<Json<Vec<JobApplication>>, AppError> {
    Ok(Json(state.backend.list_jobs().await?))
}

/// POST /api/jobs
pub async fn handle_create_job(
    State(state): State<AppState>,
    Json(fields): Json<JobFields>,
) -> Result<Json<JobApplication>, AppError> {
    if let Some(message) = first_error_message(&validate_job_fields(&fields, true)) {
        return Err(AppError::Validation(message));
    }
    Ok(Json(state.backend.create_job(&fields).await?))
}

/// PUT /api/jobs/:id
pub async fn handle_update_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(fields): Json<JobFields>,
) -> Result<Json<JobApplication>, AppError> {
    if let Some(message) = first_error_message(&validate_job_fields(&fields, false)) {
        return Err(AppError::Validation(message));
    }
    Ok(Json(state.backend.update_job(&id, &fields).await?))
}

/// DELETE /api/jobs/:id
pub async fn handle_delete_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    Ok(Json(state.backend.delete_job(&id).await?))
}
