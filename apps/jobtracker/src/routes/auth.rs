use axum::{extract::State, http::HeaderMap, Json};

use crate::backend::Backend;
use crate::errors::AppError;
use crate::models::{AuthResponse, LoginRequest, SignupRequest, VerifyResponse};
use crate::state::AppState;
use crate::validation::require_text;

/// POST /api/auth/login
pub async fn handle_login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    let response = state.backend.login(&req.email, &req.password).await?;
    Ok(Json(response))
}

/// POST /api/auth/signup
pub async fn handle_signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    for (label, value) in [
        ("Name", &req.name),
        ("Email", &req.email),
        ("Password", &req.password),
    ] {
        require_text(label, value).map_err(|e| AppError::Validation(e.to_string()))?;
    }

    let response = state
        .backend
        .signup(&req.name, &req.email, &req.password)
        .await?;
    Ok(Json(response))
}

/// GET /api/auth/verify
pub async fn handle_verify(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<VerifyResponse>, AppError> {
    let user = state.backend.verify_token(bearer_token(&headers)).await?;
    Ok(Json(VerifyResponse { user }))
}

/// The token from an `Authorization: Bearer <token>` header, if any.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(axum::http::header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
}
