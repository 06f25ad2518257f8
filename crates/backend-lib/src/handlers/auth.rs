// ============================
// crates/backend-lib/src/handlers/auth.rs
// ============================
//! Handlers for the authentication routes.
use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::error::AppError;
use crate::messages::{
    ChangePasswordRequest, LoginRequest, LoginResponse, RefreshRequest, RegisterRequest,
    StatusResponse, TokenResponse, ValidateResponse,
};
use crate::AppState;

/// Pull the token out of an `Authorization: Bearer <token>` header.
fn bearer_token(headers: &HeaderMap) -> Result<&str, AppError> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or(AppError::MissingToken)
}

pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<impl IntoResponse, AppError> {
    state.auth.register(&req.username, &req.password).await?;
    Ok((
        StatusCode::CREATED,
        Json(StatusResponse::new("registered")),
    ))
}

pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let (token, role) = state.auth.login(&req.username, &req.password).await?;
    Ok(Json(LoginResponse { token, role }))
}

pub async fn validate(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<ValidateResponse>, AppError> {
    let token = bearer_token(&headers)?;
    let username = state.auth.validate(token).await?;
    Ok(Json(ValidateResponse {
        status: "ok".to_string(),
        username,
    }))
}

pub async fn refresh(
    State(state): State<AppState>,
    Json(req): Json<RefreshRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    let token = state.auth.refresh(&req.token).await?;
    Ok(Json(TokenResponse { token }))
}

pub async fn change_password(
    State(state): State<AppState>,
    Json(req): Json<ChangePasswordRequest>,
) -> Result<Json<StatusResponse>, AppError> {
    state
        .auth
        .change_password(&req.username, &req.old_password, &req.new_password)
        .await?;
    Ok(Json(StatusResponse::new("password_changed")))
}
