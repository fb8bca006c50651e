use axum::{extract::State, http::HeaderMap, Json};
use bookpro_core::{
    errors::BookingError,
    models::profile::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, Role},
};
use std::sync::Arc;

use crate::{
    middleware::{auth, error_handling::AppError},
    ApiState,
};

#[axum::debug_handler]
pub async fn register(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<RegisterRequest>,
) -> Result<Json<RegisterResponse>, AppError> {
    if payload.email.trim().is_empty() || !payload.email.contains('@') {
        return Err(AppError(BookingError::Validation(
            "A valid email address is required".to_string(),
        )));
    }
    if payload.password.is_empty() {
        return Err(AppError(BookingError::Validation(
            "Password must not be empty".to_string(),
        )));
    }
    if payload.full_name.trim().is_empty() {
        return Err(AppError(BookingError::Validation(
            "Full name must not be empty".to_string(),
        )));
    }

    // Reject duplicate registrations up front rather than surfacing a
    // constraint violation
    let existing =
        bookpro_db::repositories::profile::get_profile_by_email(&state.db_pool, &payload.email)
            .await
            .map_err(BookingError::Database)?;
    if existing.is_some() {
        return Err(AppError(BookingError::Conflict(
            "Email is already registered".to_string(),
        )));
    }

    let password_hash = auth::hash_password(&payload.password)?;

    let db_profile = bookpro_db::repositories::profile::create_profile(
        &state.db_pool,
        &payload.email,
        &password_hash,
        &payload.full_name,
        &payload.role.to_string(),
    )
    .await
    .map_err(BookingError::Database)?;

    // Registration doubles as login: issue a session immediately
    let token = auth::generate_session_token();
    bookpro_db::repositories::session::create_session(&state.db_pool, db_profile.id, &token)
        .await
        .map_err(BookingError::Database)?;

    let response = RegisterResponse {
        id: db_profile.id,
        email: db_profile.email,
        full_name: db_profile.full_name,
        role: payload.role,
        token,
    };

    Ok(Json(response))
}

#[axum::debug_handler]
pub async fn login(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let profile = bookpro_db::repositories::profile::verify_credentials(
        &state.db_pool,
        &payload.email,
        &payload.password,
    )
    .await
    .map_err(BookingError::Database)?
    .ok_or_else(|| {
        AppError(BookingError::Authentication(
            "Invalid email or password".to_string(),
        ))
    })?;

    let role = profile
        .role
        .parse::<Role>()
        .map_err(|e| AppError(BookingError::Internal(e.into())))?;

    let token = auth::generate_session_token();
    bookpro_db::repositories::session::create_session(&state.db_pool, profile.id, &token)
        .await
        .map_err(BookingError::Database)?;

    let response = LoginResponse {
        id: profile.id,
        full_name: profile.full_name,
        role,
        token,
    };

    Ok(Json(response))
}

#[axum::debug_handler]
pub async fn logout(
    State(state): State<Arc<ApiState>>,
    headers: HeaderMap,
) -> Result<Json<serde_json::Value>, AppError> {
    let token = auth::bearer_token(&headers).ok_or_else(|| {
        AppError(BookingError::Authentication(
            "Missing bearer token".to_string(),
        ))
    })?;

    bookpro_db::repositories::session::delete_session(&state.db_pool, token)
        .await
        .map_err(BookingError::Database)?;

    Ok(Json(serde_json::json!({ "ok": true })))
}
