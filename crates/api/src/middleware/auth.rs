//! # Authentication Module
//!
//! This module provides authentication-related utilities for the BookPro
//! API: argon2 password hashing, opaque bearer-token session generation,
//! and the [`AuthUser`] extractor that resolves a request's session token
//! to an explicit [`Identity`] passed into handlers.

use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHasher,
};
use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap},
};
use bookpro_core::{
    errors::BookingError,
    models::profile::{Identity, Role},
};
use eyre::Result;
use rand::{distributions::Alphanumeric, Rng};
use std::sync::Arc;

use crate::{middleware::error_handling::AppError, ApiState};

/// Length of generated session tokens, in alphanumeric characters.
const SESSION_TOKEN_LEN: usize = 48;

/// Hashes a password using the Argon2 algorithm
///
/// Generates a random salt per password and returns the hash in PHC string
/// format (algorithm, version, parameters, salt, and hash).
pub fn hash_password(password: &str) -> Result<String> {
    // Generate a fresh, random salt
    let salt = SaltString::generate(&mut OsRng);

    // Create default Argon2 instance
    let argon2 = Argon2::default();

    // Hash the password with salt
    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| eyre::eyre!("Error hashing password: {}", e))?
        .to_string();

    Ok(password_hash)
}

/// Generates an opaque session token for a freshly authenticated profile.
pub fn generate_session_token() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(SESSION_TOKEN_LEN)
        .map(char::from)
        .collect()
}

/// Extracts the bearer token from an Authorization header, if present.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

/// The authenticated caller, resolved from the request's bearer token.
///
/// Rejects with an authentication error when the token is missing, unknown,
/// or expired. Handlers receive the caller as an explicit value rather than
/// reading ambient session state.
pub struct AuthUser(pub Identity);

#[axum::async_trait]
impl FromRequestParts<Arc<ApiState>> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<ApiState>,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers).ok_or_else(|| {
            AppError(BookingError::Authentication(
                "Missing bearer token".to_string(),
            ))
        })?;

        let profile =
            bookpro_db::repositories::session::get_profile_by_token(&state.db_pool, token)
                .await
                .map_err(BookingError::Database)?
                .ok_or_else(|| {
                    AppError(BookingError::Authentication(
                        "Invalid or expired session".to_string(),
                    ))
                })?;

        let role = profile
            .role
            .parse::<Role>()
            .map_err(|e| AppError(BookingError::Internal(e.into())))?;

        Ok(AuthUser(Identity {
            user_id: profile.id,
            role,
        }))
    }
}
