use crate::models::{DbProfile, DbSession};
use chrono::{Duration, Utc};
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

/// Sessions outlive browser restarts but not a month of inactivity.
const SESSION_TTL_DAYS: i64 = 30;

pub async fn create_session(pool: &Pool<Postgres>, user_id: Uuid, token: &str) -> Result<DbSession> {
    let now = Utc::now();
    let expires_at = now + Duration::days(SESSION_TTL_DAYS);

    let session = sqlx::query_as::<_, DbSession>(
        r#"
        INSERT INTO sessions (token, user_id, created_at, expires_at)
        VALUES ($1, $2, $3, $4)
        RETURNING token, user_id, created_at, expires_at
        "#,
    )
    .bind(token)
    .bind(user_id)
    .bind(now)
    .bind(expires_at)
    .fetch_one(pool)
    .await?;

    Ok(session)
}

/// Resolves a bearer token to its profile. Expired tokens resolve to `None`.
pub async fn get_profile_by_token(pool: &Pool<Postgres>, token: &str) -> Result<Option<DbProfile>> {
    let profile = sqlx::query_as::<_, DbProfile>(
        r#"
        SELECT p.id, p.email, p.password_hash, p.full_name, p.role, p.location, p.phone, p.created_at
        FROM sessions s
        JOIN profiles p ON p.id = s.user_id
        WHERE s.token = $1 AND s.expires_at > NOW()
        "#,
    )
    .bind(token)
    .fetch_optional(pool)
    .await?;

    Ok(profile)
}

pub async fn delete_session(pool: &Pool<Postgres>, token: &str) -> Result<()> {
    sqlx::query(
        r#"
        DELETE FROM sessions
        WHERE token = $1
        "#,
    )
    .bind(token)
    .execute(pool)
    .await?;

    Ok(())
}
