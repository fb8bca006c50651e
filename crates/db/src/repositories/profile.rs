use crate::models::DbProfile;
use argon2::{Argon2, PasswordVerifier};
use chrono::Utc;
use eyre::{eyre, Result};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_profile(
    pool: &Pool<Postgres>,
    email: &str,
    password_hash: &str,
    full_name: &str,
    role: &str,
) -> Result<DbProfile> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!("Creating profile: id={}, email={}, role={}", id, email, role);

    let profile = sqlx::query_as::<_, DbProfile>(
        r#"
        INSERT INTO profiles (id, email, password_hash, full_name, role, created_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, email, password_hash, full_name, role, location, phone, created_at
        "#,
    )
    .bind(id)
    .bind(email)
    .bind(password_hash)
    .bind(full_name)
    .bind(role)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(profile)
}

pub async fn get_profile_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbProfile>> {
    let profile = sqlx::query_as::<_, DbProfile>(
        r#"
        SELECT id, email, password_hash, full_name, role, location, phone, created_at
        FROM profiles
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(profile)
}

pub async fn get_profile_by_email(pool: &Pool<Postgres>, email: &str) -> Result<Option<DbProfile>> {
    let profile = sqlx::query_as::<_, DbProfile>(
        r#"
        SELECT id, email, password_hash, full_name, role, location, phone, created_at
        FROM profiles
        WHERE email = $1
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(profile)
}

/// Patches the contact fields set during professional onboarding.
pub async fn update_contact_details(
    pool: &Pool<Postgres>,
    id: Uuid,
    location: Option<&str>,
    phone: Option<&str>,
) -> Result<DbProfile> {
    let profile = get_profile_by_id(pool, id)
        .await?
        .ok_or_else(|| eyre!("Profile not found"))?;

    let location = location.or(profile.location.as_deref());
    let phone = phone.or(profile.phone.as_deref());

    let updated = sqlx::query_as::<_, DbProfile>(
        r#"
        UPDATE profiles
        SET location = $2, phone = $3
        WHERE id = $1
        RETURNING id, email, password_hash, full_name, role, location, phone, created_at
        "#,
    )
    .bind(id)
    .bind(location)
    .bind(phone)
    .fetch_one(pool)
    .await?;

    Ok(updated)
}

/// Checks a login attempt against the stored argon2 hash. Returns the
/// profile on success, `None` when the email is unknown or the password
/// does not match.
pub async fn verify_credentials(
    pool: &Pool<Postgres>,
    email: &str,
    password: &str,
) -> Result<Option<DbProfile>> {
    let Some(profile) = get_profile_by_email(pool, email).await? else {
        return Ok(None);
    };

    let parsed_hash = argon2::PasswordHash::new(&profile.password_hash)
        .map_err(|e| eyre!("Invalid password hash: {}", e))?;
    let is_valid = Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok();

    Ok(is_valid.then_some(profile))
}
