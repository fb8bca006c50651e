use crate::models::{DbProfessional, DbProfessionalSummary};
use chrono::Utc;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_professional(
    pool: &Pool<Postgres>,
    user_id: Uuid,
    specialty: &str,
    description: &str,
    education: &[String],
    price_per_hour: f64,
    categories: &[String],
) -> Result<DbProfessional> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!("Creating professional: id={}, user_id={}", id, user_id);

    let professional = sqlx::query_as::<_, DbProfessional>(
        r#"
        INSERT INTO professionals
            (id, user_id, specialty, description, education, price_per_hour, categories, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING id, user_id, specialty, description, education, price_per_hour,
                  categories, rating, reviews_count, created_at
        "#,
    )
    .bind(id)
    .bind(user_id)
    .bind(specialty)
    .bind(description)
    .bind(education)
    .bind(price_per_hour)
    .bind(categories)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(professional)
}

pub async fn get_professional_by_id(
    pool: &Pool<Postgres>,
    id: Uuid,
) -> Result<Option<DbProfessional>> {
    let professional = sqlx::query_as::<_, DbProfessional>(
        r#"
        SELECT id, user_id, specialty, description, education, price_per_hour,
               categories, rating, reviews_count, created_at
        FROM professionals
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(professional)
}

pub async fn get_professional_by_user_id(
    pool: &Pool<Postgres>,
    user_id: Uuid,
) -> Result<Option<DbProfessional>> {
    let professional = sqlx::query_as::<_, DbProfessional>(
        r#"
        SELECT id, user_id, specialty, description, education, price_per_hour,
               categories, rating, reviews_count, created_at
        FROM professionals
        WHERE user_id = $1
        "#,
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(professional)
}

/// Marketplace search. Every filter is optional; `NULL` binds disable the
/// corresponding predicate. The free-text term matches name or specialty,
/// case-insensitively.
pub async fn search_professionals(
    pool: &Pool<Postgres>,
    term: Option<&str>,
    category: Option<&str>,
    location: Option<&str>,
    min_price: Option<f64>,
    max_price: Option<f64>,
) -> Result<Vec<DbProfessionalSummary>> {
    let professionals = sqlx::query_as::<_, DbProfessionalSummary>(
        r#"
        SELECT pr.id, p.full_name, pr.specialty, p.location, pr.price_per_hour,
               pr.categories, pr.rating, pr.reviews_count
        FROM professionals pr
        JOIN profiles p ON p.id = pr.user_id
        WHERE ($1::TEXT IS NULL OR p.full_name ILIKE '%' || $1 || '%' OR pr.specialty ILIKE '%' || $1 || '%')
          AND ($2::TEXT IS NULL OR $2 = ANY(pr.categories))
          AND ($3::TEXT IS NULL OR p.location ILIKE '%' || $3 || '%')
          AND ($4::DOUBLE PRECISION IS NULL OR pr.price_per_hour >= $4)
          AND ($5::DOUBLE PRECISION IS NULL OR pr.price_per_hour <= $5)
        ORDER BY p.full_name ASC
        "#,
    )
    .bind(term)
    .bind(category)
    .bind(location)
    .bind(min_price)
    .bind(max_price)
    .fetch_all(pool)
    .await?;

    Ok(professionals)
}
