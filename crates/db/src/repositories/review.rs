use crate::models::{DbReview, DbReviewSummary};
use chrono::Utc;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

/// Inserts a review and refreshes the professional's aggregate rating and
/// review count in the same transaction, so the public profile never shows
/// a stale pair.
pub async fn create_review(
    pool: &Pool<Postgres>,
    user_id: Uuid,
    professional_id: Uuid,
    booking_id: Uuid,
    rating: i32,
    comment: &str,
) -> Result<DbReview> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let mut tx = pool.begin().await?;

    let review = sqlx::query_as::<_, DbReview>(
        r#"
        INSERT INTO reviews (id, user_id, professional_id, booking_id, rating, comment, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id, user_id, professional_id, booking_id, rating, comment, created_at
        "#,
    )
    .bind(id)
    .bind(user_id)
    .bind(professional_id)
    .bind(booking_id)
    .bind(rating)
    .bind(comment)
    .bind(now)
    .fetch_one(&mut *tx)
    .await?;

    sqlx::query(
        r#"
        UPDATE professionals
        SET rating = (SELECT AVG(rating) FROM reviews WHERE professional_id = $1),
            reviews_count = (SELECT COUNT(*) FROM reviews WHERE professional_id = $1)
        WHERE id = $1
        "#,
    )
    .bind(professional_id)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    Ok(review)
}

pub async fn get_reviews_by_professional_id(
    pool: &Pool<Postgres>,
    professional_id: Uuid,
) -> Result<Vec<DbReviewSummary>> {
    let reviews = sqlx::query_as::<_, DbReviewSummary>(
        r#"
        SELECT r.id, p.full_name AS reviewer_name, r.rating, r.comment, r.created_at
        FROM reviews r
        JOIN profiles p ON p.id = r.user_id
        WHERE r.professional_id = $1
        ORDER BY r.created_at DESC
        "#,
    )
    .bind(professional_id)
    .fetch_all(pool)
    .await?;

    Ok(reviews)
}
