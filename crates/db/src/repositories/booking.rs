use crate::models::{DbBooking, DbBookingSummary};
use chrono::Utc;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

/// Reserves a slot and records the booking as one transaction.
///
/// The slot is claimed with a conditional update that only succeeds while
/// it is still available; zero affected rows means another client won the
/// race, and `Ok(None)` is returned without writing anything. Exactly one
/// booking can therefore exist per consumed slot.
pub async fn create_booking(
    pool: &Pool<Postgres>,
    user_id: Uuid,
    professional_id: Uuid,
    service_id: Uuid,
    time_slot_id: Uuid,
    notes: Option<&str>,
) -> Result<Option<DbBooking>> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let mut tx = pool.begin().await?;

    let reserved = sqlx::query(
        r#"
        UPDATE time_slots
        SET is_available = FALSE
        WHERE id = $1 AND professional_id = $2 AND is_available = TRUE
        "#,
    )
    .bind(time_slot_id)
    .bind(professional_id)
    .execute(&mut *tx)
    .await?;

    if reserved.rows_affected() == 0 {
        tx.rollback().await?;
        tracing::debug!("Slot {} already taken, booking rejected", time_slot_id);
        return Ok(None);
    }

    let booking = sqlx::query_as::<_, DbBooking>(
        r#"
        INSERT INTO bookings
            (id, user_id, professional_id, service_id, time_slot_id, status, notes, created_at)
        VALUES ($1, $2, $3, $4, $5, 'confirmed', $6, $7)
        RETURNING id, user_id, professional_id, service_id, time_slot_id, status, notes, created_at
        "#,
    )
    .bind(id)
    .bind(user_id)
    .bind(professional_id)
    .bind(service_id)
    .bind(time_slot_id)
    .bind(notes)
    .bind(now)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;

    Ok(Some(booking))
}

pub async fn get_booking_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbBooking>> {
    let booking = sqlx::query_as::<_, DbBooking>(
        r#"
        SELECT id, user_id, professional_id, service_id, time_slot_id, status, notes, created_at
        FROM bookings
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(booking)
}

pub async fn get_bookings_by_professional_id(
    pool: &Pool<Postgres>,
    professional_id: Uuid,
) -> Result<Vec<DbBooking>> {
    let bookings = sqlx::query_as::<_, DbBooking>(
        r#"
        SELECT id, user_id, professional_id, service_id, time_slot_id, status, notes, created_at
        FROM bookings
        WHERE professional_id = $1
        ORDER BY created_at DESC
        "#,
    )
    .bind(professional_id)
    .fetch_all(pool)
    .await?;

    Ok(bookings)
}

/// A client's bookings joined with the professional's name, the service,
/// and the reserved slot, newest first.
pub async fn get_booking_summaries_by_user_id(
    pool: &Pool<Postgres>,
    user_id: Uuid,
) -> Result<Vec<DbBookingSummary>> {
    let bookings = sqlx::query_as::<_, DbBookingSummary>(
        r#"
        SELECT b.id, p.full_name AS counterparty_name, s.name AS service_name,
               t.date, t.start_time, b.status, b.notes, b.created_at
        FROM bookings b
        JOIN professionals pr ON pr.id = b.professional_id
        JOIN profiles p ON p.id = pr.user_id
        JOIN services s ON s.id = b.service_id
        JOIN time_slots t ON t.id = b.time_slot_id
        WHERE b.user_id = $1
        ORDER BY b.created_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(bookings)
}

/// A professional's appointments joined with the client's name, the
/// service, and the reserved slot, newest first.
pub async fn get_booking_summaries_by_professional_id(
    pool: &Pool<Postgres>,
    professional_id: Uuid,
) -> Result<Vec<DbBookingSummary>> {
    let bookings = sqlx::query_as::<_, DbBookingSummary>(
        r#"
        SELECT b.id, p.full_name AS counterparty_name, s.name AS service_name,
               t.date, t.start_time, b.status, b.notes, b.created_at
        FROM bookings b
        JOIN profiles p ON p.id = b.user_id
        JOIN services s ON s.id = b.service_id
        JOIN time_slots t ON t.id = b.time_slot_id
        WHERE b.professional_id = $1
        ORDER BY b.created_at DESC
        "#,
    )
    .bind(professional_id)
    .fetch_all(pool)
    .await?;

    Ok(bookings)
}

pub async fn update_booking_status(
    pool: &Pool<Postgres>,
    id: Uuid,
    status: &str,
) -> Result<Option<DbBooking>> {
    let booking = sqlx::query_as::<_, DbBooking>(
        r#"
        UPDATE bookings
        SET status = $2
        WHERE id = $1
        RETURNING id, user_id, professional_id, service_id, time_slot_id, status, notes, created_at
        "#,
    )
    .bind(id)
    .bind(status)
    .fetch_optional(pool)
    .await?;

    Ok(booking)
}
