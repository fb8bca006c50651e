use crate::models::DbTimeSlot;
use chrono::{NaiveDate, NaiveTime, Utc};
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

/// Batch-persists generated slots for one professional and date, all
/// available. Returns the number of rows created.
pub async fn create_time_slots(
    pool: &Pool<Postgres>,
    professional_id: Uuid,
    date: NaiveDate,
    starts: &[NaiveTime],
    ends: &[NaiveTime],
) -> Result<u64> {
    let now = Utc::now();

    tracing::debug!(
        "Creating {} time slots: professional_id={}, date={}",
        starts.len(),
        professional_id,
        date
    );

    let result = sqlx::query(
        r#"
        INSERT INTO time_slots (id, professional_id, date, start_time, end_time, is_available, created_at)
        SELECT gen_random_uuid(), $1, $2, slot.start_time, slot.end_time, TRUE, $5
        FROM UNNEST($3::TIME[], $4::TIME[]) AS slot(start_time, end_time)
        "#,
    )
    .bind(professional_id)
    .bind(date)
    .bind(starts)
    .bind(ends)
    .bind(now)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

pub async fn get_time_slots_by_date(
    pool: &Pool<Postgres>,
    professional_id: Uuid,
    date: NaiveDate,
) -> Result<Vec<DbTimeSlot>> {
    let time_slots = sqlx::query_as::<_, DbTimeSlot>(
        r#"
        SELECT id, professional_id, date, start_time, end_time, is_available, created_at
        FROM time_slots
        WHERE professional_id = $1 AND date = $2
        ORDER BY start_time ASC
        "#,
    )
    .bind(professional_id)
    .bind(date)
    .fetch_all(pool)
    .await?;

    Ok(time_slots)
}

pub async fn get_time_slot_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbTimeSlot>> {
    let time_slot = sqlx::query_as::<_, DbTimeSlot>(
        r#"
        SELECT id, professional_id, date, start_time, end_time, is_available, created_at
        FROM time_slots
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(time_slot)
}
