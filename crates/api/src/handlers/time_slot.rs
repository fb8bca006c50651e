use axum::{
    extract::{Path, Query, State},
    Json,
};
use bookpro_core::{
    errors::BookingError,
    models::time_slot::{
        GenerateTimeSlotsRequest, GenerateTimeSlotsResponse, ListTimeSlotsResponse,
        TimeSlotResponse,
    },
    slots,
};
use chrono::NaiveDate;
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    middleware::{auth::AuthUser, error_handling::AppError},
    ApiState,
};

#[derive(Debug, Deserialize)]
pub struct SlotsQuery {
    pub date: NaiveDate,
}

/// Cuts the posted working window into slots and batch-persists them for
/// the calling professional. A window shorter than one slot creates
/// nothing and is reported as zero, not an error.
#[axum::debug_handler]
pub async fn generate_time_slots(
    State(state): State<Arc<ApiState>>,
    AuthUser(identity): AuthUser,
    Json(payload): Json<GenerateTimeSlotsRequest>,
) -> Result<Json<GenerateTimeSlotsResponse>, AppError> {
    let professional = bookpro_db::repositories::professional::get_professional_by_user_id(
        &state.db_pool,
        identity.user_id,
    )
    .await
    .map_err(BookingError::Database)?
    .ok_or_else(|| BookingError::NotFound("Professional profile not found".to_string()))?;

    let windows = slots::generate_slots(payload.start_time, payload.end_time, payload.slot_duration)?;

    if windows.is_empty() {
        return Ok(Json(GenerateTimeSlotsResponse { created: 0 }));
    }

    let starts: Vec<_> = windows.iter().map(|w| w.start).collect();
    let ends: Vec<_> = windows.iter().map(|w| w.end).collect();

    let created = bookpro_db::repositories::time_slot::create_time_slots(
        &state.db_pool,
        professional.id,
        payload.date,
        &starts,
        &ends,
    )
    .await
    .map_err(BookingError::Database)?;

    Ok(Json(GenerateTimeSlotsResponse {
        created: created as usize,
    }))
}

/// Lists a professional's slots for one date, ordered by start time, with
/// availability flags. Re-fetching after a reservation reflects the
/// flipped flag.
#[axum::debug_handler]
pub async fn list_time_slots(
    State(state): State<Arc<ApiState>>,
    Path(professional_id): Path<Uuid>,
    Query(query): Query<SlotsQuery>,
) -> Result<Json<ListTimeSlotsResponse>, AppError> {
    let professional = bookpro_db::repositories::professional::get_professional_by_id(
        &state.db_pool,
        professional_id,
    )
    .await
    .map_err(BookingError::Database)?
    .ok_or_else(|| {
        BookingError::NotFound(format!(
            "Professional with ID {} not found",
            professional_id
        ))
    })?;

    let time_slots = bookpro_db::repositories::time_slot::get_time_slots_by_date(
        &state.db_pool,
        professional.id,
        query.date,
    )
    .await
    .map_err(BookingError::Database)?;

    let response = ListTimeSlotsResponse {
        date: query.date,
        slots: time_slots
            .into_iter()
            .map(|slot| TimeSlotResponse {
                id: slot.id,
                start_time: slot.start_time,
                end_time: slot.end_time,
                is_available: slot.is_available,
            })
            .collect(),
    };

    Ok(Json(response))
}
