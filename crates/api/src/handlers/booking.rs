use axum::{
    extract::{Path, State},
    Json,
};
use bookpro_core::{
    errors::BookingError,
    models::{
        booking::{
            BookingStatus, BookingSummary, CreateBookingRequest, CreateBookingResponse,
            ListBookingsResponse, UpdateBookingResponse,
        },
        profile::Role,
    },
};
use bookpro_db::models::DbBookingSummary;
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    middleware::{auth::AuthUser, error_handling::AppError},
    ApiState,
};

fn to_summary(row: DbBookingSummary) -> Result<BookingSummary, AppError> {
    let status = row
        .status
        .parse::<BookingStatus>()
        .map_err(|e| AppError(BookingError::Internal(e.into())))?;

    Ok(BookingSummary {
        id: row.id,
        counterparty_name: row.counterparty_name,
        service_name: row.service_name,
        date: row.date,
        start_time: row.start_time,
        status,
        notes: row.notes,
        created_at: row.created_at,
    })
}

/// Reserves a slot for the authenticated client.
///
/// The service and slot must both exist under the named professional. The
/// slot is claimed with a conditional update inside one transaction, so of
/// two concurrent attempts on the same slot exactly one succeeds; the
/// loser receives a conflict error.
#[axum::debug_handler]
pub async fn create_booking(
    State(state): State<Arc<ApiState>>,
    AuthUser(identity): AuthUser,
    Json(payload): Json<CreateBookingRequest>,
) -> Result<Json<CreateBookingResponse>, AppError> {
    let service =
        bookpro_db::repositories::service::get_service_by_id(&state.db_pool, payload.service_id)
            .await
            .map_err(BookingError::Database)?
            .filter(|service| service.professional_id == payload.professional_id)
            .ok_or_else(|| {
                BookingError::NotFound(format!(
                    "Service with ID {} not found for this professional",
                    payload.service_id
                ))
            })?;

    let slot = bookpro_db::repositories::time_slot::get_time_slot_by_id(
        &state.db_pool,
        payload.time_slot_id,
    )
    .await
    .map_err(BookingError::Database)?
    .filter(|slot| slot.professional_id == payload.professional_id)
    .ok_or_else(|| {
        BookingError::NotFound(format!(
            "Time slot with ID {} not found for this professional",
            payload.time_slot_id
        ))
    })?;

    if !slot.is_available {
        return Err(AppError(BookingError::Conflict(
            "Time slot is no longer available".to_string(),
        )));
    }

    let booking = bookpro_db::repositories::booking::create_booking(
        &state.db_pool,
        identity.user_id,
        payload.professional_id,
        service.id,
        slot.id,
        payload.notes.as_deref(),
    )
    .await
    .map_err(BookingError::Database)?
    // The conditional update lost the race between our availability check
    // and the reservation
    .ok_or_else(|| {
        BookingError::Conflict("Time slot is no longer available".to_string())
    })?;

    let status = booking
        .status
        .parse::<BookingStatus>()
        .map_err(|e| AppError(BookingError::Internal(e.into())))?;

    Ok(Json(CreateBookingResponse {
        id: booking.id,
        status,
        created_at: booking.created_at,
    }))
}

/// The booking's client cancels it. The consumed slot stays unavailable.
#[axum::debug_handler]
pub async fn cancel_booking(
    State(state): State<Arc<ApiState>>,
    AuthUser(identity): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<UpdateBookingResponse>, AppError> {
    let booking = bookpro_db::repositories::booking::get_booking_by_id(&state.db_pool, id)
        .await
        .map_err(BookingError::Database)?
        .ok_or_else(|| BookingError::NotFound(format!("Booking with ID {} not found", id)))?;

    if booking.user_id != identity.user_id {
        return Err(AppError(BookingError::Authorization(
            "Booking belongs to another client".to_string(),
        )));
    }

    let updated = bookpro_db::repositories::booking::update_booking_status(
        &state.db_pool,
        id,
        &BookingStatus::Cancelled.to_string(),
    )
    .await
    .map_err(BookingError::Database)?
    .ok_or_else(|| BookingError::NotFound(format!("Booking with ID {} not found", id)))?;

    let status = updated
        .status
        .parse::<BookingStatus>()
        .map_err(|e| AppError(BookingError::Internal(e.into())))?;

    Ok(Json(UpdateBookingResponse {
        id: updated.id,
        status,
    }))
}

/// The booking's professional marks the appointment as held.
#[axum::debug_handler]
pub async fn complete_booking(
    State(state): State<Arc<ApiState>>,
    AuthUser(identity): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<UpdateBookingResponse>, AppError> {
    if identity.role != Role::Professional {
        return Err(AppError(BookingError::Authorization(
            "Only professionals can complete bookings".to_string(),
        )));
    }

    let booking = bookpro_db::repositories::booking::get_booking_by_id(&state.db_pool, id)
        .await
        .map_err(BookingError::Database)?
        .ok_or_else(|| BookingError::NotFound(format!("Booking with ID {} not found", id)))?;

    let professional = bookpro_db::repositories::professional::get_professional_by_user_id(
        &state.db_pool,
        identity.user_id,
    )
    .await
    .map_err(BookingError::Database)?
    .ok_or_else(|| BookingError::NotFound("Professional profile not found".to_string()))?;

    if booking.professional_id != professional.id {
        return Err(AppError(BookingError::Authorization(
            "Booking belongs to another professional".to_string(),
        )));
    }

    let updated = bookpro_db::repositories::booking::update_booking_status(
        &state.db_pool,
        id,
        &BookingStatus::Completed.to_string(),
    )
    .await
    .map_err(BookingError::Database)?
    .ok_or_else(|| BookingError::NotFound(format!("Booking with ID {} not found", id)))?;

    let status = updated
        .status
        .parse::<BookingStatus>()
        .map_err(|e| AppError(BookingError::Internal(e.into())))?;

    Ok(Json(UpdateBookingResponse {
        id: updated.id,
        status,
    }))
}

#[axum::debug_handler]
pub async fn list_own_bookings(
    State(state): State<Arc<ApiState>>,
    AuthUser(identity): AuthUser,
) -> Result<Json<ListBookingsResponse>, AppError> {
    let rows = bookpro_db::repositories::booking::get_booking_summaries_by_user_id(
        &state.db_pool,
        identity.user_id,
    )
    .await
    .map_err(BookingError::Database)?;

    let bookings = rows
        .into_iter()
        .map(to_summary)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Json(ListBookingsResponse { bookings }))
}

/// A professional's appointment list, newest first.
#[axum::debug_handler]
pub async fn list_appointments(
    State(state): State<Arc<ApiState>>,
    AuthUser(identity): AuthUser,
) -> Result<Json<ListBookingsResponse>, AppError> {
    let professional = bookpro_db::repositories::professional::get_professional_by_user_id(
        &state.db_pool,
        identity.user_id,
    )
    .await
    .map_err(BookingError::Database)?
    .ok_or_else(|| BookingError::NotFound("Professional profile not found".to_string()))?;

    let rows = bookpro_db::repositories::booking::get_booking_summaries_by_professional_id(
        &state.db_pool,
        professional.id,
    )
    .await
    .map_err(BookingError::Database)?;

    let bookings = rows
        .into_iter()
        .map(to_summary)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Json(ListBookingsResponse { bookings }))
}
