use axum::{extract::State, Json};
use bookpro_core::{
    errors::BookingError,
    models::{
        booking::{Booking, BookingStatus},
        service::Service,
    },
    stats::{self, DashboardStats},
};
use chrono::Utc;
use std::sync::Arc;

use crate::{
    middleware::{auth::AuthUser, error_handling::AppError},
    ApiState,
};

/// Recomputes the professional's dashboard summary from their full booking
/// history: distinct clients, this month's booking count, and this month's
/// revenue.
#[axum::debug_handler]
pub async fn get_stats(
    State(state): State<Arc<ApiState>>,
    AuthUser(identity): AuthUser,
) -> Result<Json<DashboardStats>, AppError> {
    let professional = bookpro_db::repositories::professional::get_professional_by_user_id(
        &state.db_pool,
        identity.user_id,
    )
    .await
    .map_err(BookingError::Database)?
    .ok_or_else(|| BookingError::NotFound("Professional profile not found".to_string()))?;

    let db_bookings = bookpro_db::repositories::booking::get_bookings_by_professional_id(
        &state.db_pool,
        professional.id,
    )
    .await
    .map_err(BookingError::Database)?;

    let db_services = bookpro_db::repositories::service::get_services_by_professional_id(
        &state.db_pool,
        professional.id,
    )
    .await
    .map_err(BookingError::Database)?;

    let bookings = db_bookings
        .into_iter()
        .map(|booking| {
            let status = booking
                .status
                .parse::<BookingStatus>()
                .map_err(|e| AppError(BookingError::Internal(e.into())))?;

            Ok(Booking {
                id: booking.id,
                user_id: booking.user_id,
                professional_id: booking.professional_id,
                service_id: booking.service_id,
                time_slot_id: booking.time_slot_id,
                status,
                notes: booking.notes,
                created_at: booking.created_at,
            })
        })
        .collect::<Result<Vec<_>, AppError>>()?;

    let services: Vec<Service> = db_services
        .into_iter()
        .map(|service| Service {
            id: service.id,
            professional_id: service.professional_id,
            name: service.name,
            description: service.description,
            duration: service.duration,
            price: service.price,
            created_at: service.created_at,
        })
        .collect();

    let summary = stats::aggregate(&bookings, &services, Utc::now());

    Ok(Json(summary))
}
