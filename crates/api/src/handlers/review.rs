use axum::{extract::State, Json};
use bookpro_core::{
    errors::BookingError,
    models::{
        booking::BookingStatus,
        review::{CreateReviewRequest, CreateReviewResponse},
    },
};
use std::sync::Arc;

use crate::{
    middleware::{auth::AuthUser, error_handling::AppError},
    ApiState,
};

/// Records a review for a completed booking. Only the booking's client may
/// review it, and the professional's aggregate rating is refreshed as part
/// of the insert.
#[axum::debug_handler]
pub async fn create_review(
    State(state): State<Arc<ApiState>>,
    AuthUser(identity): AuthUser,
    Json(payload): Json<CreateReviewRequest>,
) -> Result<Json<CreateReviewResponse>, AppError> {
    if !(1..=5).contains(&payload.rating) {
        return Err(AppError(BookingError::Validation(
            "Rating must be between 1 and 5".to_string(),
        )));
    }

    let booking =
        bookpro_db::repositories::booking::get_booking_by_id(&state.db_pool, payload.booking_id)
            .await
            .map_err(BookingError::Database)?
            .ok_or_else(|| {
                BookingError::NotFound(format!(
                    "Booking with ID {} not found",
                    payload.booking_id
                ))
            })?;

    if booking.user_id != identity.user_id {
        return Err(AppError(BookingError::Authorization(
            "Booking belongs to another client".to_string(),
        )));
    }

    if booking.status != BookingStatus::Completed.to_string() {
        return Err(AppError(BookingError::Validation(
            "Only completed bookings can be reviewed".to_string(),
        )));
    }

    let review = bookpro_db::repositories::review::create_review(
        &state.db_pool,
        identity.user_id,
        booking.professional_id,
        booking.id,
        payload.rating,
        &payload.comment,
    )
    .await
    .map_err(BookingError::Database)?;

    Ok(Json(CreateReviewResponse {
        id: review.id,
        rating: review.rating,
        created_at: review.created_at,
    }))
}
