use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/bookings",
            post(handlers::booking::create_booking).get(handlers::booking::list_own_bookings),
        )
        .route(
            "/api/bookings/:id/cancel",
            post(handlers::booking::cancel_booking),
        )
        .route(
            "/api/bookings/:id/complete",
            post(handlers::booking::complete_booking),
        )
        .route(
            "/api/appointments",
            get(handlers::booking::list_appointments),
        )
}
