use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/time-slots",
            post(handlers::time_slot::generate_time_slots),
        )
        .route(
            "/api/professionals/:id/slots",
            get(handlers::time_slot::list_time_slots),
        )
}
