use axum::{
    routing::{post, put},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/services",
            post(handlers::service::create_service).get(handlers::service::list_own_services),
        )
        .route(
            "/api/services/:id",
            put(handlers::service::update_service).delete(handlers::service::delete_service),
        )
}
