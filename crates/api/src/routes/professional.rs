use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/professionals",
            post(handlers::professional::create_professional)
                .get(handlers::professional::search_professionals),
        )
        .route(
            "/api/professionals/:id",
            get(handlers::professional::get_professional),
        )
}
