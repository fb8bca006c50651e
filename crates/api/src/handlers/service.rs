use axum::{
    extract::{Path, State},
    Json,
};
use bookpro_core::{
    errors::BookingError,
    models::service::{CreateServiceRequest, ListServicesResponse, Service, UpdateServiceRequest},
};
use bookpro_db::models::DbProfessional;
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    middleware::{auth::AuthUser, error_handling::AppError},
    ApiState,
};

/// Resolves the caller's professional record, failing when the account has
/// not completed onboarding.
async fn require_professional(
    state: &ApiState,
    user_id: Uuid,
) -> Result<DbProfessional, AppError> {
    let professional =
        bookpro_db::repositories::professional::get_professional_by_user_id(&state.db_pool, user_id)
            .await
            .map_err(BookingError::Database)?
            .ok_or_else(|| {
                BookingError::NotFound("Professional profile not found".to_string())
            })?;

    Ok(professional)
}

fn validate_service_fields(duration: Option<i32>, price: Option<f64>) -> Result<(), AppError> {
    if let Some(duration) = duration {
        if duration <= 0 {
            return Err(AppError(BookingError::Validation(
                "Duration must be a positive number of minutes".to_string(),
            )));
        }
    }
    if let Some(price) = price {
        if price < 0.0 {
            return Err(AppError(BookingError::Validation(
                "Price must not be negative".to_string(),
            )));
        }
    }
    Ok(())
}

#[axum::debug_handler]
pub async fn create_service(
    State(state): State<Arc<ApiState>>,
    AuthUser(identity): AuthUser,
    Json(payload): Json<CreateServiceRequest>,
) -> Result<Json<Service>, AppError> {
    let professional = require_professional(&state, identity.user_id).await?;

    validate_service_fields(Some(payload.duration), Some(payload.price))?;

    let db_service = bookpro_db::repositories::service::create_service(
        &state.db_pool,
        professional.id,
        &payload.name,
        &payload.description,
        payload.duration,
        payload.price,
    )
    .await
    .map_err(BookingError::Database)?;

    Ok(Json(Service {
        id: db_service.id,
        professional_id: db_service.professional_id,
        name: db_service.name,
        description: db_service.description,
        duration: db_service.duration,
        price: db_service.price,
        created_at: db_service.created_at,
    }))
}

#[axum::debug_handler]
pub async fn list_own_services(
    State(state): State<Arc<ApiState>>,
    AuthUser(identity): AuthUser,
) -> Result<Json<ListServicesResponse>, AppError> {
    let professional = require_professional(&state, identity.user_id).await?;

    let services = bookpro_db::repositories::service::get_services_by_professional_id(
        &state.db_pool,
        professional.id,
    )
    .await
    .map_err(BookingError::Database)?;

    let response = ListServicesResponse {
        services: services
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
            .collect(),
    };

    Ok(Json(response))
}

#[axum::debug_handler]
pub async fn update_service(
    State(state): State<Arc<ApiState>>,
    AuthUser(identity): AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateServiceRequest>,
) -> Result<Json<Service>, AppError> {
    let professional = require_professional(&state, identity.user_id).await?;

    let db_service = bookpro_db::repositories::service::get_service_by_id(&state.db_pool, id)
        .await
        .map_err(BookingError::Database)?
        .ok_or_else(|| BookingError::NotFound(format!("Service with ID {} not found", id)))?;

    if db_service.professional_id != professional.id {
        return Err(AppError(BookingError::Authorization(
            "Service belongs to another professional".to_string(),
        )));
    }

    validate_service_fields(payload.duration, payload.price)?;

    let updated = bookpro_db::repositories::service::update_service(
        &state.db_pool,
        id,
        payload.name.as_deref(),
        payload.description.as_deref(),
        payload.duration,
        payload.price,
    )
    .await
    .map_err(BookingError::Database)?;

    Ok(Json(Service {
        id: updated.id,
        professional_id: updated.professional_id,
        name: updated.name,
        description: updated.description,
        duration: updated.duration,
        price: updated.price,
        created_at: updated.created_at,
    }))
}

#[axum::debug_handler]
pub async fn delete_service(
    State(state): State<Arc<ApiState>>,
    AuthUser(identity): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let professional = require_professional(&state, identity.user_id).await?;

    let db_service = bookpro_db::repositories::service::get_service_by_id(&state.db_pool, id)
        .await
        .map_err(BookingError::Database)?
        .ok_or_else(|| BookingError::NotFound(format!("Service with ID {} not found", id)))?;

    if db_service.professional_id != professional.id {
        return Err(AppError(BookingError::Authorization(
            "Service belongs to another professional".to_string(),
        )));
    }

    bookpro_db::repositories::service::delete_service(&state.db_pool, id)
        .await
        .map_err(BookingError::Database)?;

    Ok(Json(serde_json::json!({ "ok": true })))
}
