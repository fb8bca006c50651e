use axum::{
    extract::{Path, Query, State},
    Json,
};
use bookpro_core::{
    errors::BookingError,
    models::{
        professional::{
            CreateProfessionalRequest, CreateProfessionalResponse, GetProfessionalResponse,
            ProfessionalSummary, SearchProfessionalsResponse,
        },
        profile::Role,
        review::ReviewResponse,
        service::Service,
    },
};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    middleware::{auth::AuthUser, error_handling::AppError},
    ApiState,
};

/// Query parameters for the professional search endpoint. All filters are
/// optional and combined conjunctively.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    /// Free-text term matched against name and specialty
    pub q: Option<String>,

    /// Category the professional must offer
    pub category: Option<String>,

    /// Substring match on the profile location
    pub location: Option<String>,

    /// Lower bound on price per hour
    pub min_price: Option<f64>,

    /// Upper bound on price per hour
    pub max_price: Option<f64>,
}

/// Completes professional onboarding: creates the professional record and
/// patches the contact fields onto the profile.
#[axum::debug_handler]
pub async fn create_professional(
    State(state): State<Arc<ApiState>>,
    AuthUser(identity): AuthUser,
    Json(payload): Json<CreateProfessionalRequest>,
) -> Result<Json<CreateProfessionalResponse>, AppError> {
    if identity.role != Role::Professional {
        return Err(AppError(BookingError::Authorization(
            "Only professional accounts can create a professional profile".to_string(),
        )));
    }

    if payload.price_per_hour < 0.0 {
        return Err(AppError(BookingError::Validation(
            "Price per hour must not be negative".to_string(),
        )));
    }

    let existing = bookpro_db::repositories::professional::get_professional_by_user_id(
        &state.db_pool,
        identity.user_id,
    )
    .await
    .map_err(BookingError::Database)?;
    if existing.is_some() {
        return Err(AppError(BookingError::Conflict(
            "Professional profile already exists".to_string(),
        )));
    }

    let db_professional = bookpro_db::repositories::professional::create_professional(
        &state.db_pool,
        identity.user_id,
        &payload.specialty,
        &payload.description,
        &payload.education,
        payload.price_per_hour,
        &payload.categories,
    )
    .await
    .map_err(BookingError::Database)?;

    if payload.location.is_some() || payload.phone.is_some() {
        bookpro_db::repositories::profile::update_contact_details(
            &state.db_pool,
            identity.user_id,
            payload.location.as_deref(),
            payload.phone.as_deref(),
        )
        .await
        .map_err(BookingError::Database)?;
    }

    let response = CreateProfessionalResponse {
        id: db_professional.id,
        specialty: db_professional.specialty,
        created_at: db_professional.created_at,
    };

    Ok(Json(response))
}

/// Public professional page: profile data, services on offer, and reviews.
#[axum::debug_handler]
pub async fn get_professional(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<GetProfessionalResponse>, AppError> {
    let db_professional =
        bookpro_db::repositories::professional::get_professional_by_id(&state.db_pool, id)
            .await
            .map_err(BookingError::Database)?
            .ok_or_else(|| {
                BookingError::NotFound(format!("Professional with ID {} not found", id))
            })?;

    let db_profile = bookpro_db::repositories::profile::get_profile_by_id(
        &state.db_pool,
        db_professional.user_id,
    )
    .await
    .map_err(BookingError::Database)?
    .ok_or_else(|| {
        BookingError::NotFound(format!(
            "Profile for professional with ID {} not found",
            id
        ))
    })?;

    let services =
        bookpro_db::repositories::service::get_services_by_professional_id(&state.db_pool, id)
            .await
            .map_err(BookingError::Database)?;

    let reviews =
        bookpro_db::repositories::review::get_reviews_by_professional_id(&state.db_pool, id)
            .await
            .map_err(BookingError::Database)?;

    let response = GetProfessionalResponse {
        id: db_professional.id,
        full_name: db_profile.full_name,
        specialty: db_professional.specialty,
        description: db_professional.description,
        education: db_professional.education,
        location: db_profile.location,
        price_per_hour: db_professional.price_per_hour,
        categories: db_professional.categories,
        rating: db_professional.rating,
        reviews_count: db_professional.reviews_count,
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
        reviews: reviews
            .into_iter()
            .map(|review| ReviewResponse {
                id: review.id,
                reviewer_name: review.reviewer_name,
                rating: review.rating,
                comment: review.comment,
                created_at: review.created_at,
            })
            .collect(),
    };

    Ok(Json(response))
}

#[axum::debug_handler]
pub async fn search_professionals(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<SearchProfessionalsResponse>, AppError> {
    if let (Some(min), Some(max)) = (query.min_price, query.max_price) {
        if min > max {
            return Err(AppError(BookingError::Validation(
                "min_price must not exceed max_price".to_string(),
            )));
        }
    }

    let results = bookpro_db::repositories::professional::search_professionals(
        &state.db_pool,
        query.q.as_deref(),
        query.category.as_deref(),
        query.location.as_deref(),
        query.min_price,
        query.max_price,
    )
    .await
    .map_err(BookingError::Database)?;

    let response = SearchProfessionalsResponse {
        professionals: results
            .into_iter()
            .map(|row| ProfessionalSummary {
                id: row.id,
                full_name: row.full_name,
                specialty: row.specialty,
                location: row.location,
                price_per_hour: row.price_per_hour,
                categories: row.categories,
                rating: row.rating,
                reviews_count: row.reviews_count,
            })
            .collect(),
    };

    Ok(Json(response))
}
