use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{review::ReviewResponse, service::Service};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Professional {
    pub id: Uuid,
    pub user_id: Uuid,
    pub specialty: String,
    pub description: String,
    pub education: Vec<String>,
    pub price_per_hour: f64,
    pub categories: Vec<String>,
    pub rating: Option<f64>,
    pub reviews_count: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProfessionalRequest {
    pub specialty: String,
    pub description: String,
    #[serde(default)]
    pub education: Vec<String>,
    pub price_per_hour: f64,
    #[serde(default)]
    pub categories: Vec<String>,
    pub location: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProfessionalResponse {
    pub id: Uuid,
    pub specialty: String,
    pub created_at: DateTime<Utc>,
}

/// One row of a search result: the professional joined with the public
/// parts of their profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfessionalSummary {
    pub id: Uuid,
    pub full_name: String,
    pub specialty: String,
    pub location: Option<String>,
    pub price_per_hour: f64,
    pub categories: Vec<String>,
    pub rating: Option<f64>,
    pub reviews_count: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchProfessionalsResponse {
    pub professionals: Vec<ProfessionalSummary>,
}

/// The public profile page: identity, services on offer, and reviews.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetProfessionalResponse {
    pub id: Uuid,
    pub full_name: String,
    pub specialty: String,
    pub description: String,
    pub education: Vec<String>,
    pub location: Option<String>,
    pub price_per_hour: f64,
    pub categories: Vec<String>,
    pub rating: Option<f64>,
    pub reviews_count: i32,
    pub services: Vec<Service>,
    pub reviews: Vec<ReviewResponse>,
}
