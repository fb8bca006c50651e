use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbProfile {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub full_name: String,
    pub role: String,
    pub location: Option<String>,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbSession {
    pub token: String,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbProfessional {
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

/// A professional joined with the public columns of the owning profile,
/// as returned by search queries.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbProfessionalSummary {
    pub id: Uuid,
    pub full_name: String,
    pub specialty: String,
    pub location: Option<String>,
    pub price_per_hour: f64,
    pub categories: Vec<String>,
    pub rating: Option<f64>,
    pub reviews_count: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbService {
    pub id: Uuid,
    pub professional_id: Uuid,
    pub name: String,
    pub description: String,
    pub duration: i32,
    pub price: f64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbTimeSlot {
    pub id: Uuid,
    pub professional_id: Uuid,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub is_available: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbBooking {
    pub id: Uuid,
    pub user_id: Uuid,
    pub professional_id: Uuid,
    pub service_id: Uuid,
    pub time_slot_id: Uuid,
    pub status: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A booking joined with the counterparty name, service name, and slot
/// timing for dashboard listings.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbBookingSummary {
    pub id: Uuid,
    pub counterparty_name: String,
    pub service_name: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub status: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbReview {
    pub id: Uuid,
    pub user_id: Uuid,
    pub professional_id: Uuid,
    pub booking_id: Uuid,
    pub rating: i32,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

/// A review joined with the reviewer's name for public display.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbReviewSummary {
    pub id: Uuid,
    pub reviewer_name: String,
    pub rating: i32,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}
