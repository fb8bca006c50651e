use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeSlot {
    pub id: Uuid,
    pub professional_id: Uuid,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub is_available: bool,
    pub created_at: DateTime<Utc>,
}

/// A professional's working window for one date, to be cut into slots of
/// `slot_duration` minutes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateTimeSlotsRequest {
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub slot_duration: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateTimeSlotsResponse {
    pub created: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeSlotResponse {
    pub id: Uuid,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub is_available: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListTimeSlotsResponse {
    pub date: NaiveDate,
    pub slots: Vec<TimeSlotResponse>,
}
