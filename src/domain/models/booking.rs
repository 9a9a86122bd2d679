use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;
use rand::{distributions::Alphanumeric, Rng};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Confirmed,
    Cancelled,
}

/// `end_min` is `start_min + duration_min` of the booked service. The
/// cleaning buffer is not part of the stored window; occupancy checks add
/// it back from the service row.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Booking {
    pub id: String,
    pub business_id: String,
    pub service_id: String,
    pub date: NaiveDate,
    pub start_min: i32,
    pub end_min: i32,
    pub customer_name: String,
    pub customer_phone: String,
    pub note: Option<String>,
    pub client_key: String,
    pub status: BookingStatus,
    pub reminder_sent: bool,
    pub created_at: DateTime<Utc>,
}

pub struct NewBookingParams {
    pub business_id: String,
    pub service_id: String,
    pub date: NaiveDate,
    pub start_min: i32,
    pub duration_min: i32,
    pub name: String,
    pub phone: String,
    pub note: Option<String>,
}

impl Booking {
    pub fn new(params: NewBookingParams) -> Self {
        let client_key: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(48)
            .map(char::from)
            .collect();

        Self {
            id: Uuid::new_v4().to_string(),
            business_id: params.business_id,
            service_id: params.service_id,
            date: params.date,
            start_min: params.start_min,
            end_min: params.start_min + params.duration_min,
            customer_name: params.name,
            customer_phone: params.phone,
            note: params.note,
            client_key,
            status: BookingStatus::Confirmed,
            reminder_sent: false,
            created_at: Utc::now(),
        }
    }
}

/// Occupancy query row: a non-cancelled booking joined with its own
/// service's cleaning buffer.
#[derive(Debug, FromRow, Clone)]
pub struct OccupiedBooking {
    pub id: String,
    pub start_min: i32,
    pub end_min: i32,
    pub cleaning_min: i32,
}

/// Reminder scan row: a confirmed, not-yet-reminded booking joined with its
/// business's timezone and the display names the message needs.
#[derive(Debug, FromRow, Clone)]
pub struct ReminderCandidate {
    pub id: String,
    pub business_id: String,
    pub date: NaiveDate,
    pub start_min: i32,
    pub customer_name: String,
    pub customer_phone: String,
    pub timezone: String,
    pub business_name: String,
    pub service_name: String,
}
