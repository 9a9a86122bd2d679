use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Service {
    pub id: String,
    pub business_id: String,
    pub name: String,
    pub duration_min: i32,
    pub cleaning_min: i32,
    pub price_cents: i64,
    pub created_at: DateTime<Utc>,
}

impl Service {
    pub fn new(business_id: String, name: String, duration_min: i32, cleaning_min: i32, price_cents: i64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            business_id,
            name,
            duration_min,
            cleaning_min,
            price_cents,
            created_at: Utc::now(),
        }
    }

    /// Minutes a booking of this service blocks the calendar, buffer included.
    pub fn total_duration_min(&self) -> i32 {
        self.duration_min + self.cleaning_min
    }
}
