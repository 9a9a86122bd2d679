use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Authored opening window, as stored in `intervals_json`.
/// Times are zero-padded "HH:mm" strings; they are converted to integer
/// minutes before any comparison.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: String,
    pub end: String,
}

/// One row per (business, weekday). Weekday 0 = Sunday .. 6 = Saturday.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct WeeklySchedule {
    pub id: String,
    pub business_id: String,
    pub weekday: i32,
    pub is_active: bool,
    pub intervals_json: String,
    pub created_at: DateTime<Utc>,
}

impl WeeklySchedule {
    pub fn new(business_id: String, weekday: i32, is_active: bool, windows: &[TimeWindow]) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            business_id,
            weekday,
            is_active,
            intervals_json: serde_json::to_string(windows).unwrap_or_else(|_| "[]".to_string()),
            created_at: Utc::now(),
        }
    }

    pub fn windows(&self) -> Vec<TimeWindow> {
        serde_json::from_str(&self.intervals_json).unwrap_or_default()
    }
}
