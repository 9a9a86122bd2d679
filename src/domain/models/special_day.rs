use serde::{Deserialize, Serialize};
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;
use uuid::Uuid;
use crate::domain::models::schedule::TimeWindow;

/// Date-level override for one business. A closed day wins over everything;
/// authored intervals, when present, fully replace the weekly ones for that
/// date. With neither, the weekly schedule stays in effect.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct SpecialDay {
    pub id: String,
    pub business_id: String,
    pub date: NaiveDate,
    pub is_closed: bool,
    pub intervals_json: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl SpecialDay {
    pub fn new(business_id: String, date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            business_id,
            date,
            is_closed: false,
            intervals_json: None,
            created_at: Utc::now(),
        }
    }

    pub fn windows(&self) -> Option<Vec<TimeWindow>> {
        self.intervals_json
            .as_ref()
            .map(|json| serde_json::from_str(json).unwrap_or_default())
    }
}
