use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Business {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub timezone: String,
    pub slot_step_min: i32,
    pub created_at: DateTime<Utc>,
}

impl Business {
    pub fn new(name: String, slug: String, timezone: String, slot_step_min: i32) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            slug,
            timezone,
            slot_step_min,
            created_at: Utc::now(),
        }
    }
}
