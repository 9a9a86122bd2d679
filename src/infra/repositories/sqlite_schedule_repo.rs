use crate::domain::{models::schedule::WeeklySchedule, ports::ScheduleRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteScheduleRepo {
    pool: SqlitePool,
}

impl SqliteScheduleRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ScheduleRepository for SqliteScheduleRepo {
    async fn upsert(&self, schedule: &WeeklySchedule) -> Result<WeeklySchedule, AppError> {
        sqlx::query_as::<_, WeeklySchedule>(
            "INSERT INTO weekly_schedules (id, business_id, weekday, is_active, intervals_json, created_at)
             VALUES (?, ?, ?, ?, ?, ?)
             ON CONFLICT (business_id, weekday)
             DO UPDATE SET is_active = excluded.is_active, intervals_json = excluded.intervals_json
             RETURNING *"
        )
            .bind(&schedule.id).bind(&schedule.business_id).bind(schedule.weekday)
            .bind(schedule.is_active).bind(&schedule.intervals_json).bind(schedule.created_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }
    async fn find_by_weekday(&self, business_id: &str, weekday: i32) -> Result<Option<WeeklySchedule>, AppError> {
        sqlx::query_as::<_, WeeklySchedule>("SELECT * FROM weekly_schedules WHERE business_id = ? AND weekday = ?")
            .bind(business_id).bind(weekday)
            .fetch_optional(&self.pool).await.map_err(AppError::Database)
    }
    async fn list(&self, business_id: &str) -> Result<Vec<WeeklySchedule>, AppError> {
        sqlx::query_as::<_, WeeklySchedule>("SELECT * FROM weekly_schedules WHERE business_id = ? ORDER BY weekday ASC")
            .bind(business_id)
            .fetch_all(&self.pool).await.map_err(AppError::Database)
    }
}
