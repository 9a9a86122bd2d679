use crate::domain::{models::schedule::WeeklySchedule, ports::ScheduleRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresScheduleRepo {
    pool: PgPool,
}

impl PostgresScheduleRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ScheduleRepository for PostgresScheduleRepo {
    async fn upsert(&self, schedule: &WeeklySchedule) -> Result<WeeklySchedule, AppError> {
        sqlx::query_as::<_, WeeklySchedule>(
            "INSERT INTO weekly_schedules (id, business_id, weekday, is_active, intervals_json, created_at)
             VALUES ($1, $2, $3, $4, $5, $6)
             ON CONFLICT (business_id, weekday)
             DO UPDATE SET is_active = excluded.is_active, intervals_json = excluded.intervals_json
             RETURNING *"
        )
            .bind(&schedule.id).bind(&schedule.business_id).bind(schedule.weekday)
            .bind(schedule.is_active).bind(&schedule.intervals_json).bind(schedule.created_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }
    async fn find_by_weekday(&self, business_id: &str, weekday: i32) -> Result<Option<WeeklySchedule>, AppError> {
        sqlx::query_as::<_, WeeklySchedule>("SELECT * FROM weekly_schedules WHERE business_id = $1 AND weekday = $2")
            .bind(business_id).bind(weekday)
            .fetch_optional(&self.pool).await.map_err(AppError::Database)
    }
    async fn list(&self, business_id: &str) -> Result<Vec<WeeklySchedule>, AppError> {
        sqlx::query_as::<_, WeeklySchedule>("SELECT * FROM weekly_schedules WHERE business_id = $1 ORDER BY weekday ASC")
            .bind(business_id)
            .fetch_all(&self.pool).await.map_err(AppError::Database)
    }
}
