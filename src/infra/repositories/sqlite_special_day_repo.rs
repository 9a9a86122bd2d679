use crate::domain::{models::special_day::SpecialDay, ports::SpecialDayRepository};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::SqlitePool;

pub struct SqliteSpecialDayRepo {
    pool: SqlitePool,
}

impl SqliteSpecialDayRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SpecialDayRepository for SqliteSpecialDayRepo {
    async fn upsert(&self, day: &SpecialDay) -> Result<SpecialDay, AppError> {
        sqlx::query_as::<_, SpecialDay>(
            "INSERT INTO special_days (id, business_id, date, is_closed, intervals_json, created_at)
             VALUES (?, ?, ?, ?, ?, ?)
             ON CONFLICT (business_id, date)
             DO UPDATE SET is_closed = excluded.is_closed, intervals_json = excluded.intervals_json
             RETURNING *"
        )
            .bind(&day.id).bind(&day.business_id).bind(day.date)
            .bind(day.is_closed).bind(&day.intervals_json).bind(day.created_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }
    async fn find_by_date(&self, business_id: &str, date: NaiveDate) -> Result<Option<SpecialDay>, AppError> {
        sqlx::query_as::<_, SpecialDay>("SELECT * FROM special_days WHERE business_id = ? AND date = ?")
            .bind(business_id).bind(date)
            .fetch_optional(&self.pool).await.map_err(AppError::Database)
    }
    async fn list_by_range(&self, business_id: &str, start: NaiveDate, end: NaiveDate) -> Result<Vec<SpecialDay>, AppError> {
        sqlx::query_as::<_, SpecialDay>("SELECT * FROM special_days WHERE business_id = ? AND date BETWEEN ? AND ? ORDER BY date ASC")
            .bind(business_id).bind(start).bind(end)
            .fetch_all(&self.pool).await.map_err(AppError::Database)
    }
    async fn delete(&self, business_id: &str, date: NaiveDate) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM special_days WHERE business_id = ? AND date = ?")
            .bind(business_id).bind(date)
            .execute(&self.pool).await.map_err(AppError::Database)?;
        if result.rows_affected() == 0 { return Err(AppError::NotFound("Special day not found".into())); }
        Ok(())
    }
}
