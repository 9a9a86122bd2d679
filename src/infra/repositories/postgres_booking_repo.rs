use crate::domain::models::booking::{Booking, OccupiedBooking, ReminderCandidate};
use crate::domain::ports::BookingRepository;
use crate::domain::services::availability::{occupied_windows, slot_fits};
use crate::domain::services::intervals::TimeInterval;
use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;

pub struct PostgresBookingRepo {
    pool: PgPool,
}

impl PostgresBookingRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const OCCUPIED_FOR_DAY: &str =
    "SELECT b.id, b.start_min, b.end_min, s.cleaning_min
     FROM bookings b
     JOIN services s ON s.id = b.service_id
     WHERE b.business_id = $1 AND b.date = $2 AND b.status != 'cancelled'";

#[async_trait]
impl BookingRepository for PostgresBookingRepo {
    async fn create_checked(&self, booking: &Booking, cleaning_min: i32, open_intervals: &[TimeInterval]) -> Result<Booking, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        // Serialize concurrent commits for the same business day. The lock
        // is released automatically at commit/rollback.
        sqlx::query("SELECT pg_advisory_xact_lock(hashtext($1), hashtext($2))")
            .bind(&booking.business_id).bind(booking.date.to_string())
            .execute(&mut *tx).await.map_err(AppError::Database)?;

        let rows = sqlx::query_as::<_, OccupiedBooking>(OCCUPIED_FOR_DAY)
            .bind(&booking.business_id).bind(booking.date)
            .fetch_all(&mut *tx).await.map_err(AppError::Database)?;

        let occupied = occupied_windows(&rows, None);
        let candidate = TimeInterval {
            start_min: booking.start_min,
            end_min: booking.end_min + cleaning_min,
        };
        if !slot_fits(candidate, open_intervals, &occupied) {
            return Err(AppError::SlotUnavailable("Selected time slot is no longer available".into()));
        }

        let created = sqlx::query_as::<_, Booking>(
            "INSERT INTO bookings (id, business_id, service_id, date, start_min, end_min,
                                   customer_name, customer_phone, note, client_key, status,
                                   reminder_sent, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
             RETURNING *"
        )
            .bind(&booking.id).bind(&booking.business_id).bind(&booking.service_id)
            .bind(booking.date).bind(booking.start_min).bind(booking.end_min)
            .bind(&booking.customer_name).bind(&booking.customer_phone).bind(&booking.note)
            .bind(&booking.client_key).bind(booking.status)
            .bind(booking.reminder_sent).bind(booking.created_at)
            .fetch_one(&mut *tx).await.map_err(AppError::Database)?;

        tx.commit().await.map_err(AppError::Database)?;
        Ok(created)
    }

    async fn reschedule_checked(&self, booking: &Booking, cleaning_min: i32, open_intervals: &[TimeInterval]) -> Result<Booking, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        sqlx::query("SELECT pg_advisory_xact_lock(hashtext($1), hashtext($2))")
            .bind(&booking.business_id).bind(booking.date.to_string())
            .execute(&mut *tx).await.map_err(AppError::Database)?;

        let rows = sqlx::query_as::<_, OccupiedBooking>(OCCUPIED_FOR_DAY)
            .bind(&booking.business_id).bind(booking.date)
            .fetch_all(&mut *tx).await.map_err(AppError::Database)?;

        // The booking's current row must not block its own new slot.
        let occupied = occupied_windows(&rows, Some(&booking.id));
        let candidate = TimeInterval {
            start_min: booking.start_min,
            end_min: booking.end_min + cleaning_min,
        };
        if !slot_fits(candidate, open_intervals, &occupied) {
            return Err(AppError::SlotUnavailable("Selected time slot is no longer available".into()));
        }

        let updated = sqlx::query_as::<_, Booking>(
            "UPDATE bookings SET date = $1, start_min = $2, end_min = $3 WHERE id = $4 RETURNING *"
        )
            .bind(booking.date).bind(booking.start_min).bind(booking.end_min)
            .bind(&booking.id)
            .fetch_optional(&mut *tx).await.map_err(AppError::Database)?
            .ok_or_else(|| AppError::NotFound("Booking not found".into()))?;

        tx.commit().await.map_err(AppError::Database)?;
        Ok(updated)
    }

    async fn find_by_client_key(&self, client_key: &str) -> Result<Option<Booking>, AppError> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE client_key = $1")
            .bind(client_key)
            .fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn list_occupied(&self, business_id: &str, date: NaiveDate) -> Result<Vec<OccupiedBooking>, AppError> {
        sqlx::query_as::<_, OccupiedBooking>(OCCUPIED_FOR_DAY)
            .bind(business_id).bind(date)
            .fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn cancel(&self, id: &str) -> Result<Booking, AppError> {
        sqlx::query_as::<_, Booking>("UPDATE bookings SET status = 'cancelled' WHERE id = $1 RETURNING *")
            .bind(id)
            .fetch_optional(&self.pool).await.map_err(AppError::Database)?
            .ok_or_else(|| AppError::NotFound("Booking not found".into()))
    }

    async fn list_reminder_candidates(&self, from: NaiveDate, to: NaiveDate) -> Result<Vec<ReminderCandidate>, AppError> {
        sqlx::query_as::<_, ReminderCandidate>(
            "SELECT b.id, b.business_id, b.date, b.start_min, b.customer_name, b.customer_phone,
                    biz.timezone, biz.name AS business_name, s.name AS service_name
             FROM bookings b
             JOIN businesses biz ON biz.id = b.business_id
             JOIN services s ON s.id = b.service_id
             WHERE b.status = 'confirmed' AND b.reminder_sent = FALSE AND b.date BETWEEN $1 AND $2"
        )
            .bind(from).bind(to)
            .fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn mark_reminder_sent(&self, id: &str) -> Result<(), AppError> {
        sqlx::query("UPDATE bookings SET reminder_sent = TRUE WHERE id = $1")
            .bind(id)
            .execute(&self.pool).await.map_err(AppError::Database)?;
        Ok(())
    }
}
