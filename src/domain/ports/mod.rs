use crate::domain::models::{
    booking::{Booking, OccupiedBooking, ReminderCandidate},
    business::Business,
    schedule::WeeklySchedule,
    service::Service,
    special_day::SpecialDay,
};
use crate::domain::services::intervals::TimeInterval;
use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;

#[async_trait]
pub trait BusinessRepository: Send + Sync {
    async fn create(&self, business: &Business) -> Result<Business, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Business>, AppError>;
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Business>, AppError>;
}

#[async_trait]
pub trait ServiceRepository: Send + Sync {
    async fn create(&self, service: &Service) -> Result<Service, AppError>;
    async fn find_by_id(&self, business_id: &str, id: &str) -> Result<Option<Service>, AppError>;
    async fn list(&self, business_id: &str) -> Result<Vec<Service>, AppError>;
    async fn delete(&self, business_id: &str, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait ScheduleRepository: Send + Sync {
    async fn upsert(&self, schedule: &WeeklySchedule) -> Result<WeeklySchedule, AppError>;
    async fn find_by_weekday(&self, business_id: &str, weekday: i32) -> Result<Option<WeeklySchedule>, AppError>;
    async fn list(&self, business_id: &str) -> Result<Vec<WeeklySchedule>, AppError>;
}

#[async_trait]
pub trait SpecialDayRepository: Send + Sync {
    async fn upsert(&self, day: &SpecialDay) -> Result<SpecialDay, AppError>;
    async fn find_by_date(&self, business_id: &str, date: NaiveDate) -> Result<Option<SpecialDay>, AppError>;
    async fn list_by_range(&self, business_id: &str, start: NaiveDate, end: NaiveDate) -> Result<Vec<SpecialDay>, AppError>;
    async fn delete(&self, business_id: &str, date: NaiveDate) -> Result<(), AppError>;
}

#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Inserts the booking after re-checking occupancy for its day inside
    /// one write transaction. The caller resolves `open_intervals` fresh;
    /// `cleaning_min` is the requested service's buffer, which extends the
    /// candidate window only.
    async fn create_checked(&self, booking: &Booking, cleaning_min: i32, open_intervals: &[TimeInterval]) -> Result<Booking, AppError>;
    /// Same guarded check against the booking's (possibly new) date, with
    /// the booking's own row excluded from occupancy, then updates
    /// date/start/end in place.
    async fn reschedule_checked(&self, booking: &Booking, cleaning_min: i32, open_intervals: &[TimeInterval]) -> Result<Booking, AppError>;
    async fn find_by_client_key(&self, client_key: &str) -> Result<Option<Booking>, AppError>;
    async fn list_occupied(&self, business_id: &str, date: NaiveDate) -> Result<Vec<OccupiedBooking>, AppError>;
    /// Unconditional cancel; cancelling an already-cancelled booking is a
    /// no-op success.
    async fn cancel(&self, id: &str) -> Result<Booking, AppError>;
    async fn list_reminder_candidates(&self, from: NaiveDate, to: NaiveDate) -> Result<Vec<ReminderCandidate>, AppError>;
    async fn mark_reminder_sent(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait NotificationService: Send + Sync {
    async fn send(&self, phone: &str, message: &str) -> Result<(), AppError>;
}
