pub mod sqlite_booking_repo;
pub mod sqlite_business_repo;
pub mod sqlite_schedule_repo;
pub mod sqlite_service_repo;
pub mod sqlite_special_day_repo;

pub mod postgres_booking_repo;
pub mod postgres_business_repo;
pub mod postgres_schedule_repo;
pub mod postgres_service_repo;
pub mod postgres_special_day_repo;
