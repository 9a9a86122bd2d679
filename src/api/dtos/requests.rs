use crate::domain::models::schedule::TimeWindow;
use chrono::NaiveDate;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct CreateBusinessRequest {
    pub name: String,
    pub slug: String,
    pub timezone: String,
    pub slot_step_min: Option<i32>,
}

#[derive(Deserialize)]
pub struct CreateServiceRequest {
    pub name: String,
    pub duration_min: i32,
    pub cleaning_min: Option<i32>,
    pub price_cents: Option<i64>,
}

#[derive(Deserialize)]
pub struct ScheduleEntry {
    pub weekday: i32,
    pub is_active: Option<bool>,
    pub intervals: Vec<TimeWindow>,
}

#[derive(Deserialize)]
pub struct SpecialDayRequest {
    pub date: NaiveDate,
    pub is_closed: bool,
    pub intervals: Option<Vec<TimeWindow>>,
}

#[derive(Deserialize)]
pub struct SpecialDaysQuery {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

#[derive(Deserialize)]
pub struct SlotsQuery {
    pub date: String,
}

#[derive(Deserialize)]
pub struct CreateBookingRequest {
    pub date: NaiveDate,
    pub time: String,
    pub name: String,
    pub phone: String,
    pub note: Option<String>,
}

#[derive(Deserialize)]
pub struct RescheduleBookingRequest {
    pub date: NaiveDate,
    pub time: String,
}
