use axum::{extract::{State, Path, Query}, response::IntoResponse, Json};
use chrono::{Datelike, NaiveDate};
use crate::state::AppState;
use crate::api::dtos::{requests::SlotsQuery, responses::SlotsResponse};
use crate::api::extractors::business::BusinessId;
use crate::domain::services::availability::{calculate_slots, occupied_windows, resolve_open_intervals};
use crate::domain::services::intervals::TimeInterval;
use std::sync::Arc;
use crate::error::AppError;

/// Fresh schedule + override lookup for one business day. Used by the
/// slots endpoint and re-run by the commit path so stale availability
/// responses never decide a booking.
pub async fn resolve_day(
    state: &AppState,
    business_id: &str,
    date: NaiveDate,
) -> Result<Vec<TimeInterval>, AppError> {
    let weekday = date.weekday().num_days_from_sunday() as i32;
    let weekly = state.schedule_repo.find_by_weekday(business_id, weekday).await?;
    let special = state.special_day_repo.find_by_date(business_id, date).await?;
    Ok(resolve_open_intervals(weekly.as_ref(), special.as_ref()))
}

pub async fn get_slots(
    State(state): State<Arc<AppState>>,
    BusinessId(business_id): BusinessId,
    Path((_, service_id)): Path<(String, String)>,
    Query(query): Query<SlotsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let date = NaiveDate::parse_from_str(&query.date, "%Y-%m-%d")
        .map_err(|_| AppError::Validation("Invalid date format, expected YYYY-MM-DD".into()))?;

    let business = state.business_repo.find_by_id(&business_id).await?
        .ok_or(AppError::NotFound("Business not found".into()))?;
    let service = state.service_repo.find_by_id(&business_id, &service_id).await?
        .ok_or(AppError::NotFound("Service not found".into()))?;

    let open = resolve_day(&state, &business_id, date).await?;
    let occupied_rows = state.booking_repo.list_occupied(&business_id, date).await?;
    let occupied = occupied_windows(&occupied_rows, None);

    let slots = calculate_slots(&open, &occupied, service.total_duration_min(), business.slot_step_min);

    Ok(Json(SlotsResponse { date: query.date, slots }))
}
