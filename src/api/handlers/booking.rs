use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::requests::CreateBookingRequest;
use crate::api::extractors::business::BusinessId;
use crate::api::handlers::availability::resolve_day;
use crate::domain::models::booking::{Booking, NewBookingParams};
use crate::domain::services::intervals::parse_hm;
use crate::error::AppError;
use std::sync::Arc;
use chrono::{Duration, NaiveDate, TimeZone};
use chrono_tz::Tz;
use tracing::info;

/// Rejects local times the business's zone skips (spring forward) or
/// repeats (fall back). Unknown zones fall back to UTC rather than
/// blocking the booking.
pub fn validate_local_time(timezone: &str, date: NaiveDate, start_min: i32) -> Result<(), AppError> {
    let tz: Tz = timezone.parse().unwrap_or(chrono_tz::UTC);
    let naive = date.and_hms_opt(0, 0, 0)
        .ok_or(AppError::Validation("Invalid date".into()))?
        + Duration::minutes(start_min as i64);

    tz.from_local_datetime(&naive)
        .single()
        .ok_or(AppError::Validation("Invalid local time (ambiguous or skipped due to DST)".into()))?;

    Ok(())
}

pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    BusinessId(business_id): BusinessId,
    Path((_, service_id)): Path<(String, String)>,
    Json(payload): Json<CreateBookingRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.name.trim().is_empty() || payload.phone.trim().is_empty() {
        return Err(AppError::Validation("Name and phone are required".into()));
    }

    let business = state.business_repo.find_by_id(&business_id).await?
        .ok_or(AppError::NotFound("Business not found".into()))?;
    let service = state.service_repo.find_by_id(&business_id, &service_id).await?
        .ok_or(AppError::NotFound("Service not found".into()))?;

    let start_min = parse_hm(&payload.time)
        .ok_or(AppError::Validation("Invalid time format (HH:MM)".into()))?;

    validate_local_time(&business.timezone, payload.date, start_min)?;

    let open = resolve_day(&state, &business_id, payload.date).await?;

    let booking = Booking::new(NewBookingParams {
        business_id: business_id.clone(),
        service_id: service.id.clone(),
        date: payload.date,
        start_min,
        duration_min: service.duration_min,
        name: payload.name,
        phone: payload.phone,
        note: payload.note,
    });

    let created = state.booking_repo.create_checked(&booking, service.cleaning_min, &open).await?;

    info!("Booking created: {} on {} at {}", created.id, created.date, payload.time);
    Ok(Json(created))
}
