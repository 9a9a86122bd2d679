use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::requests::RescheduleBookingRequest;
use crate::api::handlers::availability::resolve_day;
use crate::api::handlers::booking::validate_local_time;
use crate::domain::models::booking::BookingStatus;
use crate::domain::services::intervals::parse_hm;
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

pub async fn get_booking_by_key(
    State(state): State<Arc<AppState>>,
    Path(client_key): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let booking = state.booking_repo.find_by_client_key(&client_key).await?
        .ok_or(AppError::NotFound("Booking not found".into()))?;

    Ok(Json(booking))
}

pub async fn cancel_booking(
    State(state): State<Arc<AppState>>,
    Path(client_key): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let booking = state.booking_repo.find_by_client_key(&client_key).await?
        .ok_or(AppError::NotFound("Booking not found".into()))?;

    if booking.status == BookingStatus::Cancelled {
        return Ok(Json(booking));
    }

    let cancelled = state.booking_repo.cancel(&booking.id).await?;
    info!("Booking cancelled via client key: {}", cancelled.id);

    Ok(Json(cancelled))
}

pub async fn reschedule_booking(
    State(state): State<Arc<AppState>>,
    Path(client_key): Path<String>,
    Json(payload): Json<RescheduleBookingRequest>,
) -> Result<impl IntoResponse, AppError> {
    let booking = state.booking_repo.find_by_client_key(&client_key).await?
        .ok_or(AppError::NotFound("Booking not found".into()))?;

    if booking.status == BookingStatus::Cancelled {
        return Err(AppError::Validation("Cannot reschedule a cancelled booking.".into()));
    }

    let business = state.business_repo.find_by_id(&booking.business_id).await?
        .ok_or(AppError::Internal)?;
    let service = state.service_repo.find_by_id(&booking.business_id, &booking.service_id).await?
        .ok_or(AppError::Internal)?;

    let start_min = parse_hm(&payload.time)
        .ok_or(AppError::Validation("Invalid time format (HH:MM)".into()))?;

    validate_local_time(&business.timezone, payload.date, start_min)?;

    let open = resolve_day(&state, &booking.business_id, payload.date).await?;

    let mut updated = booking.clone();
    updated.date = payload.date;
    updated.start_min = start_min;
    updated.end_min = start_min + service.duration_min;

    let saved = state.booking_repo.reschedule_checked(&updated, service.cleaning_min, &open).await?;

    info!("Booking rescheduled: {} to {} at {}", saved.id, payload.date, payload.time);
    Ok(Json(saved))
}
