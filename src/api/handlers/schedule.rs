use axum::{extract::State, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::requests::ScheduleEntry;
use crate::api::extractors::business::BusinessId;
use crate::domain::models::schedule::WeeklySchedule;
use crate::domain::services::intervals::TimeInterval;
use std::sync::Arc;
use crate::error::AppError;
use tracing::info;

pub async fn upsert_schedule(
    State(state): State<Arc<AppState>>,
    BusinessId(business_id): BusinessId,
    Json(payload): Json<Vec<ScheduleEntry>>,
) -> Result<impl IntoResponse, AppError> {
    let mut saved = Vec::with_capacity(payload.len());

    for entry in payload {
        if !(0..=6).contains(&entry.weekday) {
            return Err(AppError::Validation(format!("Invalid weekday: {}", entry.weekday)));
        }
        for window in &entry.intervals {
            if TimeInterval::from_window(window).is_none() {
                return Err(AppError::Validation(format!(
                    "Invalid interval {} - {}", window.start, window.end
                )));
            }
        }

        let schedule = WeeklySchedule::new(
            business_id.clone(),
            entry.weekday,
            entry.is_active.unwrap_or(true),
            &entry.intervals,
        );
        saved.push(state.schedule_repo.upsert(&schedule).await?);
    }

    info!("Weekly schedule updated for business {}", business_id);
    Ok(Json(saved))
}

pub async fn get_schedule(
    State(state): State<Arc<AppState>>,
    BusinessId(business_id): BusinessId,
) -> Result<impl IntoResponse, AppError> {
    let schedules = state.schedule_repo.list(&business_id).await?;
    Ok(Json(schedules))
}
