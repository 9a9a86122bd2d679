use axum::{extract::{State, Path, Query}, response::IntoResponse, Json};
use chrono::NaiveDate;
use crate::state::AppState;
use crate::api::dtos::requests::{SpecialDayRequest, SpecialDaysQuery};
use crate::api::extractors::business::BusinessId;
use crate::domain::models::special_day::SpecialDay;
use crate::domain::services::intervals::TimeInterval;
use std::sync::Arc;
use crate::error::AppError;
use tracing::info;

pub async fn upsert_special_day(
    State(state): State<Arc<AppState>>,
    BusinessId(business_id): BusinessId,
    Json(payload): Json<SpecialDayRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Some(windows) = &payload.intervals {
        for window in windows {
            if TimeInterval::from_window(window).is_none() {
                return Err(AppError::Validation(format!(
                    "Invalid interval {} - {}", window.start, window.end
                )));
            }
        }
    }

    let mut day = SpecialDay::new(business_id.clone(), payload.date);
    day.is_closed = payload.is_closed;
    if let Some(windows) = payload.intervals {
        day.intervals_json = Some(serde_json::to_string(&windows).map_err(|_| AppError::Internal)?);
    }

    let saved = state.special_day_repo.upsert(&day).await?;
    info!("Special day upserted: {} {}", business_id, saved.date);
    Ok(Json(saved))
}

pub async fn list_special_days(
    State(state): State<Arc<AppState>>,
    BusinessId(business_id): BusinessId,
    Query(query): Query<SpecialDaysQuery>,
) -> Result<impl IntoResponse, AppError> {
    let days = state.special_day_repo.list_by_range(&business_id, query.start, query.end).await?;
    Ok(Json(days))
}

pub async fn delete_special_day(
    State(state): State<Arc<AppState>>,
    BusinessId(business_id): BusinessId,
    Path((_, date)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let date = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
        .map_err(|_| AppError::Validation("Invalid date format, expected YYYY-MM-DD".into()))?;

    state.special_day_repo.delete(&business_id, date).await?;
    info!("Special day deleted: {} {}", business_id, date);
    Ok(Json(serde_json::json!({ "deleted": date })))
}
