use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::requests::CreateBusinessRequest;
use crate::domain::models::business::Business;
use std::sync::Arc;
use crate::error::AppError;
use tracing::info;

pub async fn create_business(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateBusinessRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.timezone.parse::<chrono_tz::Tz>().is_err() {
        return Err(AppError::Validation(format!("Unknown timezone: {}", payload.timezone)));
    }

    let slot_step_min = payload.slot_step_min.unwrap_or(state.config.default_slot_step_min);
    if slot_step_min <= 0 {
        return Err(AppError::Validation("slot_step_min must be positive".into()));
    }

    let business = Business::new(payload.name, payload.slug, payload.timezone, slot_step_min);
    let created = state.business_repo.create(&business).await?;

    info!("Business created: {}", created.id);
    Ok(Json(created))
}

pub async fn get_business_by_slug(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let business = state.business_repo.find_by_slug(&slug).await?
        .ok_or(AppError::NotFound("Business not found".into()))?;

    Ok(Json(business))
}
