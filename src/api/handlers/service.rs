use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::requests::CreateServiceRequest;
use crate::api::extractors::business::BusinessId;
use crate::domain::models::service::Service;
use std::sync::Arc;
use crate::error::AppError;
use tracing::info;

pub async fn create_service(
    State(state): State<Arc<AppState>>,
    BusinessId(business_id): BusinessId,
    Json(payload): Json<CreateServiceRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.duration_min <= 0 {
        return Err(AppError::Validation("duration_min must be positive".into()));
    }
    let cleaning_min = payload.cleaning_min.unwrap_or(0);
    if cleaning_min < 0 {
        return Err(AppError::Validation("cleaning_min must not be negative".into()));
    }

    let service = Service::new(
        business_id,
        payload.name,
        payload.duration_min,
        cleaning_min,
        payload.price_cents.unwrap_or(0),
    );
    let created = state.service_repo.create(&service).await?;

    info!("Service created: {}", created.id);
    Ok(Json(created))
}

pub async fn list_services(
    State(state): State<Arc<AppState>>,
    BusinessId(business_id): BusinessId,
) -> Result<impl IntoResponse, AppError> {
    let services = state.service_repo.list(&business_id).await?;
    Ok(Json(services))
}

pub async fn delete_service(
    State(state): State<Arc<AppState>>,
    BusinessId(business_id): BusinessId,
    Path((_, service_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    state.service_repo.delete(&business_id, &service_id).await?;
    info!("Service deleted: {}", service_id);
    Ok(Json(serde_json::json!({ "deleted": service_id })))
}
