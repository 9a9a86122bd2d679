use axum::{
    body::Body,
    extract::Request,
    routing::{get, post, put, delete},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{availability, booking, booking_management, business, health, schedule, service, special_day};
use tower_http::{
    trace::TraceLayer,
    classify::ServerErrorsFailureClass,
};
use tracing::{info_span, Span, error, info};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Business
        .route("/api/v1/businesses", post(business::create_business))
        .route("/api/v1/businesses/by-slug/{slug}", get(business::get_business_by_slug))

        // Services
        .route("/api/v1/{business_id}/services", post(service::create_service).get(service::list_services))
        .route("/api/v1/{business_id}/services/{service_id}", delete(service::delete_service))

        // Opening hours
        .route("/api/v1/{business_id}/schedule", put(schedule::upsert_schedule).get(schedule::get_schedule))
        .route("/api/v1/{business_id}/special-days", post(special_day::upsert_special_day).get(special_day::list_special_days))
        .route("/api/v1/{business_id}/special-days/{date}", delete(special_day::delete_special_day))

        // Public Booking Flow
        .route("/api/v1/{business_id}/services/{service_id}/slots", get(availability::get_slots))
        .route("/api/v1/{business_id}/services/{service_id}/book", post(booking::create_booking))

        // Customer Booking Management
        .route("/api/v1/bookings/manage/{client_key}", get(booking_management::get_booking_by_key))
        .route("/api/v1/bookings/manage/{client_key}/cancel", post(booking_management::cancel_booking))
        .route("/api/v1/bookings/manage/{client_key}/reschedule", post(booking_management::reschedule_booking))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                        business_id = tracing::field::Empty,
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .with_state(state)
}
