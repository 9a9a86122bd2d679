mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use common::TestApp;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn parse_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// Monday; the weekly schedule below is keyed on weekday 1.
const MONDAY: &str = "2026-09-14";

/// Business open Monday 09:00-18:00 with a 13:00-14:00 lunch break,
/// one service of 30 min + 10 min cleaning, 30 min slot step.
async fn setup_business_with_service(app: &TestApp, suffix: &str) -> (String, String) {
    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri("/api/v1/businesses")
            .header("Content-Type", "application/json")
            .body(Body::from(json!({
                "name": format!("Studio {}", suffix),
                "slug": format!("studio-{}", suffix),
                "timezone": "Europe/Berlin",
                "slot_step_min": 30
            }).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let business_id = parse_body(res).await["id"].as_str().unwrap().to_string();

    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri(format!("/api/v1/{}/services", business_id))
            .header("Content-Type", "application/json")
            .body(Body::from(json!({
                "name": "Cut",
                "duration_min": 30,
                "cleaning_min": 10,
                "price_cents": 2500
            }).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let service_id = parse_body(res).await["id"].as_str().unwrap().to_string();

    let res = app.router.clone().oneshot(
        Request::builder().method("PUT").uri(format!("/api/v1/{}/schedule", business_id))
            .header("Content-Type", "application/json")
            .body(Body::from(json!([{
                "weekday": 1,
                "intervals": [
                    {"start": "09:00", "end": "13:00"},
                    {"start": "14:00", "end": "18:00"}
                ]
            }]).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    (business_id, service_id)
}

async fn fetch_slots(app: &TestApp, business_id: &str, service_id: &str, date: &str) -> Vec<String> {
    let res = app.router.clone().oneshot(
        Request::builder().method("GET")
            .uri(format!("/api/v1/{}/services/{}/slots?date={}", business_id, service_id, date))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    parse_body(res).await["slots"].as_array().unwrap()
        .iter().map(|s| s.as_str().unwrap().to_string()).collect()
}

#[tokio::test]
async fn test_slots_with_lunch_break() {
    let app = TestApp::new().await;
    let (bid, sid) = setup_business_with_service(&app, "break").await;

    let slots = fetch_slots(&app, &bid, &sid, MONDAY).await;

    // 30 min + 10 min buffer at a 30 min step: last morning start 12:00
    // (12:30 would spill into the break), afternoon resumes on its own
    // grid at 14:00 and ends 17:00.
    assert_eq!(slots.len(), 14);
    assert_eq!(slots.first().unwrap(), "09:00");
    assert_eq!(slots.last().unwrap(), "17:00");
    assert!(slots.contains(&"12:00".to_string()));
    assert!(!slots.contains(&"12:30".to_string()));
    assert!(!slots.contains(&"13:00".to_string()));
    assert!(slots.contains(&"14:00".to_string()));
}

#[tokio::test]
async fn test_day_without_schedule_has_no_slots() {
    let app = TestApp::new().await;
    let (bid, sid) = setup_business_with_service(&app, "noday").await;

    // Tuesday has no weekly row.
    let slots = fetch_slots(&app, &bid, &sid, "2026-09-15").await;
    assert!(slots.is_empty());
}

#[tokio::test]
async fn test_closed_special_day_has_no_slots() {
    let app = TestApp::new().await;
    let (bid, sid) = setup_business_with_service(&app, "closed").await;

    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri(format!("/api/v1/{}/special-days", bid))
            .header("Content-Type", "application/json")
            .body(Body::from(json!({
                "date": MONDAY,
                "is_closed": true
            }).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let slots = fetch_slots(&app, &bid, &sid, MONDAY).await;
    assert!(slots.is_empty(), "Closed day must yield no slots");
}

#[tokio::test]
async fn test_special_day_replaces_weekly_hours() {
    let app = TestApp::new().await;
    let (bid, sid) = setup_business_with_service(&app, "replace").await;

    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri(format!("/api/v1/{}/special-days", bid))
            .header("Content-Type", "application/json")
            .body(Body::from(json!({
                "date": MONDAY,
                "is_closed": false,
                "intervals": [{"start": "13:00", "end": "15:00"}]
            }).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let slots = fetch_slots(&app, &bid, &sid, MONDAY).await;
    assert_eq!(slots, vec!["13:00", "13:30", "14:00"]);
}

#[tokio::test]
async fn test_special_day_deletion_restores_weekly_hours() {
    let app = TestApp::new().await;
    let (bid, sid) = setup_business_with_service(&app, "restore").await;

    app.router.clone().oneshot(
        Request::builder().method("POST").uri(format!("/api/v1/{}/special-days", bid))
            .header("Content-Type", "application/json")
            .body(Body::from(json!({"date": MONDAY, "is_closed": true}).to_string())).unwrap()
    ).await.unwrap();

    assert!(fetch_slots(&app, &bid, &sid, MONDAY).await.is_empty());

    let res = app.router.clone().oneshot(
        Request::builder().method("DELETE")
            .uri(format!("/api/v1/{}/special-days/{}", bid, MONDAY))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    assert_eq!(fetch_slots(&app, &bid, &sid, MONDAY).await.len(), 14);
}

#[tokio::test]
async fn test_slot_consumption_respects_buffers() {
    let app = TestApp::new().await;
    let (bid, sid) = setup_business_with_service(&app, "consume").await;

    let res = app.router.clone().oneshot(
        Request::builder().method("POST")
            .uri(format!("/api/v1/{}/services/{}/book", bid, sid))
            .header("Content-Type", "application/json")
            .body(Body::from(json!({
                "date": MONDAY,
                "time": "10:00",
                "name": "Ada",
                "phone": "+4915112345678"
            }).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let slots = fetch_slots(&app, &bid, &sid, MONDAY).await;

    // The booking blocks 10:00-10:40 (30 min + its cleaning buffer).
    // 09:30 also drops out: its 40 min window would reach 10:10.
    assert_eq!(slots.len(), 11);
    assert!(slots.contains(&"09:00".to_string()));
    assert!(!slots.contains(&"09:30".to_string()));
    assert!(!slots.contains(&"10:00".to_string()));
    assert!(!slots.contains(&"10:30".to_string()));
    assert!(slots.contains(&"11:00".to_string()));
}

#[tokio::test]
async fn test_invalid_schedule_interval_rejected() {
    let app = TestApp::new().await;
    let (bid, _sid) = setup_business_with_service(&app, "badinterval").await;

    let res = app.router.clone().oneshot(
        Request::builder().method("PUT").uri(format!("/api/v1/{}/schedule", bid))
            .header("Content-Type", "application/json")
            .body(Body::from(json!([{
                "weekday": 1,
                "intervals": [{"start": "18:00", "end": "09:00"}]
            }]).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_business_is_not_found() {
    let app = TestApp::new().await;

    let res = app.router.clone().oneshot(
        Request::builder().method("GET")
            .uri("/api/v1/nope/services/also-nope/slots?date=2026-09-14")
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
