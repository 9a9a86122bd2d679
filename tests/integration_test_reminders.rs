mod common;

use appointment_backend::background::run_reminder_scan;
use appointment_backend::domain::models::booking::{Booking, NewBookingParams};
use appointment_backend::domain::services::intervals::TimeInterval;
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use chrono::{DateTime, Duration, Timelike, Utc};
use chrono_tz::Tz;
use common::TestApp;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn parse_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn create_business(app: &TestApp, slug: &str, timezone: &str) -> String {
    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri("/api/v1/businesses")
            .header("Content-Type", "application/json")
            .body(Body::from(json!({
                "name": "Reminder Spa",
                "slug": slug,
                "timezone": timezone,
                "slot_step_min": 30
            }).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    parse_body(res).await["id"].as_str().unwrap().to_string()
}

async fn create_service(app: &TestApp, business_id: &str) -> String {
    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri(format!("/api/v1/{}/services", business_id))
            .header("Content-Type", "application/json")
            .body(Body::from(json!({
                "name": "Massage",
                "duration_min": 30,
                "cleaning_min": 0,
                "price_cents": 5000
            }).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    parse_body(res).await["id"].as_str().unwrap().to_string()
}

/// A wall-clock instant ~30 min from now, nudged away from the midnight
/// boundary so the computed start/end stays inside one calendar day.
fn near_future_in(tz: Tz) -> DateTime<Tz> {
    let mut target = Utc::now().with_timezone(&tz) + Duration::minutes(30);
    if target.time().hour() >= 23 {
        target = target + Duration::hours(2);
    }
    target
}

/// Writes the booking through the repository with a fully open day so the
/// test controls the start time without touching weekly schedules.
async fn insert_booking_at(
    app: &TestApp,
    business_id: &str,
    service_id: &str,
    target: DateTime<Tz>,
    phone: &str,
) -> Booking {
    let start_min = (target.time().hour() * 60 + target.time().minute()) as i32;
    let booking = Booking::new(NewBookingParams {
        business_id: business_id.to_string(),
        service_id: service_id.to_string(),
        date: target.date_naive(),
        start_min,
        duration_min: 30,
        name: "Ada".to_string(),
        phone: phone.to_string(),
        note: None,
    });

    let open = vec![TimeInterval { start_min: 0, end_min: 1440 }];
    app.state.booking_repo.create_checked(&booking, 0, &open).await.unwrap()
}

#[tokio::test]
async fn test_scan_sends_reminder_once() {
    let app = TestApp::new().await;
    let bid = create_business(&app, "spa-once", "UTC").await;
    let sid = create_service(&app, &bid).await;

    let target = near_future_in(chrono_tz::UTC);
    let booking = insert_booking_at(&app, &bid, &sid, target, "+4915111111111").await;

    let sent = run_reminder_scan(&app.state).await.unwrap();
    assert_eq!(sent, 1);

    let messages = app.notifications.sent.lock().unwrap().clone();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].0, "+4915111111111");
    assert!(messages[0].1.contains("Massage"));
    assert!(messages[0].1.contains("Reminder Spa"));

    let stored = app.state.booking_repo
        .find_by_client_key(&booking.client_key).await.unwrap().unwrap();
    assert!(stored.reminder_sent);

    // The booking is marked, so a second pass finds nothing.
    let sent = run_reminder_scan(&app.state).await.unwrap();
    assert_eq!(sent, 0);
}

#[tokio::test]
async fn test_scan_skips_bookings_beyond_lookahead() {
    let app = TestApp::new().await;
    let bid = create_business(&app, "spa-far", "UTC").await;
    let sid = create_service(&app, &bid).await;

    // Lookahead in the test config is 24h; place the booking well past it
    // but still inside the scan's date window.
    let target = near_future_in(chrono_tz::UTC) + Duration::hours(40);
    insert_booking_at(&app, &bid, &sid, target, "+4915122222222").await;

    let sent = run_reminder_scan(&app.state).await.unwrap();
    assert_eq!(sent, 0);
    assert!(app.notifications.sent.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_scan_skips_cancelled_bookings() {
    let app = TestApp::new().await;
    let bid = create_business(&app, "spa-cancel", "UTC").await;
    let sid = create_service(&app, &bid).await;

    let target = near_future_in(chrono_tz::UTC);
    let booking = insert_booking_at(&app, &bid, &sid, target, "+4915133333333").await;
    app.state.booking_repo.cancel(&booking.id).await.unwrap();

    let sent = run_reminder_scan(&app.state).await.unwrap();
    assert_eq!(sent, 0);
}

#[tokio::test]
async fn test_scan_uses_business_local_time() {
    let app = TestApp::new().await;
    let bid = create_business(&app, "spa-ny", "America/New_York").await;
    let sid = create_service(&app, &bid).await;

    // The stored wall-clock time only lands inside the window when it is
    // read in the business's own zone.
    let target = near_future_in(chrono_tz::America::New_York);
    insert_booking_at(&app, &bid, &sid, target, "+12125550123").await;

    let sent = run_reminder_scan(&app.state).await.unwrap();
    assert_eq!(sent, 1);
}
