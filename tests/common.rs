use appointment_backend::{
    api::router::create_router,
    state::AppState,
    config::Config,
    infra::repositories::{
        sqlite_booking_repo::SqliteBookingRepo,
        sqlite_business_repo::SqliteBusinessRepo,
        sqlite_schedule_repo::SqliteScheduleRepo,
        sqlite_service_repo::SqliteServiceRepo,
        sqlite_special_day_repo::SqliteSpecialDayRepo,
    },
    domain::ports::NotificationService,
    error::AppError,
};
use sqlx::{sqlite::{SqliteConnectOptions, SqlitePoolOptions}, Pool, Sqlite};
use std::str::FromStr;
use std::sync::{Arc, Mutex};
use uuid::Uuid;
use axum::Router;
use async_trait::async_trait;

pub struct MockNotificationService {
    pub sent: Mutex<Vec<(String, String)>>,
}

impl MockNotificationService {
    pub fn new() -> Self {
        Self { sent: Mutex::new(Vec::new()) }
    }
}

#[async_trait]
impl NotificationService for MockNotificationService {
    async fn send(&self, phone: &str, message: &str) -> Result<(), AppError> {
        self.sent.lock().unwrap().push((phone.to_string(), message.to_string()));
        Ok(())
    }
}

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
    pub notifications: Arc<MockNotificationService>,
}

impl TestApp {
    pub async fn new() -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        sqlx::migrate!("./migrations/sqlite")
            .run(&pool)
            .await
            .expect("Failed to migrate test db");

        let config = Config {
            database_url: db_url.clone(),
            port: 0,
            notify_service_url: "http://localhost".to_string(),
            notify_service_token: "token".to_string(),
            default_slot_step_min: 30,
            reminder_lookahead_min: 1440,
            reminder_poll_secs: 900,
        };

        let notifications = Arc::new(MockNotificationService::new());

        let state = Arc::new(AppState {
            config: config.clone(),
            business_repo: Arc::new(SqliteBusinessRepo::new(pool.clone())),
            service_repo: Arc::new(SqliteServiceRepo::new(pool.clone())),
            schedule_repo: Arc::new(SqliteScheduleRepo::new(pool.clone())),
            special_day_repo: Arc::new(SqliteSpecialDayRepo::new(pool.clone())),
            booking_repo: Arc::new(SqliteBookingRepo::new(pool.clone())),
            notification_service: notifications.clone(),
        });

        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
            notifications,
        }
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
    }
}
