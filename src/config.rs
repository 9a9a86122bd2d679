use std::env;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub notify_service_url: String,
    pub notify_service_token: String,
    pub default_slot_step_min: i32,
    pub reminder_lookahead_min: i64,
    pub reminder_poll_secs: u64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            port: env::var("PORT").unwrap_or_else(|_| "3000".to_string()).parse().expect("PORT must be a number"),
            notify_service_url: env::var("NOTIFY_SERVICE_URL").unwrap_or_else(|_| "http://localhost:8000/api/v1/messages".to_string()),
            notify_service_token: env::var("NOTIFY_SERVICE_TOKEN").unwrap_or_else(|_| "test-token-1".to_string()),
            default_slot_step_min: env::var("DEFAULT_SLOT_STEP_MIN").unwrap_or_else(|_| "30".to_string()).parse().expect("DEFAULT_SLOT_STEP_MIN must be a number"),
            reminder_lookahead_min: env::var("REMINDER_LOOKAHEAD_MIN").unwrap_or_else(|_| "1440".to_string()).parse().expect("REMINDER_LOOKAHEAD_MIN must be a number"),
            reminder_poll_secs: env::var("REMINDER_POLL_SECS").unwrap_or_else(|_| "900".to_string()).parse().expect("REMINDER_POLL_SECS must be a number"),
        }
    }
}
