use crate::domain::ports::NotificationService;
use crate::error::AppError;
use async_trait::async_trait;
use serde::Serialize;
use tracing::error;

pub struct HttpNotificationService {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
}

impl HttpNotificationService {
    pub fn new(api_url: String, api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
            api_key,
        }
    }
}

#[derive(Serialize)]
struct MessagePayload<'a> {
    to: &'a str,
    body: &'a str,
}

#[async_trait]
impl NotificationService for HttpNotificationService {
    async fn send(&self, phone: &str, message: &str) -> Result<(), AppError> {
        let payload = MessagePayload { to: phone, body: message };

        let response = self.client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                error!("Notification service connection error: {}", e);
                AppError::InternalWithMsg(format!("Notification service connection error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!("Notification service returned {}: {}", status, body);
            return Err(AppError::InternalWithMsg(format!(
                "Notification service returned {}: {}", status, body
            )));
        }

        Ok(())
    }
}
