use std::time::Duration;

use reqwest::Client;

use super::sender::{EmailError, EmailSender, OutgoingEmail};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Sends mail through the Resend HTTP API with bearer authentication.
pub struct ResendClient {
    http: Client,
    api_url: String,
    api_key: String,
}

impl ResendClient {
    pub fn new(api_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self, String> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| format!("Failed to build HTTP client: {}", e))?;
        Ok(Self {
            http,
            api_url: api_url.into(),
            api_key: api_key.into(),
        })
    }
}

impl EmailSender for ResendClient {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), EmailError> {
        let response = self
            .http
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(email)
            .send()
            .await
            .map_err(|e| EmailError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(EmailError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}
