use std::time::Duration;

use common::contact::{ContactRequest, ContactValidationError};
use common::{log, log_error};
use reqwest::Client;

pub const RETRY_PROMPT: &str = "Failed to send message. Please try again.";
pub const SENT_MESSAGE: &str = "Message sent! I'll get back to you soon.";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

#[derive(Debug)]
pub enum SubmitOutcome {
    /// Rejected locally; nothing was sent.
    Invalid(ContactValidationError),
    Sent,
    /// The relay was unreachable or refused the request. `reason` is for the log only.
    Failed { reason: String },
}

impl SubmitOutcome {
    pub fn is_sent(&self) -> bool {
        matches!(self, SubmitOutcome::Sent)
    }

    /// Text shown to the visitor.
    pub fn user_message(&self) -> String {
        match self {
            SubmitOutcome::Invalid(e) => e
                .errors
                .iter()
                .map(|error| format!("{}: {}", error.field, error.message))
                .collect::<Vec<_>>()
                .join("\n"),
            SubmitOutcome::Sent => SENT_MESSAGE.to_string(),
            SubmitOutcome::Failed { .. } => RETRY_PROMPT.to_string(),
        }
    }
}

/// Form status line: the form is powered once every field has content.
pub fn form_indicator(request: &ContactRequest) -> &'static str {
    if request.is_complete() {
        "[powered] sending message..."
    } else {
        "[unpowered] name, email and message are all required"
    }
}

pub struct ContactClient {
    http: Client,
    relay_url: String,
}

impl ContactClient {
    pub fn new(relay_url: impl Into<String>) -> Result<Self, String> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| format!("Failed to build HTTP client: {}", e))?;
        Ok(Self {
            http,
            relay_url: relay_url.into(),
        })
    }

    pub async fn submit(&self, request: &ContactRequest) -> SubmitOutcome {
        let request = match request.validate_fields() {
            Ok(request) => request,
            Err(e) => {
                log!("Contact form not sent, validation failed: {}", e);
                return SubmitOutcome::Invalid(e);
            }
        };

        let response = match self.http.post(&self.relay_url).json(&request).send().await {
            Ok(response) => response,
            Err(e) => {
                log_error!("Contact relay unreachable at {}: {}", self.relay_url, e);
                return SubmitOutcome::Failed {
                    reason: e.to_string(),
                };
            }
        };

        let status = response.status();
        if status.is_success() {
            log!("Contact form delivered to relay");
            return SubmitOutcome::Sent;
        }

        let body = response.text().await.unwrap_or_default();
        log_error!("Contact relay answered {}: {}", status, body);
        SubmitOutcome::Failed {
            reason: format!("{}: {}", status, body),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Answers exactly one HTTP request with `status_line` and returns the raw request.
    async fn one_shot_relay(status_line: &'static str) -> (String, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/send-contact-email", listener.local_addr().unwrap());
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut received = Vec::new();
            let mut buffer = [0u8; 4096];
            loop {
                let read = socket.read(&mut buffer).await.unwrap();
                received.extend_from_slice(&buffer[..read]);
                let text = String::from_utf8_lossy(&received);
                if read == 0 || (text.contains("\r\n\r\n") && text.trim_end().ends_with('}')) {
                    break;
                }
            }
            let body = "{}";
            let response = format!(
                "HTTP/1.1 {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            String::from_utf8_lossy(&received).into_owned()
        });
        (url, handle)
    }

    #[test]
    fn test_form_indicator_tracks_completeness() {
        let filled = ContactRequest::new("Ada", "ada@example.com", "Hello");
        assert!(form_indicator(&filled).starts_with("[powered]"));

        let blank_message = ContactRequest::new("Ada", "ada@example.com", "   ");
        assert!(form_indicator(&blank_message).starts_with("[unpowered]"));
    }

    #[tokio::test]
    async fn test_invalid_request_is_not_sent() {
        let client = ContactClient::new("http://127.0.0.1:9/never-called").unwrap();
        let outcome = client.submit(&ContactRequest::new("", "a@b.com", "hi")).await;

        let SubmitOutcome::Invalid(e) = &outcome else {
            panic!("expected validation failure, got {:?}", outcome);
        };
        assert_eq!(e.errors.len(), 1);
        assert_eq!(outcome.user_message(), "name: Name is required");
    }

    #[tokio::test]
    async fn test_successful_submission_posts_trimmed_json() {
        let (url, relay) = one_shot_relay("200 OK").await;
        let client = ContactClient::new(url).unwrap();

        let outcome = client
            .submit(&ContactRequest::new(" Ada ", "ada@example.com", "Hello"))
            .await;

        assert!(outcome.is_sent());
        assert_eq!(outcome.user_message(), SENT_MESSAGE);
        let raw = relay.await.unwrap();
        assert!(raw.starts_with("POST /send-contact-email"));
        assert!(raw.contains(r#""name":"Ada""#));
    }

    #[tokio::test]
    async fn test_relay_error_becomes_retry_prompt() {
        let (url, relay) = one_shot_relay("500 Internal Server Error").await;
        let client = ContactClient::new(url).unwrap();

        let outcome = client
            .submit(&ContactRequest::new("Ada", "ada@example.com", "Hello"))
            .await;

        assert!(matches!(outcome, SubmitOutcome::Failed { .. }));
        assert_eq!(outcome.user_message(), RETRY_PROMPT);
        relay.await.unwrap();
    }

    #[tokio::test]
    async fn test_unreachable_relay_becomes_retry_prompt() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/send-contact-email", listener.local_addr().unwrap());
        drop(listener);

        let client = ContactClient::new(url).unwrap();
        let outcome = client
            .submit(&ContactRequest::new("Ada", "ada@example.com", "Hello"))
            .await;

        assert!(matches!(outcome, SubmitOutcome::Failed { .. }));
    }
}
