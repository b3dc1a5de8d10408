use std::fmt;
use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::json;

use common::contact::{ContactRequest, ContactValidationError};
use common::{log, log_error};

use crate::email::{EmailError, EmailSender, MailIdentities, confirmation_email, notification_email};

const LOGGED_MESSAGE_CHARS: usize = 50;

/// Shared by every request: the mail transport plus who mails go to and from.
pub struct RelayState<E: EmailSender> {
    sender: Arc<E>,
    identities: Arc<MailIdentities>,
}

impl<E: EmailSender> Clone for RelayState<E> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
            identities: self.identities.clone(),
        }
    }
}

impl<E: EmailSender> RelayState<E> {
    pub fn new(sender: Arc<E>, identities: MailIdentities) -> Self {
        Self {
            sender,
            identities: Arc::new(identities),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RelaySuccess {
    pub success: bool,
    pub message: String,
}

#[derive(Debug)]
pub enum RelayError {
    BadRequest(String),
    Validation(ContactValidationError),
    Notification(EmailError),
}

impl fmt::Display for RelayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelayError::BadRequest(reason) => write!(f, "Invalid request body: {}", reason),
            RelayError::Validation(e) => write!(f, "Validation failed: {}", e),
            RelayError::Notification(e) => write!(f, "Failed to send notification: {}", e),
        }
    }
}

impl std::error::Error for RelayError {}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            RelayError::BadRequest(_) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": self.to_string() }),
            ),
            RelayError::Validation(e) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "Validation failed", "fields": e.errors }),
            ),
            RelayError::Notification(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": self.to_string() }),
            ),
        };
        (status, Json(body)).into_response()
    }
}

fn preview(message: &str) -> String {
    let mut shortened: String = message.chars().take(LOGGED_MESSAGE_CHARS).collect();
    if message.chars().count() > LOGGED_MESSAGE_CHARS {
        shortened.push_str("...");
    }
    shortened
}

/// Notifies the owner, then thanks the submitter. Only the first mail is required to succeed.
pub async fn send_contact_email<E: EmailSender>(
    State(state): State<RelayState<E>>,
    payload: Result<Json<ContactRequest>, JsonRejection>,
) -> Result<Json<RelaySuccess>, RelayError> {
    let Json(request) = payload.map_err(|rejection| {
        log_error!("Rejected contact request: {}", rejection.body_text());
        RelayError::BadRequest(rejection.body_text())
    })?;

    let request = request.validate_fields().map_err(|e| {
        log!("Contact request failed validation: {}", e);
        RelayError::Validation(e)
    })?;

    log!(
        "Received contact form submission: name={}, email={}, message={}",
        request.name,
        request.email,
        preview(&request.message)
    );

    let notification = notification_email(&state.identities, &request);
    if let Err(e) = state.sender.send(&notification).await {
        log_error!("Failed to send notification email: {}", e);
        return Err(RelayError::Notification(e));
    }
    log!("Notification email sent successfully");

    let confirmation = confirmation_email(&state.identities, &request);
    match state.sender.send(&confirmation).await {
        Ok(()) => log!("Confirmation email sent successfully"),
        Err(e) => log_error!("Failed to send confirmation email: {}", e),
    }

    Ok(Json(RelaySuccess {
        success: true,
        message: "Emails sent successfully".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_truncates_long_messages() {
        let long = "x".repeat(80);
        assert_eq!(preview(&long), format!("{}...", "x".repeat(50)));
        assert_eq!(preview("short"), "short");
    }

    #[test]
    fn test_notification_error_message() {
        let err = RelayError::Notification(EmailError::Transport("timed out".to_string()));
        assert_eq!(err.to_string(), "Failed to send notification: timed out");
    }
}
