use std::fmt;
use std::future::Future;

use serde::Serialize;

/// Body of one provider call; serialises to the provider's JSON shape.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OutgoingEmail {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html: String,
}

#[derive(Debug)]
pub enum EmailError {
    /// The request never produced a response (DNS, TLS, timeout).
    Transport(String),
    /// The provider answered with a non-success status.
    Rejected { status: u16, body: String },
}

impl fmt::Display for EmailError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmailError::Transport(e) => write!(f, "{}", e),
            EmailError::Rejected { status, body } if body.trim().is_empty() => {
                write!(f, "provider returned status {}", status)
            }
            EmailError::Rejected { body, .. } => write!(f, "{}", body),
        }
    }
}

impl std::error::Error for EmailError {}

pub trait EmailSender: Send + Sync + 'static {
    fn send(&self, email: &OutgoingEmail) -> impl Future<Output = Result<(), EmailError>> + Send;
}
