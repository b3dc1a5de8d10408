use common::contact::ContactRequest;

use crate::server_config::ServerConfig;
use super::sender::OutgoingEmail;

pub const CONFIRMATION_SUBJECT: &str = "Thanks for reaching out!";

/// Addresses and display names used on both outgoing mails.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MailIdentities {
    pub owner_email: String,
    pub owner_name: String,
    pub notification_sender: String,
    pub confirmation_sender: String,
}

impl From<&ServerConfig> for MailIdentities {
    fn from(config: &ServerConfig) -> Self {
        Self {
            owner_email: config.owner_email.clone(),
            owner_name: config.owner_name.clone(),
            notification_sender: config.notification_sender.clone(),
            confirmation_sender: config.confirmation_sender.clone(),
        }
    }
}

pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Mail to the site owner carrying the full submission.
pub fn notification_email(identities: &MailIdentities, request: &ContactRequest) -> OutgoingEmail {
    let html = format!(
        r#"<div style="font-family: 'Courier New', monospace; background: #0a0a0a; color: #e5e5e5; padding: 40px; border-radius: 8px;">
  <h1 style="color: #00ff88; margin-bottom: 24px;">New Contact Form Submission</h1>
  <div style="background: #1a1a1a; padding: 24px; border-radius: 8px; border-left: 4px solid #00ff88;">
    <p style="margin: 8px 0;"><strong style="color: #00ff88;">From:</strong> {name}</p>
    <p style="margin: 8px 0;"><strong style="color: #00ff88;">Email:</strong> {email}</p>
    <p style="margin: 16px 0 8px;"><strong style="color: #00ff88;">Message:</strong></p>
    <p style="white-space: pre-wrap; line-height: 1.6;">{message}</p>
  </div>
  <p style="margin-top: 24px; color: #666; font-size: 12px;">Sent from your portfolio contact form</p>
</div>"#,
        name = escape_html(&request.name),
        email = escape_html(&request.email),
        message = escape_html(&request.message),
    );

    OutgoingEmail {
        from: identities.notification_sender.clone(),
        to: vec![identities.owner_email.clone()],
        subject: format!("New Contact Form Message from {}", request.name),
        html,
    }
}

/// Acknowledgement sent back to the visitor.
pub fn confirmation_email(identities: &MailIdentities, request: &ContactRequest) -> OutgoingEmail {
    let html = format!(
        r#"<div style="font-family: 'Courier New', monospace; background: #0a0a0a; color: #e5e5e5; padding: 40px; border-radius: 8px;">
  <h1 style="color: #00ff88; margin-bottom: 24px;">Hey {name}!</h1>
  <p style="line-height: 1.8; margin-bottom: 16px;">Thanks for reaching out! I've received your message and will get back to you as soon as possible.</p>
  <p style="line-height: 1.8; margin-bottom: 24px;">In the meantime, feel free to check out my latest projects or connect with me on social media.</p>
  <p style="color: #00ff88;">Best regards,<br/>{owner}</p>
  <div style="margin-top: 32px; padding-top: 24px; border-top: 1px solid #333;">
    <p style="color: #666; font-size: 12px; margin: 0;">&lt;/&gt; Built with passion</p>
  </div>
</div>"#,
        name = escape_html(&request.name),
        owner = escape_html(&identities.owner_name),
    );

    OutgoingEmail {
        from: identities.confirmation_sender.clone(),
        to: vec![request.email.clone()],
        subject: CONFIRMATION_SUBJECT.to_string(),
        html,
    }
}
