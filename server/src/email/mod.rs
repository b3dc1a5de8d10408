mod resend_client;
mod sender;
mod templates;

pub use resend_client::ResendClient;
pub use sender::{EmailError, EmailSender, OutgoingEmail};
pub use templates::{MailIdentities, confirmation_email, notification_email};
