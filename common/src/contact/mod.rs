mod email_address;
mod request;

pub use email_address::is_valid_email;
pub use request::{
    ContactField, ContactRequest, ContactValidationError, EMAIL_MAX_CHARS, FieldError,
    MESSAGE_MAX_CHARS, NAME_MAX_CHARS,
};
