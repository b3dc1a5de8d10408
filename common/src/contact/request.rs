use std::fmt;

use serde::{Deserialize, Serialize};

use super::email_address::is_valid_email;

pub const NAME_MAX_CHARS: usize = 100;
pub const EMAIL_MAX_CHARS: usize = 255;
pub const MESSAGE_MAX_CHARS: usize = 1000;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContactField::Name => write!(f, "name"),
            ContactField::Email => write!(f, "email"),
            ContactField::Message => write!(f, "message"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: ContactField,
    pub message: String,
}

/// One entry per invalid field, in form order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactValidationError {
    pub errors: Vec<FieldError>,
}

impl ContactValidationError {
    pub fn message_for(&self, field: ContactField) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }
}

impl fmt::Display for ContactValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.errors.iter().map(|e| e.message.as_str()).collect();
        write!(f, "{}", messages.join("; "))
    }
}

impl std::error::Error for ContactValidationError {}

impl ContactRequest {
    pub fn new(name: impl Into<String>, email: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// All three fields have non-blank content.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.message.trim().is_empty()
    }

    /// Copy with surrounding whitespace removed from every field.
    pub fn trimmed(&self) -> ContactRequest {
        ContactRequest {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }

    /// Validates the trimmed fields and returns the trimmed request on success.
    pub fn validate_fields(&self) -> Result<ContactRequest, ContactValidationError> {
        let trimmed = self.trimmed();
        let errors: Vec<FieldError> = [
            (ContactField::Name, check_name(&trimmed.name)),
            (ContactField::Email, check_email(&trimmed.email)),
            (ContactField::Message, check_message(&trimmed.message)),
        ]
        .into_iter()
        .filter_map(|(field, result)| {
            result.err().map(|message| FieldError {
                field,
                message: message.to_string(),
            })
        })
        .collect();

        if errors.is_empty() {
            Ok(trimmed)
        } else {
            Err(ContactValidationError { errors })
        }
    }
}

fn check_name(name: &str) -> Result<(), &'static str> {
    if name.is_empty() {
        return Err("Name is required");
    }
    if name.chars().count() > NAME_MAX_CHARS {
        return Err("Name must be less than 100 characters");
    }
    Ok(())
}

fn check_email(email: &str) -> Result<(), &'static str> {
    if email.is_empty() {
        return Err("Email is required");
    }
    if email.chars().count() > EMAIL_MAX_CHARS {
        return Err("Email must be less than 255 characters");
    }
    if !is_valid_email(email) {
        return Err("Invalid email address");
    }
    Ok(())
}

fn check_message(message: &str) -> Result<(), &'static str> {
    if message.is_empty() {
        return Err("Message is required");
    }
    if message.chars().count() > MESSAGE_MAX_CHARS {
        return Err("Message must be less than 1000 characters");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_name_is_reported() {
        let request = ContactRequest::new("", "a@b.com", "hi");
        let err = request.validate_fields().unwrap_err();
        assert_eq!(err.errors.len(), 1);
        assert_eq!(err.message_for(ContactField::Name), Some("Name is required"));
    }

    #[test]
    fn test_valid_request_is_trimmed() {
        let request = ContactRequest::new("  Ada ", " ada@example.com ", "\nHello there\n");
        let valid = request.validate_fields().unwrap();
        assert_eq!(valid, ContactRequest::new("Ada", "ada@example.com", "Hello there"));
    }

    #[test]
    fn test_blank_fields_count_as_missing() {
        let request = ContactRequest::new("   ", "\t", " ");
        let err = request.validate_fields().unwrap_err();
        let fields: Vec<ContactField> = err.errors.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec![ContactField::Name, ContactField::Email, ContactField::Message]
        );
        assert_eq!(err.message_for(ContactField::Email), Some("Email is required"));
        assert_eq!(err.message_for(ContactField::Message), Some("Message is required"));
    }

    #[test]
    fn test_length_limits_are_inclusive() {
        let request = ContactRequest::new("n".repeat(100), "a@b.com", "m".repeat(1000));
        assert!(request.validate_fields().is_ok());

        let request = ContactRequest::new("n".repeat(101), "a@b.com", "m".repeat(1001));
        let err = request.validate_fields().unwrap_err();
        assert_eq!(
            err.message_for(ContactField::Name),
            Some("Name must be less than 100 characters")
        );
        assert_eq!(
            err.message_for(ContactField::Message),
            Some("Message must be less than 1000 characters")
        );
    }

    #[test]
    fn test_email_rules() {
        let request = ContactRequest::new("Ada", "not-an-email", "hi");
        let err = request.validate_fields().unwrap_err();
        assert_eq!(err.message_for(ContactField::Email), Some("Invalid email address"));

        let long_email = format!("{}@{}.com", "a".repeat(60), "b".repeat(200));
        let request = ContactRequest::new("Ada", long_email, "hi");
        let err = request.validate_fields().unwrap_err();
        assert_eq!(
            err.message_for(ContactField::Email),
            Some("Email must be less than 255 characters")
        );
    }

    #[test]
    fn test_is_complete() {
        assert!(!ContactRequest::new("Ada", "", "hi").is_complete());
        assert!(!ContactRequest::default().is_complete());
        assert!(ContactRequest::new("Ada", "x", "hi").is_complete());
    }

    #[test]
    fn test_display_joins_messages() {
        let err = ContactRequest::new("", "", "hi").validate_fields().unwrap_err();
        assert_eq!(err.to_string(), "Name is required; Email is required");
    }
}
