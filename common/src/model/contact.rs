//! Contact form record forwarded to the external tabular-data service.
//!
//! The payload is a flat row `{name, email, phone, company, message}`.
//! Validation happens here so the form and any other caller agree on what
//! a sendable record is; the HTTP call itself lives in the frontend.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

static EMAIL_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").ok());

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub message: String,
}

/// Required fields, named the way the form labels them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub fn label(self) -> &'static str {
        match self {
            ContactField::Name => "nombre",
            ContactField::Email => "correo",
            ContactField::Message => "mensaje",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("El campo {} es obligatorio.", .0.label())]
    MissingField(ContactField),
    #[error("El correo electrónico no es válido.")]
    InvalidEmail,
}

impl ContactRecord {
    /// Checks the required fields in form order, then the email shape.
    pub fn validate(&self) -> Result<(), ContactError> {
        let required = [
            (ContactField::Name, &self.name),
            (ContactField::Email, &self.email),
            (ContactField::Message, &self.message),
        ];
        if let Some((field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(ContactError::MissingField(*field));
        }
        let email_ok = EMAIL_RE
            .as_ref()
            .is_some_and(|re| re.is_match(self.email.trim()));
        if !email_ok {
            return Err(ContactError::InvalidEmail);
        }
        Ok(())
    }

    /// Trimmed copy suitable for sending.
    pub fn normalized(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            company: self.company.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }

    /// Row body expected by the tabular-data service: `{"fields": {...}}`.
    pub fn to_row_payload(&self) -> serde_json::Value {
        serde_json::json!({ "fields": self.normalized() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactRecord {
        ContactRecord {
            name: "Ana Torres".into(),
            email: "ana@empresa.co".into(),
            phone: "+57 300 000 0000".into(),
            company: "Empresa".into(),
            message: "Quiero una demo".into(),
        }
    }

    #[test]
    fn complete_record_is_valid() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn first_missing_field_is_reported() {
        let record = ContactRecord {
            email: " ".into(),
            message: String::new(),
            ..filled()
        };
        assert_eq!(
            record.validate(),
            Err(ContactError::MissingField(ContactField::Email))
        );
    }

    #[test]
    fn phone_and_company_are_optional() {
        let record = ContactRecord {
            phone: String::new(),
            company: String::new(),
            ..filled()
        };
        assert!(record.validate().is_ok());
    }

    #[test]
    fn malformed_email_is_rejected() {
        let record = ContactRecord {
            email: "ana@empresa".into(),
            ..filled()
        };
        assert_eq!(record.validate(), Err(ContactError::InvalidEmail));
    }

    #[test]
    fn payload_wraps_trimmed_fields() {
        let record = ContactRecord {
            name: "  Ana Torres ".into(),
            ..filled()
        };
        let payload = record.to_row_payload();
        assert_eq!(payload["fields"]["name"], "Ana Torres");
        assert_eq!(payload["fields"]["company"], "Empresa");
    }

    #[test]
    fn missing_field_message_is_user_facing() {
        let err = ContactError::MissingField(ContactField::Name);
        assert_eq!(err.to_string(), "El campo nombre es obligatorio.");
    }
}
