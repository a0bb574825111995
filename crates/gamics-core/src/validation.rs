//! Contact form validation.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::markup::FIELD_NAMES;
use crate::page::{ElementId, Page};

static RE_EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// `local@domain.tld`: no whitespace, exactly one `@`, a dot after it
pub fn is_valid_email(email: &str) -> bool {
    RE_EMAIL.is_match(email)
}

/// The four contact form fields, trimmed, as captured at submit time
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into().trim().to_string(),
            email: email.into().trim().to_string(),
            subject: subject.into().trim().to_string(),
            message: message.into().trim().to_string(),
        }
    }

    /// Read the named controls of `form`; a missing control reads as empty
    pub fn from_page(page: &dyn Page, form: ElementId) -> Self {
        let [name, email, subject, message] =
            FIELD_NAMES.map(|field| page.form_value(form, field).unwrap_or_default());
        Self::new(name, email, subject, message)
    }

    /// Presence first, then email shape; stops at the first failure
    pub fn validate(&self) -> Result<(), ValidationError> {
        let fields = [&self.name, &self.email, &self.subject, &self.message];
        if fields.iter().any(|field| field.is_empty()) {
            return Err(ValidationError::MissingFields);
        }
        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(())
    }
}
