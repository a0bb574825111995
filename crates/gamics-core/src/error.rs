//! Error types for the Gamics contact page

use thiserror::Error;

/// Reasons a contact form submission is rejected before it is sent.
///
/// The `Display` text is what the visitor sees in the error notification.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// At least one of name, email, subject, message is empty after trimming
    #[error("Por favor, completa todos los campos")]
    MissingFields,

    /// The email does not look like `local@domain.tld`
    #[error("Por favor, ingresa un email válido")]
    InvalidEmail,
}

/// Errors raised while driving a page outside the browser
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContactError {
    /// No element matched the selector
    #[error("Selector not found: {0}")]
    SelectorNotFound(String),

    /// A scripted expectation did not hold
    #[error("Expectation failed: expected {expected}, found {actual}")]
    ExpectationFailed { expected: String, actual: String },
}

/// Result type alias using ContactError
pub type ContactResult<T> = Result<T, ContactError>;
