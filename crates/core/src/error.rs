//! Inquiry error model.

use thiserror::Error;

/// Alert shown for every failed submission, whatever the cause.
pub const SUBMIT_FAILURE_MESSAGE: &str =
    "There was an error submitting your inquiry. Please try again or contact us directly.";

/// Result type used by the validator.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// User input failed a required-field or format check.
///
/// The `Display` text of each variant is the exact message shown to the visitor.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// At least one required field is empty after trimming.
    #[error("Please fill in all required fields.")]
    MissingRequired,

    /// Email is not shaped like `local@domain.tld`.
    #[error("Please enter a valid email address.")]
    InvalidEmail,

    /// Phone contains something other than digits, whitespace, `-`, `(`, `)` or `+`.
    #[error("Please enter a valid phone number.")]
    InvalidPhone,
}

impl ValidationError {
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

/// A submission attempt that did not succeed.
///
/// Backend-reported failures and transport failures are distinct here for logging,
/// but the visitor sees the same message for all of them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// The backend answered, but not with `{"success": true}`. Carries the
    /// backend's `message`, if it sent one.
    #[error("backend rejected the inquiry: {}", .0.as_deref().unwrap_or("no message"))]
    Rejected(Option<String>),

    /// The request could not be sent or its response could not be read.
    #[error("transport error: {0}")]
    Transport(String),

    /// The response body was not JSON.
    #[error("could not decode response: {0}")]
    Decode(String),
}

impl SubmitError {
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    pub fn rejected(message: Option<String>) -> Self {
        Self::Rejected(message)
    }

    pub fn user_message(&self) -> &'static str {
        SUBMIT_FAILURE_MESSAGE
    }
}
