//! Core Error Types

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors raised before any network call is made
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Flow entered without a selected plan
    #[error("no plan selected")]
    NoPlanSelected,

    /// Submit pressed with no payment method chosen
    #[error("no payment method selected")]
    NoMethodSelected,

    /// Submit pressed with required fields still empty
    #[error("missing required fields: {0:?}")]
    MissingFields(Vec<&'static str>),
}

impl CoreError {
    /// Get user-friendly message
    pub fn user_message(&self) -> &str {
        match self {
            CoreError::NoPlanSelected => "No plan selected. Please choose a plan first.",
            CoreError::NoMethodSelected => "Please select a payment method.",
            CoreError::MissingFields(_) => "Please fill in all payment details.",
        }
    }
}
