//! Flow Error Types
//!
//! Everything the flow can surface to the user as a blocking alert.

use streampay_core::{CoreError, FlowState};
use streampay_gateway::GatewayError;
use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, FlowError>;

/// Errors surfaced by the payment flow
#[derive(Error, Debug)]
pub enum FlowError {
    /// Pre-network validation or configuration failure
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Transaction-initiation failure
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    /// Submit pressed while a previous submit is still in flight
    #[error("a submission is already in flight")]
    SubmissionInFlight,

    /// Action not valid in the current state
    #[error("cannot {action} while in state {from}")]
    InvalidState {
        from: FlowState,
        action: &'static str,
    },
}

impl FlowError {
    /// Get user-friendly message for the alert dialog
    pub fn user_message(&self) -> &str {
        match self {
            FlowError::Core(e) => e.user_message(),
            FlowError::Gateway(e) => e.user_message(),
            FlowError::SubmissionInFlight => "Your payment is already being processed.",
            FlowError::InvalidState { .. } => "That action is not available right now.",
        }
    }
}
