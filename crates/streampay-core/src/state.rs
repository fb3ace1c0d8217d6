//! Flow State Machine
//!
//! `Idle → MethodSelected → FormEntry → Submitting → Checkout → {Success, Failure}`
//!
//! Success and Failure are terminal for a flow instance; Checkout may be
//! abandoned back to FormEntry by user navigation.

use serde::{Deserialize, Serialize};

/// Where a payment flow instance currently is
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlowState {
    /// No method chosen yet
    Idle,
    /// Method picked, form not yet touched
    MethodSelected,
    /// User is filling in method details
    FormEntry,
    /// Initiation call in flight; submits are gated
    Submitting,
    /// Hosted checkout page is being presented
    Checkout,
    /// Terminal: gateway redirected to the success callback
    Success,
    /// Terminal: gateway redirected to the failure callback
    Failure,
}

impl FlowState {
    /// Whether this state ends the flow instance
    pub fn is_terminal(&self) -> bool {
        matches!(self, FlowState::Success | FlowState::Failure)
    }

    /// Whether a submit is currently allowed to start
    pub fn can_submit(&self) -> bool {
        matches!(self, FlowState::MethodSelected | FlowState::FormEntry)
    }
}

impl std::fmt::Display for FlowState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            FlowState::Idle => "idle",
            FlowState::MethodSelected => "method_selected",
            FlowState::FormEntry => "form_entry",
            FlowState::Submitting => "submitting",
            FlowState::Checkout => "checkout",
            FlowState::Success => "success",
            FlowState::Failure => "failure",
        };
        write!(f, "{name}")
    }
}
