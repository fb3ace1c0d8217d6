//! Gateway Error Types

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Errors from the transaction-initiation call
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Missing or unusable configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network or transport failure reaching the gateway
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Gateway answered with a non-success status
    #[error("Gateway declined: status={status} message={message:?}")]
    Gateway {
        status: String,
        message: Option<String>,
    },

    /// Gateway reported success but returned no checkout URL
    #[error("Gateway response missing checkout URL")]
    MissingCheckoutUrl,
}

impl GatewayError {
    /// Get user-friendly message
    pub fn user_message(&self) -> &str {
        match self {
            GatewayError::Config(_) => "Payment service is not configured.",
            GatewayError::Transport(_) => {
                "Could not reach the payment service. Check your connection and try again."
            }
            GatewayError::Gateway { .. } | GatewayError::MissingCheckoutUrl => {
                "Payment could not be started. Please try again."
            }
        }
    }
}
