//! Mock Gateway
//!
//! For testing and demo purposes. Records every initiation request and
//! answers with a configurable canned outcome instead of hitting the
//! network.

use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::client::{InitiatedTransaction, TransactionInitiator};
use crate::error::{GatewayError, Result};
use crate::request::TransactionRequest;

/// Canned outcome for the next initiation calls
#[derive(Clone, Debug)]
enum Outcome {
    /// Issue a checkout session at this URL
    Accept(String),
    /// Answer with a failure status
    Decline { status: String, message: Option<String> },
    /// Answer success but omit the checkout URL (malformed response)
    MissingUrl,
}

/// Mock transaction initiator backed by canned responses
pub struct MockGateway {
    outcome: Outcome,
    requests: Mutex<Vec<TransactionRequest>>,
}

impl Default for MockGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl MockGateway {
    /// Accept every initiation with a fixed checkout URL
    pub fn new() -> Self {
        Self::accepting("https://sandbox.gw.example/checkout/mock")
    }

    /// Accept every initiation with the given checkout URL
    pub fn accepting(checkout_url: impl Into<String>) -> Self {
        Self {
            outcome: Outcome::Accept(checkout_url.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Decline every initiation with the given status
    pub fn declining(status: impl Into<String>, message: Option<String>) -> Self {
        Self {
            outcome: Outcome::Decline {
                status: status.into(),
                message,
            },
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Answer success without a checkout URL
    pub fn missing_url() -> Self {
        Self {
            outcome: Outcome::MissingUrl,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Requests seen so far, in order
    pub fn requests(&self) -> Vec<TransactionRequest> {
        self.seen().clone()
    }

    /// How many initiation calls were made
    pub fn call_count(&self) -> usize {
        self.seen().len()
    }

    /// A panicking test must not hide the requests it already made
    fn seen(&self) -> MutexGuard<'_, Vec<TransactionRequest>> {
        self.requests.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl TransactionInitiator for MockGateway {
    async fn initiate(&self, request: &TransactionRequest) -> Result<InitiatedTransaction> {
        self.seen().push(request.clone());

        match &self.outcome {
            Outcome::Accept(url) => Ok(InitiatedTransaction {
                checkout_url: url.clone(),
                reference: format!("mock-{}", self.call_count()),
            }),
            Outcome::Decline { status, message } => Err(GatewayError::Gateway {
                status: status.clone(),
                message: message.clone(),
            }),
            Outcome::MissingUrl => Err(GatewayError::MissingCheckoutUrl),
        }
    }
}
