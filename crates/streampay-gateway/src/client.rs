//! Gateway Client
//!
//! One POST per submit. The gateway answers with a status field and, on
//! success, a hosted checkout URL for the embedded browser.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::GatewayConfig;
use crate::error::{GatewayError, Result};
use crate::request::TransactionRequest;

/// Initiation seam (Strategy pattern)
///
/// The flow talks to this trait so tests can swap in [`crate::MockGateway`].
#[async_trait]
pub trait TransactionInitiator: Send + Sync {
    /// Start a transaction, returning the hosted checkout to present
    async fn initiate(&self, request: &TransactionRequest) -> Result<InitiatedTransaction>;
}

/// Wire body: the transaction request plus embedded API credentials
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct InitiatePayload<'a> {
    #[serde(flatten)]
    request: &'a TransactionRequest,
    client_id: &'a str,
    client_key: &'a str,
    client_reference: String,
}

/// Raw gateway response
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InitiateResponse {
    /// "success" or a gateway-specific failure code
    pub status: String,

    /// Hosted checkout URL, present on success
    #[serde(default)]
    pub payment_url: Option<String>,

    /// Human-readable detail on failure
    #[serde(default)]
    pub message: Option<String>,
}

/// An accepted initiation, ready for checkout presentation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InitiatedTransaction {
    /// URL of the gateway's hosted checkout page
    pub checkout_url: String,

    /// Client reference sent with the attempt
    pub reference: String,
}

/// Interpret a decoded gateway response
///
/// Success without a URL is a gateway fault, not a crash.
fn interpret_response(response: InitiateResponse, reference: String) -> Result<InitiatedTransaction> {
    if !response.status.eq_ignore_ascii_case("success") {
        return Err(GatewayError::Gateway {
            status: response.status,
            message: response.message,
        });
    }
    let checkout_url = response.payment_url.ok_or(GatewayError::MissingCheckoutUrl)?;
    Ok(InitiatedTransaction {
        checkout_url,
        reference,
    })
}

/// HTTP client for the transaction-initiation endpoint
pub struct GatewayClient {
    http: reqwest::Client,
    config: GatewayConfig,
}

impl GatewayClient {
    /// Create a new gateway client
    pub fn new(config: GatewayConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(GatewayConfig::from_env()?))
    }

    /// The configured gateway settings
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }
}

#[async_trait]
impl TransactionInitiator for GatewayClient {
    async fn initiate(&self, request: &TransactionRequest) -> Result<InitiatedTransaction> {
        let reference = Uuid::new_v4().to_string();
        let payload = InitiatePayload {
            request,
            client_id: &self.config.client_id,
            client_key: &self.config.client_key,
            client_reference: reference.clone(),
        };

        tracing::info!(
            environment = self.config.environment.as_str(),
            method = %request.method,
            bill_id = %request.bill_id,
            reference = %reference,
            "Initiating transaction"
        );

        let response = self
            .http
            .post(self.config.endpoint())
            .json(&payload)
            .send()
            .await?;

        let decoded: InitiateResponse = response.json().await?;

        tracing::debug!(
            status = %decoded.status,
            has_url = decoded.payment_url.is_some(),
            reference = %reference,
            "Gateway responded"
        );

        let initiated = interpret_response(decoded, reference)?;

        tracing::info!(
            reference = %initiated.reference,
            "Checkout session issued"
        );

        Ok(initiated)
    }
}
