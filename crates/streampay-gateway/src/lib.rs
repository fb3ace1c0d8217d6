//! # streampay-gateway
//!
//! Transaction initiation against the streampay payment gateway.
//!
//! The gateway exposes one endpoint per environment (sandbox for testing,
//! live for real charges). A single POST with the transaction payload and
//! embedded API credentials returns either a hosted checkout URL to present
//! to the user, or a failure status.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use streampay_gateway::{GatewayClient, GatewayConfig, TransactionRequest};
//!
//! let client = GatewayClient::new(GatewayConfig::from_env()?);
//! let request = TransactionRequest::build(&plan, &details);
//!
//! // Present initiated.checkout_url in the embedded browser
//! let initiated = client.initiate(&request).await?;
//! ```
//!
//! No retry is attempted on failure and no timeout beyond the transport
//! default is configured; a failed attempt is reported and the user
//! resubmits manually.

mod client;
mod config;
mod error;
mod mock;
mod request;
pub mod resolve;

pub use client::{GatewayClient, InitiateResponse, InitiatedTransaction, TransactionInitiator};
pub use config::{Environment, GatewayConfig};
pub use error::{GatewayError, Result};
pub use mock::MockGateway;
pub use request::TransactionRequest;
