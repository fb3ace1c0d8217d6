//! # streampay-flow
//!
//! Orchestrates one payment-initiation flow instance for a subscription
//! purchase:
//!
//! ```text
//! Idle → MethodSelected → FormEntry → Submitting → Checkout → {Success, Failure}
//! ```
//!
//! The screen owns a [`PaymentFlow`] for its lifetime. It feeds user actions
//! in (method picks, form edits, submit) and embedded-browser URL events
//! during checkout, and reads the state back out to decide what to render.
//! Every error carries a user-facing alert message; none are fatal.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use streampay_flow::PaymentFlow;
//! use streampay_gateway::GatewayClient;
//! use streampay_checkout::CallbackRoutes;
//!
//! let gateway = Arc::new(GatewayClient::from_env()?);
//! let mut flow = PaymentFlow::new(Some(plan), gateway, CallbackRoutes::from_env())?;
//!
//! flow.select_method(PaymentMethod::Upi);
//! // ... bind form fields through flow.details_mut() ...
//! flow.submit().await?;
//! // present flow.checkout_url() and forward URL events to
//! // flow.handle_navigation / flow.handle_state_change
//! ```

mod error;
mod flow;

pub use error::{FlowError, Result};
pub use flow::PaymentFlow;
