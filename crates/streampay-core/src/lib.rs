//! # streampay-core
//!
//! Domain model for the streampay subscription payment flow.
//!
//! Holds the types every other streampay crate builds on: the subscription
//! [`Plan`] the user picked before entering the flow, the fixed set of
//! [`PaymentMethod`]s, the per-method [`MethodDetails`] form data, and the
//! flow-level [`FlowState`] machine.
//!
//! Form data is a tagged union rather than a string map: each method variant
//! carries exactly the fields that method requires, so a field can never be
//! read under the wrong method.

mod error;
mod method;
mod plan;
mod state;

pub use error::{CoreError, Result};
pub use method::{MethodDetails, PaymentMethod};
pub use plan::{BillingCycle, Plan};
pub use state::FlowState;
