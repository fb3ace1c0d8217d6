//! Transaction Request Payload
//!
//! Built fresh per submit from the selected plan and the filled-in method
//! details; nothing about an attempt is persisted.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use streampay_core::{MethodDetails, PaymentMethod, Plan};

/// One transaction-initiation attempt
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRequest {
    /// Payer identifier for the chosen method
    pub customer_name: String,

    /// Plan price for one billing cycle
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,

    /// Plan id, doubling as the gateway bill identifier
    pub bill_id: String,

    /// Plan name shown on the gateway statement
    pub description: String,

    /// Selected payment method
    pub method: PaymentMethod,

    /// VPA identifier, only for UPI
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpa_id: Option<String>,
}

impl TransactionRequest {
    /// Derive a request from the plan and the completed form
    pub fn build(plan: &Plan, details: &MethodDetails) -> Self {
        Self {
            customer_name: details.holder_name().to_string(),
            amount: plan.price,
            bill_id: plan.id.clone(),
            description: plan.name.clone(),
            method: details.method(),
            vpa_id: details.vpa_id().map(ToString::to_string),
        }
    }
}
