//! Subscription Plans
//!
//! A plan is chosen on the pricing screen before the payment flow starts
//! and is immutable for the lifetime of a flow instance.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Billing cycle for a subscription plan
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingCycle {
    Monthly,
    Quarterly,
    Yearly,
}

impl BillingCycle {
    pub fn as_str(&self) -> &str {
        match self {
            BillingCycle::Monthly => "monthly",
            BillingCycle::Quarterly => "quarterly",
            BillingCycle::Yearly => "yearly",
        }
    }
}

/// A subscription plan as shown on the pricing screen
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    /// Plan identifier, used as the bill id on the wire
    pub id: String,

    /// Display name (doubles as the transaction description)
    pub name: String,

    /// Price for one billing cycle
    pub price: Decimal,

    /// How often the plan renews
    pub billing_cycle: BillingCycle,
}

impl Plan {
    /// Create a new plan
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: Decimal,
        billing_cycle: BillingCycle,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            billing_cycle,
        }
    }
}
