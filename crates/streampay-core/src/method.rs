//! Payment Methods and Form Data
//!
//! The method picker offers a fixed set of four options. Form data is kept
//! as a tagged union so each method carries exactly its own fields; changing
//! method replaces the variant and implicitly clears the old form.

use serde::{Deserialize, Serialize};

/// The fixed set of payment method options
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Card,
    Upi,
    NetBanking,
    Wallet,
}

impl PaymentMethod {
    /// All options, in picker order
    pub const ALL: [PaymentMethod; 4] = [
        PaymentMethod::Card,
        PaymentMethod::Upi,
        PaymentMethod::NetBanking,
        PaymentMethod::Wallet,
    ];

    /// Wire name for this method
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "card",
            PaymentMethod::Upi => "upi",
            PaymentMethod::NetBanking => "netbanking",
            PaymentMethod::Wallet => "wallet",
        }
    }

    /// Label shown on the method picker
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "Credit / Debit Card",
            PaymentMethod::Upi => "UPI",
            PaymentMethod::NetBanking => "Net Banking",
            PaymentMethod::Wallet => "Wallet",
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Per-method form data
///
/// Each variant holds the fields that method requires and nothing else.
/// Format checks (card number length, Luhn, expiry validity) are left to
/// the gateway's hosted page; only presence is validated here.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "lowercase")]
pub enum MethodDetails {
    Card {
        card_number: String,
        expiry: String,
        cvv: String,
        card_name: String,
    },
    Upi {
        upi_id: String,
    },
    NetBanking {
        bank_name: String,
        account_number: String,
    },
    Wallet {
        wallet_id: String,
    },
}

impl MethodDetails {
    /// Blank form for the given method
    pub fn empty(method: PaymentMethod) -> Self {
        match method {
            PaymentMethod::Card => MethodDetails::Card {
                card_number: String::new(),
                expiry: String::new(),
                cvv: String::new(),
                card_name: String::new(),
            },
            PaymentMethod::Upi => MethodDetails::Upi {
                upi_id: String::new(),
            },
            PaymentMethod::NetBanking => MethodDetails::NetBanking {
                bank_name: String::new(),
                account_number: String::new(),
            },
            PaymentMethod::Wallet => MethodDetails::Wallet {
                wallet_id: String::new(),
            },
        }
    }

    /// Which method this form belongs to
    pub fn method(&self) -> PaymentMethod {
        match self {
            MethodDetails::Card { .. } => PaymentMethod::Card,
            MethodDetails::Upi { .. } => PaymentMethod::Upi,
            MethodDetails::NetBanking { .. } => PaymentMethod::NetBanking,
            MethodDetails::Wallet { .. } => PaymentMethod::Wallet,
        }
    }

    /// Names of required fields that are still empty
    pub fn missing_fields(&self) -> Vec<&'static str> {
        fn blank(value: &str) -> bool {
            value.trim().is_empty()
        }

        let mut missing = Vec::new();
        match self {
            MethodDetails::Card {
                card_number,
                expiry,
                cvv,
                card_name,
            } => {
                if blank(card_number) {
                    missing.push("cardNumber");
                }
                if blank(expiry) {
                    missing.push("expiry");
                }
                if blank(cvv) {
                    missing.push("cvv");
                }
                if blank(card_name) {
                    missing.push("cardName");
                }
            }
            MethodDetails::Upi { upi_id } => {
                if blank(upi_id) {
                    missing.push("upiId");
                }
            }
            MethodDetails::NetBanking {
                bank_name,
                account_number,
            } => {
                if blank(bank_name) {
                    missing.push("bankName");
                }
                if blank(account_number) {
                    missing.push("accountNumber");
                }
            }
            MethodDetails::Wallet { wallet_id } => {
                if blank(wallet_id) {
                    missing.push("walletId");
                }
            }
        }
        missing
    }

    /// Whether every required field for this method is filled in
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// The identifier the gateway receives as the customer name
    ///
    /// The gateway takes the payer's primary identifier for the chosen
    /// method in the customerName slot: the cardholder name for cards, the
    /// VPA for UPI, the account number for net banking, the wallet id for
    /// wallets.
    pub fn holder_name(&self) -> &str {
        match self {
            MethodDetails::Card { card_name, .. } => card_name,
            MethodDetails::Upi { upi_id } => upi_id,
            MethodDetails::NetBanking { account_number, .. } => account_number,
            MethodDetails::Wallet { wallet_id } => wallet_id,
        }
    }

    /// VPA identifier, present only for UPI
    pub fn vpa_id(&self) -> Option<&str> {
        match self {
            MethodDetails::Upi { upi_id } => Some(upi_id),
            _ => None,
        }
    }
}
