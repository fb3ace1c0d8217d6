//! Checkout Session
//!
//! Holds the hosted checkout URL for the duration of its presentation and
//! resolves it from intercepted navigation events.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::routes::CallbackRoutes;

/// Terminal result of a checkout session
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckoutOutcome {
    Success,
    Failure,
}

/// What the embedded browser should do with a URL event
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavigationDecision {
    /// Not a callback URL; let the page load
    Allow,
    /// Callback URL seen again after the session already resolved;
    /// block the load, raise nothing
    Suppress,
    /// First callback hit; block the load and finish the flow
    Complete(CheckoutOutcome),
}

/// A live hosted-checkout presentation
///
/// Exists only between initiation and a terminal callback (or the user
/// navigating away); nothing here is persisted.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CheckoutSession {
    /// URL of the gateway's hosted checkout page
    pub checkout_url: String,

    /// Client reference the session was initiated under
    pub reference: String,

    /// When the page was handed to the embedded browser
    pub opened_at: DateTime<Utc>,

    routes: CallbackRoutes,
    resolved: bool,
}

impl CheckoutSession {
    /// Open a session around a freshly issued checkout URL
    pub fn new(
        checkout_url: impl Into<String>,
        reference: impl Into<String>,
        routes: CallbackRoutes,
    ) -> Self {
        Self {
            checkout_url: checkout_url.into(),
            reference: reference.into(),
            opened_at: Utc::now(),
            routes,
            resolved: false,
        }
    }

    /// Whether a terminal callback was already seen
    pub fn is_resolved(&self) -> bool {
        self.resolved
    }

    /// Pre-navigation hook: called before the browser commits to a URL
    pub fn on_navigation_request(&mut self, url: &str) -> NavigationDecision {
        self.intercept(url, "navigation_request")
    }

    /// Navigation-state-change hook: called as the browser's URL updates
    ///
    /// Redundant with [`Self::on_navigation_request`] on purpose; which hook
    /// fires first for a redirect differs across platforms.
    pub fn on_state_change(&mut self, url: &str) -> NavigationDecision {
        self.intercept(url, "state_change")
    }

    fn intercept(&mut self, url: &str, hook: &'static str) -> NavigationDecision {
        let outcome = if url.starts_with(self.routes.success_prefix.as_str()) {
            CheckoutOutcome::Success
        } else if url.starts_with(self.routes.failure_prefix.as_str()) {
            CheckoutOutcome::Failure
        } else {
            return NavigationDecision::Allow;
        };

        if self.resolved {
            tracing::debug!(hook, reference = %self.reference, "Duplicate callback hit suppressed");
            return NavigationDecision::Suppress;
        }
        self.resolved = true;

        tracing::info!(
            hook,
            reference = %self.reference,
            outcome = ?outcome,
            "Checkout resolved"
        );
        NavigationDecision::Complete(outcome)
    }
}
