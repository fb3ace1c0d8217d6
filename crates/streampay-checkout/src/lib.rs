//! # streampay-checkout
//!
//! Tracks the gateway's hosted checkout page inside an embedded browser
//! surface and interprets the two terminal callback URLs.
//!
//! The flow never drives the embedded browser; it only observes URL events
//! and decides, per event, whether the navigation should proceed. A URL
//! under the configured success or failure prefix is suppressed and resolves
//! the session; everything else (the gateway's own pages) loads normally.
//!
//! Embedded browsers differ in whether the pre-navigation hook or the
//! navigation-state-change hook fires first for a redirect, so both hooks
//! funnel into one idempotent guard: the session resolves exactly once, and
//! later hits on either hook are suppressed without a second completion.

mod routes;
mod session;

pub use routes::CallbackRoutes;
pub use session::{CheckoutOutcome, CheckoutSession, NavigationDecision};
