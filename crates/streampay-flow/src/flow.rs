//! Payment Flow Orchestration
//!
//! One `PaymentFlow` per screen instance. All state is transient; nothing
//! survives the screen.

use std::sync::Arc;

use streampay_checkout::{CallbackRoutes, CheckoutOutcome, CheckoutSession, NavigationDecision};
use streampay_core::{CoreError, FlowState, MethodDetails, PaymentMethod, Plan};
use streampay_gateway::{TransactionInitiator, TransactionRequest};

use crate::error::{FlowError, Result};

/// A single payment-initiation flow instance
pub struct PaymentFlow {
    plan: Plan,
    state: FlowState,
    details: Option<MethodDetails>,
    /// Kept after resolution so late-firing hooks stay suppressed
    session: Option<CheckoutSession>,
    initiator: Arc<dyn TransactionInitiator>,
    routes: CallbackRoutes,
}

impl PaymentFlow {
    /// Start a flow for the plan picked on the pricing screen
    ///
    /// `None` means the screen was entered without a plan; the caller should
    /// navigate away immediately.
    pub fn new(
        plan: Option<Plan>,
        initiator: Arc<dyn TransactionInitiator>,
        routes: CallbackRoutes,
    ) -> Result<Self> {
        let plan = plan.ok_or(CoreError::NoPlanSelected)?;
        Ok(Self {
            plan,
            state: FlowState::Idle,
            details: None,
            session: None,
            initiator,
            routes,
        })
    }

    /// The plan being purchased
    pub fn plan(&self) -> &Plan {
        &self.plan
    }

    /// Current flow state
    pub fn state(&self) -> FlowState {
        self.state
    }

    /// Currently selected method, if any
    pub fn method(&self) -> Option<PaymentMethod> {
        self.details.as_ref().map(MethodDetails::method)
    }

    /// Current form contents, if a method is selected
    pub fn details(&self) -> Option<&MethodDetails> {
        self.details.as_ref()
    }

    /// Hosted checkout URL while one is being presented
    pub fn checkout_url(&self) -> Option<&str> {
        if self.state == FlowState::Checkout {
            self.session.as_ref().map(|s| s.checkout_url.as_str())
        } else {
            None
        }
    }

    /// Pick a payment method, clearing any previous form
    pub fn select_method(&mut self, method: PaymentMethod) -> Result<()> {
        self.ensure_editable("select a method")?;
        tracing::debug!(method = %method, "Method selected");
        self.details = Some(MethodDetails::empty(method));
        self.state = FlowState::MethodSelected;
        Ok(())
    }

    /// Reset the method choice, dropping the form with it
    pub fn clear_method(&mut self) -> Result<()> {
        self.ensure_editable("change method")?;
        self.details = None;
        self.state = FlowState::Idle;
        Ok(())
    }

    /// Replace the form contents, selecting its method as a side effect
    pub fn set_details(&mut self, details: MethodDetails) -> Result<()> {
        self.ensure_editable("edit the form")?;
        self.details = Some(details);
        self.state = FlowState::FormEntry;
        Ok(())
    }

    /// Mutable form access for field binding
    ///
    /// The first edit moves the flow into form entry.
    pub fn details_mut(&mut self) -> Option<&mut MethodDetails> {
        if matches!(self.state, FlowState::MethodSelected | FlowState::FormEntry) {
            self.state = FlowState::FormEntry;
            self.details.as_mut()
        } else {
            None
        }
    }

    fn ensure_editable(&self, action: &'static str) -> Result<()> {
        if self.state == FlowState::Submitting {
            return Err(FlowError::SubmissionInFlight);
        }
        if self.state == FlowState::Checkout || self.state.is_terminal() {
            return Err(FlowError::InvalidState {
                from: self.state,
                action,
            });
        }
        Ok(())
    }

    /// Submit the form: validate, then make exactly one initiation call
    ///
    /// Validation failures return before any network activity. A gateway or
    /// transport failure drops back to form entry; the user resubmits
    /// manually, no retry is attempted here.
    pub async fn submit(&mut self) -> Result<()> {
        if self.state == FlowState::Submitting {
            return Err(FlowError::SubmissionInFlight);
        }
        if self.state == FlowState::Checkout || self.state.is_terminal() {
            return Err(FlowError::InvalidState {
                from: self.state,
                action: "submit",
            });
        }

        let details = self.details.as_ref().ok_or(CoreError::NoMethodSelected)?;
        let missing = details.missing_fields();
        if !missing.is_empty() {
            tracing::debug!(?missing, "Submit blocked by empty fields");
            return Err(CoreError::MissingFields(missing).into());
        }

        let request = TransactionRequest::build(&self.plan, details);
        self.state = FlowState::Submitting;

        let result = self.initiator.initiate(&request).await;
        match result {
            Ok(initiated) => {
                tracing::info!(
                    reference = %initiated.reference,
                    plan = %self.plan.id,
                    "Presenting hosted checkout"
                );
                self.session = Some(CheckoutSession::new(
                    initiated.checkout_url,
                    initiated.reference,
                    self.routes.clone(),
                ));
                self.state = FlowState::Checkout;
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, plan = %self.plan.id, "Initiation failed");
                self.state = FlowState::FormEntry;
                Err(e.into())
            }
        }
    }

    /// Pre-navigation hook from the embedded browser
    pub fn handle_navigation(&mut self, url: &str) -> NavigationDecision {
        let Some(session) = self.session.as_mut() else {
            return NavigationDecision::Allow;
        };
        let decision = session.on_navigation_request(url);
        if let NavigationDecision::Complete(outcome) = decision {
            self.finish(outcome);
        }
        decision
    }

    /// Navigation-state-change hook from the embedded browser
    pub fn handle_state_change(&mut self, url: &str) -> NavigationDecision {
        let Some(session) = self.session.as_mut() else {
            return NavigationDecision::Allow;
        };
        let decision = session.on_state_change(url);
        if let NavigationDecision::Complete(outcome) = decision {
            self.finish(outcome);
        }
        decision
    }

    /// User backed out of the checkout page
    pub fn abandon_checkout(&mut self) {
        if self.state == FlowState::Checkout {
            tracing::info!(plan = %self.plan.id, "Checkout abandoned");
            self.session = None;
            self.state = FlowState::FormEntry;
        }
    }

    fn finish(&mut self, outcome: CheckoutOutcome) {
        // The resolved session is kept so the other hook stays suppressed,
        // but it is no longer presented.
        self.state = match outcome {
            CheckoutOutcome::Success => FlowState::Success,
            CheckoutOutcome::Failure => FlowState::Failure,
        };
        tracing::info!(plan = %self.plan.id, state = %self.state, "Flow finished");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use streampay_core::BillingCycle;
    use streampay_gateway::{GatewayError, MockGateway};

    fn premium() -> Plan {
        Plan::new("p1", "Premium", dec!(499), BillingCycle::Monthly)
    }

    fn flow_with(gateway: Arc<MockGateway>) -> PaymentFlow {
        PaymentFlow::new(Some(premium()), gateway, CallbackRoutes::default()).unwrap()
    }

    fn fill_upi(flow: &mut PaymentFlow) {
        flow.set_details(MethodDetails::Upi {
            upi_id: "user@bank".into(),
        })
        .unwrap();
    }

    #[test]
    fn test_no_plan_is_a_configuration_error() {
        let gateway = Arc::new(MockGateway::new());
        let err = PaymentFlow::new(None, gateway, CallbackRoutes::default())
            .err()
            .unwrap();
        assert!(matches!(err, FlowError::Core(CoreError::NoPlanSelected)));
    }

    #[tokio::test]
    async fn test_submit_without_method_makes_no_call() {
        let gateway = Arc::new(MockGateway::new());
        let mut flow = flow_with(gateway.clone());

        let err = flow.submit().await.unwrap_err();
        assert!(matches!(err, FlowError::Core(CoreError::NoMethodSelected)));
        assert_eq!(gateway.call_count(), 0);
        assert_eq!(flow.state(), FlowState::Idle);
    }

    #[tokio::test]
    async fn test_empty_fields_block_every_method() {
        for method in PaymentMethod::ALL {
            let gateway = Arc::new(MockGateway::new());
            let mut flow = flow_with(gateway.clone());
            flow.select_method(method).unwrap();

            let err = flow.submit().await.unwrap_err();
            assert!(
                matches!(err, FlowError::Core(CoreError::MissingFields(_))),
                "{method} should fail validation"
            );
            assert_eq!(gateway.call_count(), 0, "{method} must not reach the network");
        }
    }

    #[tokio::test]
    async fn test_one_field_empty_still_blocks() {
        let gateway = Arc::new(MockGateway::new());
        let mut flow = flow_with(gateway.clone());
        flow.set_details(MethodDetails::Card {
            card_number: "4111111111111111".into(),
            expiry: "12/27".into(),
            cvv: String::new(),
            card_name: "A Viewer".into(),
        })
        .unwrap();

        let err = flow.submit().await.unwrap_err();
        match err {
            FlowError::Core(CoreError::MissingFields(fields)) => {
                assert_eq!(fields, vec!["cvv"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(gateway.call_count(), 0);
    }

    #[tokio::test]
    async fn test_upi_submit_maps_fields_onto_payload() {
        let gateway = Arc::new(MockGateway::new());
        let mut flow = flow_with(gateway.clone());
        fill_upi(&mut flow);

        flow.submit().await.unwrap();

        assert_eq!(gateway.call_count(), 1);
        let request = &gateway.requests()[0];
        assert_eq!(request.customer_name, "user@bank");
        assert_eq!(request.amount, dec!(499));
        assert_eq!(request.bill_id, "p1");
        assert_eq!(request.description, "Premium");
        assert_eq!(request.method, PaymentMethod::Upi);
        assert_eq!(request.vpa_id.as_deref(), Some("user@bank"));
    }

    #[tokio::test]
    async fn test_card_submit_maps_fields_onto_payload() {
        let gateway = Arc::new(MockGateway::new());
        let mut flow = flow_with(gateway.clone());
        flow.set_details(MethodDetails::Card {
            card_number: "4111111111111111".into(),
            expiry: "12/27".into(),
            cvv: "123".into(),
            card_name: "A Viewer".into(),
        })
        .unwrap();

        flow.submit().await.unwrap();

        assert_eq!(gateway.call_count(), 1);
        let request = &gateway.requests()[0];
        assert_eq!(request.customer_name, "A Viewer");
        assert_eq!(request.method, PaymentMethod::Card);
        assert_eq!(request.vpa_id, None);
        assert_eq!(request.bill_id, "p1");
        assert_eq!(request.amount, dec!(499));
    }

    #[tokio::test]
    async fn test_netbanking_submit_maps_fields_onto_payload() {
        let gateway = Arc::new(MockGateway::new());
        let mut flow = flow_with(gateway.clone());
        flow.set_details(MethodDetails::NetBanking {
            bank_name: "First Example Bank".into(),
            account_number: "0042004200".into(),
        })
        .unwrap();

        flow.submit().await.unwrap();

        assert_eq!(gateway.call_count(), 1);
        let request = &gateway.requests()[0];
        assert_eq!(request.customer_name, "0042004200");
        assert_eq!(request.method, PaymentMethod::NetBanking);
        assert_eq!(request.vpa_id, None);
        assert_eq!(request.description, "Premium");
    }

    #[tokio::test]
    async fn test_wallet_submit_maps_fields_onto_payload() {
        let gateway = Arc::new(MockGateway::new());
        let mut flow = flow_with(gateway.clone());
        flow.set_details(MethodDetails::Wallet {
            wallet_id: "w-9".into(),
        })
        .unwrap();

        flow.submit().await.unwrap();

        assert_eq!(gateway.call_count(), 1);
        let request = &gateway.requests()[0];
        assert_eq!(request.customer_name, "w-9");
        assert_eq!(request.method, PaymentMethod::Wallet);
        assert_eq!(request.vpa_id, None);
        assert_eq!(request.bill_id, "p1");
    }

    #[tokio::test]
    async fn test_successful_submit_enters_checkout_once() {
        let gateway = Arc::new(MockGateway::accepting("https://gw.example/c/1"));
        let mut flow = flow_with(gateway.clone());
        fill_upi(&mut flow);

        flow.submit().await.unwrap();
        assert_eq!(flow.state(), FlowState::Checkout);
        assert_eq!(flow.checkout_url(), Some("https://gw.example/c/1"));

        // A second submit while checkout is up is rejected, not re-sent
        let err = flow.submit().await.unwrap_err();
        assert!(matches!(err, FlowError::InvalidState { .. }));
        assert_eq!(gateway.call_count(), 1);
    }

    #[tokio::test]
    async fn test_missing_checkout_url_is_gateway_error() {
        let gateway = Arc::new(MockGateway::missing_url());
        let mut flow = flow_with(gateway.clone());
        fill_upi(&mut flow);

        let err = flow.submit().await.unwrap_err();
        assert!(matches!(
            err,
            FlowError::Gateway(GatewayError::MissingCheckoutUrl)
        ));
        // Back on the form, free to resubmit manually
        assert_eq!(flow.state(), FlowState::FormEntry);
        flow.submit().await.unwrap_err();
        assert_eq!(gateway.call_count(), 2);
    }

    #[tokio::test]
    async fn test_decline_returns_to_form() {
        let gateway = Arc::new(MockGateway::declining(
            "declined",
            Some("insufficient funds".into()),
        ));
        let mut flow = flow_with(gateway.clone());
        fill_upi(&mut flow);

        let err = flow.submit().await.unwrap_err();
        assert!(matches!(err, FlowError::Gateway(GatewayError::Gateway { .. })));
        assert!(!err.user_message().is_empty());
        assert_eq!(flow.state(), FlowState::FormEntry);
    }

    #[tokio::test]
    async fn test_success_callback_resolves_once_across_hooks() {
        let gateway = Arc::new(MockGateway::new());
        let mut flow = flow_with(gateway.clone());
        fill_upi(&mut flow);
        flow.submit().await.unwrap();

        let url = "streampay://payment/success?txn=42";
        assert_eq!(
            flow.handle_navigation(url),
            NavigationDecision::Complete(CheckoutOutcome::Success)
        );
        assert_eq!(flow.state(), FlowState::Success);
        assert!(flow.checkout_url().is_none());

        // The redundant hook fires for the same redirect: no second alert
        assert_eq!(flow.handle_state_change(url), NavigationDecision::Suppress);
        assert_eq!(flow.state(), FlowState::Success);
    }

    #[tokio::test]
    async fn test_failure_callback_is_terminal() {
        let gateway = Arc::new(MockGateway::new());
        let mut flow = flow_with(gateway.clone());
        fill_upi(&mut flow);
        flow.submit().await.unwrap();

        assert_eq!(
            flow.handle_state_change("streampay://payment/failure?code=x"),
            NavigationDecision::Complete(CheckoutOutcome::Failure)
        );
        assert_eq!(flow.state(), FlowState::Failure);

        let err = flow.submit().await.unwrap_err();
        assert!(matches!(err, FlowError::InvalidState { .. }));
    }

    #[tokio::test]
    async fn test_gateway_pages_load_during_checkout() {
        let gateway = Arc::new(MockGateway::new());
        let mut flow = flow_with(gateway.clone());
        fill_upi(&mut flow);
        flow.submit().await.unwrap();

        assert_eq!(
            flow.handle_navigation("https://sandbox.gw.example/checkout/mock/otp"),
            NavigationDecision::Allow
        );
        assert_eq!(flow.state(), FlowState::Checkout);
    }

    #[tokio::test]
    async fn test_abandon_checkout_discards_session() {
        let gateway = Arc::new(MockGateway::new());
        let mut flow = flow_with(gateway.clone());
        fill_upi(&mut flow);
        flow.submit().await.unwrap();

        flow.abandon_checkout();
        assert_eq!(flow.state(), FlowState::FormEntry);
        assert!(flow.checkout_url().is_none());
        assert_eq!(
            flow.handle_navigation("streampay://payment/success"),
            NavigationDecision::Allow
        );

        // Resubmitting starts a fresh attempt
        flow.submit().await.unwrap();
        assert_eq!(gateway.call_count(), 2);
        assert_eq!(flow.state(), FlowState::Checkout);
    }

    #[tokio::test]
    async fn test_changing_method_clears_the_form() {
        let gateway = Arc::new(MockGateway::new());
        let mut flow = flow_with(gateway.clone());
        flow.set_details(MethodDetails::Card {
            card_number: "4111111111111111".into(),
            expiry: "12/27".into(),
            cvv: "123".into(),
            card_name: "A Viewer".into(),
        })
        .unwrap();

        flow.select_method(PaymentMethod::Upi).unwrap();
        assert_eq!(flow.method(), Some(PaymentMethod::Upi));
        assert_eq!(
            flow.details(),
            Some(&MethodDetails::empty(PaymentMethod::Upi))
        );
        assert_eq!(flow.state(), FlowState::MethodSelected);

        flow.clear_method().unwrap();
        assert_eq!(flow.method(), None);
        assert_eq!(flow.state(), FlowState::Idle);
    }

    #[tokio::test]
    async fn test_form_binding_moves_to_form_entry() {
        let gateway = Arc::new(MockGateway::new());
        let mut flow = flow_with(gateway.clone());
        flow.select_method(PaymentMethod::Upi).unwrap();

        if let Some(MethodDetails::Upi { upi_id }) = flow.details_mut() {
            *upi_id = "user@bank".into();
        } else {
            panic!("expected upi form");
        }
        assert_eq!(flow.state(), FlowState::FormEntry);

        flow.submit().await.unwrap();
        assert_eq!(gateway.requests()[0].vpa_id.as_deref(), Some("user@bank"));
    }
}
