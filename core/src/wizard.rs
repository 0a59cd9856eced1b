//! Four-step onboarding wizard.
//!
//! ```text
//!  ┌───────────┐ next ┌─────────────┐ next ┌────────────────┐ next ┌───────────────┐
//!  │ Selection │─────▶│ Credentials │─────▶│ Infrastructure │─────▶│ ConfirmAndPay │
//!  └───────────┘◀─────└─────────────┘◀─────└────────────────┘◀─────└───────┬───────┘
//!                back                 back                   back         │ submit
//!                                                                         ▼
//!                         Idle ──▶ Submitting ──▶ Succeeded (redirect to checkout)
//!                                      │
//!                                      └──▶ Failed (notice, resubmit allowed)
//! ```
//!
//! [`Wizard`] is a plain value with synchronous transitions. Submission is
//! split in [`Wizard::begin_submit`] and [`Wizard::complete_submit`] so a UI
//! can keep the wizard inside a reactive cell while the relay call is
//! pending; [`Wizard::submit`] drives both halves for everyone else.

use crate::config::SiteConfig;
use crate::error::{RelayResult, WizardError, WizardResult};
use crate::form::FormState;
use crate::relay::{Relay, RelayPayload, RelayResponse};
use crate::schema::{Field, FormSchema, IdentityFields, UseCase};

// =============================================================================
// Steps
// =============================================================================

/// Wizard page. Numbered 1 to 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step {
    Selection = 1,
    Credentials = 2,
    Infrastructure = 3,
    ConfirmAndPay = 4,
}

impl Step {
    /// Number of steps.
    pub const COUNT: u8 = 4;

    /// 1-based position.
    pub fn number(&self) -> u8 {
        *self as u8
    }

    /// Following step, `None` on the last.
    pub fn next(&self) -> Option<Step> {
        match self {
            Step::Selection => Some(Step::Credentials),
            Step::Credentials => Some(Step::Infrastructure),
            Step::Infrastructure => Some(Step::ConfirmAndPay),
            Step::ConfirmAndPay => None,
        }
    }

    /// Preceding step, `None` on the first.
    pub fn prev(&self) -> Option<Step> {
        match self {
            Step::Selection => None,
            Step::Credentials => Some(Step::Selection),
            Step::Infrastructure => Some(Step::Credentials),
            Step::ConfirmAndPay => Some(Step::Infrastructure),
        }
    }

    /// Short heading of the step.
    pub fn title(&self) -> &'static str {
        match self {
            Step::Selection => "SELECT MODULES",
            Step::Credentials => "CREDENTIALS",
            Step::Infrastructure => "SERVER CONFIG",
            Step::ConfirmAndPay => "CONFIRM & PAY",
        }
    }

    /// Header caption, e.g. `STEP 2 OF 4: CONFIGURATION`.
    pub fn caption(&self) -> String {
        format!("STEP {} OF {}: CONFIGURATION", self.number(), Self::COUNT)
    }
}

// =============================================================================
// Submission Lifecycle
// =============================================================================

/// Why the last submission did not go through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitFailure {
    /// Relay answered with a non-2xx status.
    Rejected { status: u16 },
    /// Request never got an answer.
    Transport { reason: String },
    /// Relay accepted but the browser could not leave for checkout.
    Navigation { reason: String },
}

/// Submission lifecycle of a wizard.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Failed(SubmitFailure),
    /// Relay accepted; the page is navigating to checkout.
    Succeeded,
}

impl SubmitStatus {
    /// Navigation and editing are locked.
    pub fn is_busy(&self) -> bool {
        matches!(self, SubmitStatus::Submitting | SubmitStatus::Succeeded)
    }
}

/// What the UI must do once the relay has answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Show the confirmation notice, then navigate to `url`.
    Redirect { url: String },
    /// Show the rejection notice and stay on the confirmation step.
    Rejected { status: u16 },
    /// Show the network notice and stay on the confirmation step.
    TransportFailed { reason: String },
}

impl SubmitOutcome {
    /// Text of the blocking notice.
    pub fn notice(&self) -> String {
        match self {
            SubmitOutcome::Redirect { .. } => {
                "Configuration secured. Redirecting to payment gateway...".to_string()
            }
            SubmitOutcome::Rejected { status } => format!(
                "Transmission failed. The relay rejected the request (HTTP {}). Please try again.",
                status
            ),
            SubmitOutcome::TransportFailed { .. } => "Network error. Please try again.".to_string(),
        }
    }

    /// Checkout URL, only for a successful post.
    pub fn redirect_url(&self) -> Option<&str> {
        match self {
            SubmitOutcome::Redirect { url } => Some(url),
            _ => None,
        }
    }
}

// =============================================================================
// Summary
// =============================================================================

/// One line of the confirmation summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    /// Row heading, e.g. `Platform`.
    pub label: &'static str,
    /// Value as entered.
    pub value: String,
}

/// Confirmation screen content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Ordered summary lines.
    pub rows: Vec<SummaryRow>,
    /// One-time fee, e.g. `£99.00`.
    pub fee_label: String,
}

impl Summary {
    /// Value of the row labelled `label`.
    pub fn value(&self, label: &str) -> Option<&str> {
        self.rows
            .iter()
            .find(|row| row.label == label)
            .map(|row| row.value.as_str())
    }
}

// =============================================================================
// Wizard
// =============================================================================

/// Step, field values and submission status of one wizard instance.
#[derive(Debug, Clone, PartialEq)]
pub struct Wizard {
    schema: FormSchema,
    step: Step,
    form: FormState,
    status: SubmitStatus,
}

impl Wizard {
    /// Fresh wizard on step 1 with the schema's defaults.
    pub fn new(schema: FormSchema) -> Self {
        Self {
            form: FormState::new(&schema),
            schema,
            step: Step::Selection,
            status: SubmitStatus::Idle,
        }
    }

    /// Active field set.
    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    /// Current step.
    pub fn step(&self) -> Step {
        self.step
    }

    /// Entered values.
    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// Submission lifecycle.
    pub fn status(&self) -> &SubmitStatus {
        &self.status
    }

    /// Submitting or already succeeded; controls are locked.
    pub fn is_busy(&self) -> bool {
        self.status.is_busy()
    }

    /// A relay call is in flight.
    pub fn is_submitting(&self) -> bool {
        self.status == SubmitStatus::Submitting
    }

    /// Advance one step. Refused on the last step or while busy.
    pub fn next(&mut self) -> WizardResult<Step> {
        if self.is_busy() {
            return Err(WizardError::Busy);
        }
        self.step = self.step.next().ok_or(WizardError::AtLastStep)?;
        log::debug!("Wizard moved to step {}", self.step.number());
        Ok(self.step)
    }

    /// Go back one step. Refused on the first step or while busy.
    pub fn back(&mut self) -> WizardResult<Step> {
        if self.is_busy() {
            return Err(WizardError::Busy);
        }
        self.step = self.step.prev().ok_or(WizardError::AtFirstStep)?;
        log::debug!("Wizard moved back to step {}", self.step.number());
        Ok(self.step)
    }

    /// Set one field from text. Refused while busy or if the schema lacks it.
    pub fn update_field(&mut self, field: Field, value: &str) -> WizardResult<()> {
        if self.is_busy() {
            return Err(WizardError::Busy);
        }
        if !self.schema.has_field(field) {
            return Err(WizardError::FieldUnavailable(field));
        }
        self.form.set(field, value)
    }

    /// Select (single mode) or add/remove (multiple mode) a use case.
    pub fn toggle_use_case(&mut self, use_case: UseCase) -> WizardResult<()> {
        if self.is_busy() {
            return Err(WizardError::Busy);
        }
        self.form.selection.toggle(use_case);
        Ok(())
    }

    /// Required fields that are still empty strings.
    pub fn missing_required(&self) -> Vec<Field> {
        self.schema
            .required_fields()
            .iter()
            .copied()
            .filter(|field| self.form.is_blank(*field))
            .collect()
    }

    /// Whether the pay button is enabled.
    pub fn can_submit(&self) -> bool {
        self.step == Step::ConfirmAndPay && !self.is_busy() && self.missing_required().is_empty()
    }

    /// Rows of the confirmation screen.
    pub fn summary(&self, config: &SiteConfig) -> Summary {
        let mut rows = vec![SummaryRow {
            label: "Service",
            value: config.service_name.clone(),
        }];

        match self.schema.identity {
            IdentityFields::AccountName => rows.push(SummaryRow {
                label: "Account",
                value: self.form.identity_name().to_string(),
            }),
            IdentityFields::Contact => {
                rows.push(SummaryRow {
                    label: "Name",
                    value: self.form.identity_name().to_string(),
                });
                rows.push(SummaryRow {
                    label: "Email",
                    value: self.form.text(Field::Email).unwrap_or_default(),
                });
            }
        }

        rows.extend([
            SummaryRow {
                label: "Platform",
                value: self.form.platform.code().to_string(),
            },
            SummaryRow {
                label: "Server",
                value: self.form.server_name.clone(),
            },
            SummaryRow {
                label: "Login",
                value: self.form.login.clone(),
            },
            SummaryRow {
                label: "Region",
                value: self.form.location.code().to_string(),
            },
        ]);

        Summary {
            rows,
            fee_label: config.fee_label.clone(),
        }
    }

    /// Relay payload for the current values.
    pub fn payload(&self, config: &SiteConfig) -> RelayPayload {
        RelayPayload::build(&self.schema, &self.form, &config.product_name)
    }

    /// Lock the wizard and hand out the payload to post.
    ///
    /// While a submission is in flight (or has succeeded) this returns
    /// [`WizardError::Busy`], so the caller never issues a second request.
    pub fn begin_submit(&mut self, config: &SiteConfig) -> WizardResult<RelayPayload> {
        if self.is_busy() {
            return Err(WizardError::Busy);
        }
        if self.step != Step::ConfirmAndPay {
            return Err(WizardError::NotAtConfirmStep);
        }
        let missing = self.missing_required();
        if !missing.is_empty() {
            return Err(WizardError::MissingRequired(missing));
        }

        self.status = SubmitStatus::Submitting;
        log::info!("📤 Submitting {} configuration to relay", self.form.platform.code());
        Ok(self.payload(config))
    }

    /// Record the relay's answer.
    pub fn complete_submit(
        &mut self,
        result: RelayResult<RelayResponse>,
        config: &SiteConfig,
    ) -> WizardResult<SubmitOutcome> {
        if !self.is_submitting() {
            return Err(WizardError::NotSubmitting);
        }

        let outcome = match result {
            Ok(response) if response.is_ok() => {
                log::info!("✅ Relay accepted submission ({})", response.status);
                self.status = SubmitStatus::Succeeded;
                SubmitOutcome::Redirect {
                    url: config.checkout_url.clone(),
                }
            }
            Ok(response) => {
                log::warn!("⚠️ Relay rejected submission ({})", response.status);
                self.status = SubmitStatus::Failed(SubmitFailure::Rejected {
                    status: response.status,
                });
                SubmitOutcome::Rejected {
                    status: response.status,
                }
            }
            Err(e) => {
                log::error!("❌ Relay request failed: {}", e);
                let reason = e.to_string();
                self.status = SubmitStatus::Failed(SubmitFailure::Transport {
                    reason: reason.clone(),
                });
                SubmitOutcome::TransportFailed { reason }
            }
        };
        Ok(outcome)
    }

    /// Post through `relay` and record the answer.
    pub async fn submit<R: Relay>(
        &mut self,
        relay: &R,
        config: &SiteConfig,
    ) -> WizardResult<SubmitOutcome> {
        let payload = self.begin_submit(config)?;
        let result = relay.post(&payload).await;
        self.complete_submit(result, config)
    }

    /// The checkout redirect after a successful post did not happen.
    ///
    /// Unlocks the wizard so the user can pay again or close it.
    pub fn navigation_failed(&mut self, reason: impl Into<String>) -> WizardResult<()> {
        if self.status != SubmitStatus::Succeeded {
            return Err(WizardError::NotSubmitting);
        }
        let reason = reason.into();
        log::error!("❌ Checkout redirect failed: {}", reason);
        self.status = SubmitStatus::Failed(SubmitFailure::Navigation { reason });
        Ok(())
    }

    /// Back to a fresh form on step 1, wiping credentials.
    pub fn reset(&mut self) {
        self.form.clear_sensitive();
        self.form = FormState::new(&self.schema);
        self.step = Step::Selection;
        self.status = SubmitStatus::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RelayError;
    use crate::schema::{Location, Platform};
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};

    /// Relay answering with a fixed status, or failing when `status` is `None`.
    struct MockRelay {
        status: Option<u16>,
        calls: Cell<usize>,
        last: RefCell<Option<RelayPayload>>,
    }

    impl MockRelay {
        fn answering(status: u16) -> Self {
            Self {
                status: Some(status),
                calls: Cell::new(0),
                last: RefCell::new(None),
            }
        }

        fn offline() -> Self {
            Self {
                status: None,
                calls: Cell::new(0),
                last: RefCell::new(None),
            }
        }
    }

    impl Relay for MockRelay {
        async fn post(&self, payload: &RelayPayload) -> RelayResult<RelayResponse> {
            self.calls.set(self.calls.get() + 1);
            *self.last.borrow_mut() = Some(payload.clone());
            match self.status {
                Some(status) => Ok(RelayResponse { status }),
                None => Err(RelayError::Transport("connection reset".into())),
            }
        }
    }

    fn at_confirm(schema: FormSchema) -> Wizard {
        let mut wizard = Wizard::new(schema);
        while wizard.next().is_ok() {}
        assert_eq!(wizard.step(), Step::ConfirmAndPay);
        wizard
    }

    /// Walks the signup scenario: MT4, Jane Doe, Frankfurt.
    fn jane_doe() -> Wizard {
        let mut wizard = Wizard::new(FormSchema::onboarding());
        wizard.update_field(Field::Platform, "MT4").unwrap();
        wizard.next().unwrap();
        wizard.update_field(Field::FullName, "Jane Doe").unwrap();
        wizard.update_field(Field::Email, "jane@x.com").unwrap();
        wizard.update_field(Field::ServerName, "ICMarkets-Live01").unwrap();
        wizard.update_field(Field::Login, "555111").unwrap();
        wizard.update_field(Field::Password, "secret").unwrap();
        wizard.next().unwrap();
        wizard.update_field(Field::Location, "frankfurt").unwrap();
        wizard.next().unwrap();
        wizard
    }

    #[test]
    fn test_steps_move_by_one_within_bounds() {
        let mut wizard = Wizard::new(FormSchema::provisioning());
        assert_eq!(wizard.step(), Step::Selection);
        assert_eq!(wizard.back(), Err(WizardError::AtFirstStep));
        assert_eq!(wizard.step().number(), 1);

        for expected in 2..=4 {
            let step = wizard.next().unwrap();
            assert_eq!(step.number(), expected);
        }
        assert_eq!(wizard.next(), Err(WizardError::AtLastStep));
        assert_eq!(wizard.step().number(), 4);

        for expected in (1..=3).rev() {
            let step = wizard.back().unwrap();
            assert_eq!(step.number(), expected);
        }
        assert_eq!(wizard.step(), Step::Selection);
    }

    #[test]
    fn test_caption() {
        assert_eq!(Step::Infrastructure.caption(), "STEP 3 OF 4: CONFIGURATION");
    }

    #[test]
    fn test_update_rejects_field_outside_schema() {
        let mut wizard = Wizard::new(FormSchema::provisioning());
        assert_eq!(
            wizard.update_field(Field::FullName, "Jane"),
            Err(WizardError::FieldUnavailable(Field::FullName))
        );
    }

    #[test]
    fn test_gating_on_required_fields() {
        let mut wizard = at_confirm(FormSchema::onboarding());
        assert!(!wizard.can_submit());
        assert_eq!(
            wizard.missing_required(),
            vec![Field::FullName, Field::Email, Field::ServerName]
        );

        wizard.update_field(Field::FullName, "Jane Doe").unwrap();
        wizard.update_field(Field::Email, "jane@x.com").unwrap();
        assert!(!wizard.can_submit());

        wizard.update_field(Field::ServerName, "ICMarkets-Live01").unwrap();
        assert!(wizard.can_submit());

        wizard.update_field(Field::Email, "").unwrap();
        assert!(!wizard.can_submit());
        assert!(matches!(
            wizard.begin_submit(&SiteConfig::default()),
            Err(WizardError::MissingRequired(fields)) if fields == vec![Field::Email]
        ));
    }

    #[test]
    fn test_provisioning_submits_without_gating() {
        let wizard = at_confirm(FormSchema::provisioning());
        assert!(wizard.can_submit());
    }

    #[test]
    fn test_submit_only_on_confirm_step() {
        let mut wizard = Wizard::new(FormSchema::provisioning());
        assert_eq!(
            wizard.begin_submit(&SiteConfig::default()),
            Err(WizardError::NotAtConfirmStep)
        );
        assert_eq!(wizard.status(), &SubmitStatus::Idle);
    }

    #[test]
    fn test_second_submit_while_in_flight_is_refused() {
        let config = SiteConfig::default();
        let relay = MockRelay::answering(200);
        let mut wizard = jane_doe();

        let payload = wizard.begin_submit(&config).unwrap();
        assert!(wizard.is_submitting());
        assert_eq!(payload.subject, "SHUSH.CASH ONBOARDING: Jane Doe (MT4)");

        let again = block_on(wizard.submit(&relay, &config));
        assert_eq!(again, Err(WizardError::Busy));
        assert_eq!(relay.calls.get(), 0);

        assert_eq!(wizard.next(), Err(WizardError::Busy));
        assert_eq!(wizard.back(), Err(WizardError::Busy));
        assert_eq!(wizard.update_field(Field::Login, "1"), Err(WizardError::Busy));
        assert!(!wizard.can_submit());
    }

    #[test]
    fn test_scenario_summary() {
        let wizard = jane_doe();
        let summary = wizard.summary(&SiteConfig::default());

        assert_eq!(summary.value("Service"), Some("SMC Titan Setup"));
        assert_eq!(summary.value("Name"), Some("Jane Doe"));
        assert_eq!(summary.value("Email"), Some("jane@x.com"));
        assert_eq!(summary.value("Platform"), Some("MT4"));
        assert_eq!(summary.value("Server"), Some("ICMarkets-Live01"));
        assert_eq!(summary.value("Login"), Some("555111"));
        assert_eq!(summary.value("Region"), Some("frankfurt"));
        assert_eq!(summary.value("Account"), None);
        assert_eq!(summary.fee_label, "£99.00");
    }

    #[test]
    fn test_scenario_success_redirects_to_checkout() {
        let config = SiteConfig::default().with_schema(FormSchema::onboarding());
        let relay = MockRelay::answering(200);
        let mut wizard = jane_doe();

        let outcome = block_on(wizard.submit(&relay, &config)).unwrap();

        assert_eq!(outcome.redirect_url(), Some(crate::config::CHECKOUT_URL));
        assert_eq!(wizard.status(), &SubmitStatus::Succeeded);
        assert!(wizard.is_busy());
        assert_eq!(relay.calls.get(), 1);

        let sent = relay.last.borrow().clone().unwrap();
        assert_eq!(sent.reply_to.as_deref(), Some("jane@x.com"));
        assert_eq!(sent.fields.platform, Platform::Mt4);
        assert_eq!(sent.fields.location, Location::Frankfurt);
        assert_eq!(sent.fields.password.expose(), "secret");
    }

    #[test]
    fn test_checkout_url_ignores_form_content() {
        let config = SiteConfig::default();
        let relay = MockRelay::answering(201);
        let mut wizard = at_confirm(FormSchema::provisioning());

        let outcome = block_on(wizard.submit(&relay, &config)).unwrap();
        assert_eq!(
            outcome,
            SubmitOutcome::Redirect {
                url: config.checkout_url.clone()
            }
        );
    }

    #[test]
    fn test_scenario_rejection_keeps_form_for_resubmit() {
        let config = SiteConfig::default();
        let relay = MockRelay::answering(422);
        let mut wizard = jane_doe();
        let form_before = wizard.form().clone();

        let outcome = block_on(wizard.submit(&relay, &config)).unwrap();

        assert_eq!(outcome, SubmitOutcome::Rejected { status: 422 });
        assert!(outcome.notice().starts_with("Transmission failed"));
        assert!(!wizard.is_submitting());
        assert_eq!(wizard.step(), Step::ConfirmAndPay);
        assert_eq!(wizard.form(), &form_before);
        assert!(wizard.can_submit());

        let retry = MockRelay::answering(200);
        let outcome = block_on(wizard.submit(&retry, &config)).unwrap();
        assert!(outcome.redirect_url().is_some());
    }

    #[test]
    fn test_transport_failure_recovers() {
        let config = SiteConfig::default();
        let relay = MockRelay::offline();
        let mut wizard = jane_doe();

        let outcome = block_on(wizard.submit(&relay, &config)).unwrap();

        assert!(matches!(outcome, SubmitOutcome::TransportFailed { ref reason } if reason.contains("connection reset")));
        assert_eq!(outcome.notice(), "Network error. Please try again.");
        assert!(matches!(
            wizard.status(),
            SubmitStatus::Failed(SubmitFailure::Transport { .. })
        ));
        assert_eq!(wizard.step(), Step::ConfirmAndPay);
        assert!(wizard.back().is_ok());
    }

    #[test]
    fn test_complete_without_begin_is_refused() {
        let mut wizard = jane_doe();
        let result = wizard.complete_submit(Ok(RelayResponse { status: 200 }), &SiteConfig::default());
        assert_eq!(result, Err(WizardError::NotSubmitting));
        assert_eq!(wizard.status(), &SubmitStatus::Idle);
    }

    #[test]
    fn test_failed_redirect_unlocks_wizard() {
        let config = SiteConfig::default();
        let relay = MockRelay::answering(200);
        let mut wizard = jane_doe();
        block_on(wizard.submit(&relay, &config)).unwrap();
        assert!(wizard.is_busy());

        wizard.navigation_failed("blocked by browser").unwrap();

        assert!(matches!(
            wizard.status(),
            SubmitStatus::Failed(SubmitFailure::Navigation { reason }) if reason == "blocked by browser"
        ));
        assert!(!wizard.is_busy());
        assert!(wizard.can_submit());
        assert_eq!(wizard.step(), Step::ConfirmAndPay);
        assert!(wizard.back().is_ok());
    }

    #[test]
    fn test_navigation_failed_requires_success() {
        let mut wizard = jane_doe();
        assert_eq!(wizard.navigation_failed("x"), Err(WizardError::NotSubmitting));
        assert_eq!(wizard.status(), &SubmitStatus::Idle);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut wizard = jane_doe();
        wizard.reset();
        assert_eq!(wizard, Wizard::new(FormSchema::onboarding()));
        assert!(wizard.form().password.is_empty());
    }
}
