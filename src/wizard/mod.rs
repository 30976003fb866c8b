//! Stepper engine for the provider-onboarding wizard.
//!
//! A tagged state machine over one [`RegistrationDraft`]: four ordered steps
//! with per-step validation, a conditional shortcut when the provider has no
//! prior experience, and a guarded asynchronous submission. Step transitions
//! are synchronous; only the final submission crosses the network boundary,
//! and the `Submitting` state doubles as the single-in-flight guard.

pub mod draft;
pub mod validate;

use async_trait::async_trait;
use serde::Deserialize;

use draft::{ExperienceAnswer, RegistrationDraft, RegistrationPayload};

/// Notice shown when a forward jump is rejected.
pub const COMPLETE_STEP_NOTICE: &str = "Complete the current step first.";

/// Notice shown when submission fails without a usable error body.
pub const GENERIC_SUBMIT_NOTICE: &str =
    "Registration could not be completed. Please try again.";

/// The four ordered wizard steps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Step {
    Contact,
    Address,
    Experience,
    Schedule,
}

impl Step {
    pub const ALL: [Step; 4] = [Step::Contact, Step::Address, Step::Experience, Step::Schedule];

    /// 1-based step number as shown to the user.
    pub fn number(self) -> u8 {
        match self {
            Step::Contact => 1,
            Step::Address => 2,
            Step::Experience => 3,
            Step::Schedule => 4,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Step::Contact => "Contact details",
            Step::Address => "Address",
            Step::Experience => "Experience",
            Step::Schedule => "Start date",
        }
    }

    fn next(self) -> Option<Step> {
        match self {
            Step::Contact => Some(Step::Address),
            Step::Address => Some(Step::Experience),
            Step::Experience => Some(Step::Schedule),
            Step::Schedule => None,
        }
    }

    fn prev(self) -> Option<Step> {
        match self {
            Step::Contact => None,
            Step::Address => Some(Step::Contact),
            Step::Experience => Some(Step::Address),
            Step::Schedule => Some(Step::Experience),
        }
    }
}

/// One structured validation failure from the registration endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// A failed submission. With field errors every one of them is rendered;
/// otherwise the top-level message, otherwise a generic fallback.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SubmitFailure {
    pub message: Option<String>,
    pub errors: Vec<FieldError>,
}

impl SubmitFailure {
    pub fn notices(&self) -> Vec<String> {
        if !self.errors.is_empty() {
            return self
                .errors
                .iter()
                .map(|e| format!("{}: {}", e.field, e.message))
                .collect();
        }
        match self.message.as_deref().map(str::trim) {
            Some(msg) if !msg.is_empty() => vec![msg.to_string()],
            _ => vec![GENERIC_SUBMIT_NOTICE.to_string()],
        }
    }
}

/// Network boundary for the final submission. Object-safe so pages and
/// tests can inject their own collaborator.
#[async_trait(?Send)]
pub trait RegistrationGateway {
    async fn submit(&self, payload: &RegistrationPayload) -> Result<(), SubmitFailure>;
}

/// Wizard lifecycle. `Failed` is non-terminal: the user retries from the
/// final step. `Submitted` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WizardState {
    Editing(Step),
    Submitting,
    Submitted,
    Failed,
}

/// Outcome of a forward navigation request.
#[derive(Clone, Debug, PartialEq)]
pub enum NextOutcome {
    /// Moved to the given step.
    Advanced(Step),
    /// Validation failed, or a submission is already in flight.
    Stayed,
    /// The final step validated; the caller must run this payload through
    /// the gateway and report back via [`Wizard::finish_submit`].
    Submit(RegistrationPayload),
}

/// The stepper engine. Owns the draft for its whole lifetime.
#[derive(Clone, Debug, PartialEq)]
pub struct Wizard {
    state: WizardState,
    pub draft: RegistrationDraft,
    notices: Vec<String>,
}

impl Default for Wizard {
    fn default() -> Self {
        Wizard::new()
    }
}

impl Wizard {
    pub fn new() -> Wizard {
        Wizard {
            state: WizardState::Editing(Step::Contact),
            draft: RegistrationDraft::default(),
            notices: Vec::new(),
        }
    }

    pub fn state(&self) -> WizardState {
        self.state
    }

    /// Human-readable problems with the last action, in order.
    pub fn notices(&self) -> &[String] {
        &self.notices
    }

    /// The step currently on screen. `Submitting`/`Failed` keep the user on
    /// the final step; `Submitted` has nothing left to show.
    pub fn current_step(&self) -> Option<Step> {
        match self.state {
            WizardState::Editing(step) => Some(step),
            WizardState::Submitting | WizardState::Failed => Some(Step::Schedule),
            WizardState::Submitted => None,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.state == WizardState::Submitting
    }

    /// Validates the current step and advances, or begins submission on the
    /// final step. While a submission is in flight this is a no-op, which is
    /// what makes duplicate registrations impossible.
    pub fn go_next(&mut self) -> NextOutcome {
        let step = match self.state {
            WizardState::Editing(step) => step,
            // Retry after a failure re-validates the final step.
            WizardState::Failed => Step::Schedule,
            WizardState::Submitting | WizardState::Submitted => return NextOutcome::Stayed,
        };

        let violations = validate::validate_step(step, &self.draft);
        if !violations.is_empty() {
            self.notices = violations;
            return NextOutcome::Stayed;
        }
        self.notices.clear();

        match step.next() {
            Some(next) => {
                self.state = WizardState::Editing(next);
                NextOutcome::Advanced(next)
            }
            None => {
                self.state = WizardState::Submitting;
                NextOutcome::Submit(self.draft.to_payload())
            }
        }
    }

    /// Moves one step back without validating. No-op on the first step and
    /// while a submission is in flight.
    pub fn go_back(&mut self) {
        let step = match self.state {
            WizardState::Editing(step) => step,
            WizardState::Failed => Step::Schedule,
            WizardState::Submitting | WizardState::Submitted => return,
        };
        if let Some(prev) = step.prev() {
            self.state = WizardState::Editing(prev);
            self.notices.clear();
        }
    }

    /// Jumps back to an earlier, already-completed step. Forward jumps are
    /// rejected with a notice; jump-back runs no validation.
    pub fn jump_to(&mut self, target: Step) -> bool {
        let Some(current) = self.current_step() else { return false };
        if self.is_submitting() {
            return false;
        }
        if target >= current {
            if target != current {
                self.notices = vec![COMPLETE_STEP_NOTICE.to_string()];
            }
            return false;
        }
        self.state = WizardState::Editing(target);
        self.notices.clear();
        true
    }

    /// Records a "no prior experience" answer and jumps straight to the
    /// final step, bypassing the normal advance-one rule. This is the
    /// intentional shortcut on step 3, not a validation path.
    pub fn answer_no_and_skip(&mut self) {
        if self.state != WizardState::Editing(Step::Experience) {
            return;
        }
        self.draft.experience = ExperienceAnswer::No;
        self.draft.company.clear();
        self.notices.clear();
        self.state = WizardState::Editing(Step::Schedule);
    }

    /// Reports the outcome of the in-flight submission. On success the
    /// draft is discarded and the wizard is done; on failure the user stays
    /// on the final step with every error rendered.
    pub fn finish_submit(&mut self, result: Result<(), SubmitFailure>) {
        if self.state != WizardState::Submitting {
            return;
        }
        match result {
            Ok(()) => {
                self.draft = RegistrationDraft::default();
                self.notices.clear();
                self.state = WizardState::Submitted;
            }
            Err(failure) => {
                self.notices = failure.notices();
                self.state = WizardState::Failed;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn filled_contact(wizard: &mut Wizard) {
        wizard.draft.first_name = "Amal".to_string();
        wizard.draft.last_name = "Hassan".to_string();
        wizard.draft.email = "amal@example.com".to_string();
        wizard.draft.phone = "+966500000001".to_string();
    }

    fn filled_address(wizard: &mut Wizard) {
        wizard.draft.address = "12 King Fahd Rd".to_string();
        wizard.draft.postcode = "11564".to_string();
        wizard.draft.city_id = "1".to_string();
        wizard.draft.region = "Riyadh Province".to_string();
    }

    /// Wizard advanced through steps 1-3 with a yes-with-company answer.
    fn at_schedule() -> Wizard {
        let mut wizard = Wizard::new();
        filled_contact(&mut wizard);
        assert_eq!(wizard.go_next(), NextOutcome::Advanced(Step::Address));
        filled_address(&mut wizard);
        assert_eq!(wizard.go_next(), NextOutcome::Advanced(Step::Experience));
        wizard.draft.experience = ExperienceAnswer::YesWithCompany;
        wizard.draft.company = "CleanCo".to_string();
        assert_eq!(wizard.go_next(), NextOutcome::Advanced(Step::Schedule));
        wizard.draft.start_date = "2026-09-01".to_string();
        wizard
    }

    /// Gateway double that counts calls and returns a canned result.
    struct FakeGateway {
        calls: Cell<usize>,
        result: Result<(), SubmitFailure>,
    }

    impl FakeGateway {
        fn succeeding() -> FakeGateway {
            FakeGateway { calls: Cell::new(0), result: Ok(()) }
        }

        fn failing(failure: SubmitFailure) -> FakeGateway {
            FakeGateway { calls: Cell::new(0), result: Err(failure) }
        }
    }

    #[async_trait(?Send)]
    impl RegistrationGateway for FakeGateway {
        async fn submit(&self, _payload: &RegistrationPayload) -> Result<(), SubmitFailure> {
            self.calls.set(self.calls.get() + 1);
            self.result.clone()
        }
    }

    /// Drives a `go_next` outcome through the gateway the way a page does.
    async fn drive(wizard: &mut Wizard, gateway: &FakeGateway) {
        if let NextOutcome::Submit(payload) = wizard.go_next() {
            let result = gateway.submit(&payload).await;
            wizard.finish_submit(result);
        }
    }

    #[test]
    fn empty_email_never_advances_step_one() {
        let mut wizard = Wizard::new();
        filled_contact(&mut wizard);
        wizard.draft.email = String::new();

        assert_eq!(wizard.go_next(), NextOutcome::Stayed);
        assert_eq!(wizard.current_step(), Some(Step::Contact));
        assert_eq!(wizard.notices(), ["A valid email address is required"]);
    }

    #[test]
    fn validation_reports_all_violations_not_just_the_first() {
        let mut wizard = Wizard::new();
        assert_eq!(wizard.go_next(), NextOutcome::Stayed);
        assert_eq!(wizard.notices().len(), 4);
    }

    #[test]
    fn answering_no_jumps_directly_to_final_step() {
        let mut wizard = Wizard::new();
        filled_contact(&mut wizard);
        wizard.go_next();
        filled_address(&mut wizard);
        wizard.go_next();
        assert_eq!(wizard.current_step(), Some(Step::Experience));

        wizard.answer_no_and_skip();
        assert_eq!(wizard.current_step(), Some(Step::Schedule));
        assert_eq!(wizard.draft.experience, ExperienceAnswer::No);
    }

    #[test]
    fn answer_no_is_only_a_step_three_transition() {
        let mut wizard = Wizard::new();
        wizard.answer_no_and_skip();
        assert_eq!(wizard.current_step(), Some(Step::Contact));
        assert_eq!(wizard.draft.experience, ExperienceAnswer::Unanswered);
    }

    #[test]
    fn forward_jump_is_rejected_with_notice() {
        let mut wizard = Wizard::new();
        filled_contact(&mut wizard);
        wizard.go_next();
        assert_eq!(wizard.current_step(), Some(Step::Address));

        assert!(!wizard.jump_to(Step::Experience));
        assert_eq!(wizard.current_step(), Some(Step::Address));
        assert_eq!(wizard.notices(), [COMPLETE_STEP_NOTICE]);
    }

    #[test]
    fn jump_back_runs_no_validation() {
        let mut wizard = at_schedule();
        // Break an earlier step's data, then jump back anyway.
        wizard.draft.email = String::new();
        assert!(wizard.jump_to(Step::Contact));
        assert_eq!(wizard.current_step(), Some(Step::Contact));
        assert!(wizard.notices().is_empty());
    }

    #[test]
    fn go_back_is_a_no_op_on_step_one_and_never_validates() {
        let mut wizard = Wizard::new();
        wizard.go_back();
        assert_eq!(wizard.current_step(), Some(Step::Contact));

        let mut wizard = at_schedule();
        wizard.draft.start_date = String::new();
        wizard.go_back();
        assert_eq!(wizard.current_step(), Some(Step::Experience));
    }

    #[tokio::test]
    async fn double_submit_results_in_one_network_call() {
        let mut wizard = at_schedule();
        let gateway = FakeGateway::succeeding();

        let first = wizard.go_next();
        assert!(matches!(first, NextOutcome::Submit(_)));
        // Second click while the first call is still outstanding.
        assert_eq!(wizard.go_next(), NextOutcome::Stayed);

        if let NextOutcome::Submit(payload) = first {
            let result = gateway.submit(&payload).await;
            wizard.finish_submit(result);
        }
        assert_eq!(gateway.calls.get(), 1);
        assert_eq!(wizard.state(), WizardState::Submitted);
    }

    #[tokio::test]
    async fn successful_round_trip_ends_submitted_with_draft_discarded() {
        let mut wizard = at_schedule();
        let gateway = FakeGateway::succeeding();

        drive(&mut wizard, &gateway).await;

        assert_eq!(wizard.state(), WizardState::Submitted);
        assert_eq!(wizard.current_step(), None);
        assert_eq!(wizard.draft, RegistrationDraft::default());
        assert_eq!(gateway.calls.get(), 1);
    }

    #[tokio::test]
    async fn field_errors_are_all_rendered_with_field_names() {
        let mut wizard = at_schedule();
        let gateway = FakeGateway::failing(SubmitFailure {
            message: None,
            errors: vec![
                FieldError { field: "email".to_string(), message: "already used".to_string() },
                FieldError { field: "phone".to_string(), message: "invalid".to_string() },
            ],
        });

        drive(&mut wizard, &gateway).await;

        assert_eq!(wizard.state(), WizardState::Failed);
        assert_eq!(wizard.notices(), ["email: already used", "phone: invalid"]);
        // Still on the final step; the user may retry.
        assert_eq!(wizard.current_step(), Some(Step::Schedule));
    }

    #[tokio::test]
    async fn transport_failure_shows_generic_notice_and_allows_retry() {
        let mut wizard = at_schedule();
        let gateway = FakeGateway::failing(SubmitFailure::default());

        drive(&mut wizard, &gateway).await;
        assert_eq!(wizard.notices(), [GENERIC_SUBMIT_NOTICE]);

        // Retry succeeds.
        let retry = FakeGateway::succeeding();
        drive(&mut wizard, &retry).await;
        assert_eq!(wizard.state(), WizardState::Submitted);
        assert_eq!(retry.calls.get(), 1);
    }

    #[test]
    fn failure_notices_prefer_field_errors_then_message_then_generic() {
        let failure = SubmitFailure {
            message: Some("nope".to_string()),
            errors: vec![FieldError { field: "email".to_string(), message: "taken".to_string() }],
        };
        assert_eq!(failure.notices(), ["email: taken"]);

        let failure = SubmitFailure { message: Some("nope".to_string()), errors: Vec::new() };
        assert_eq!(failure.notices(), ["nope"]);

        let failure = SubmitFailure { message: Some("   ".to_string()), errors: Vec::new() };
        assert_eq!(failure.notices(), [GENERIC_SUBMIT_NOTICE]);
    }
}
