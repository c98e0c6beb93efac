//! Contact form controller.
//!
//! Owns the fields, the submit button state and the single result banner,
//! and walks the submit state machine:
//!
//! ```text
//! Idle -> Validating -> Idle                 (a field failed)
//!                    -> Submitting -> Succeeded
//!                                  -> Failed
//! ```
//!
//! Succeeded and Failed return to Validating on the next submit. The relay
//! call in between is the only await point, so the component drives it with
//! [`FormController::begin_submit`] and [`FormController::finish_submit`].

use log::{debug, info};

use crate::config;

use super::field::{Field, FieldName};
use super::relay::{Relay, SubmissionOutcome};
use super::submission::FormSubmission;
use super::validation::{validate_value, ValidationResult};

pub const DEFAULT_SUBMIT_LABEL: &str = "Send Message";
pub const SENDING_LABEL: &str = "Sending...";
pub const SUCCESS_MESSAGE: &str =
    "Thank you! Your message has been sent successfully. We'll get back to you within 24 hours.";
pub const FAILURE_MESSAGE: &str =
    "Sorry, there was an error sending your message. Please try again or contact us directly.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitState {
    Idle,
    Validating,
    Submitting,
    Succeeded,
    Failed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitButton {
    pub label: String,
    pub disabled: bool,
    original_label: Option<String>,
}

impl SubmitButton {
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into(), disabled: false, original_label: None }
    }

    fn start_sending(&mut self) {
        if self.original_label.is_none() {
            self.original_label = Some(std::mem::replace(&mut self.label, SENDING_LABEL.to_string()));
        }
        self.disabled = true;
    }

    fn restore(&mut self) {
        if let Some(label) = self.original_label.take() {
            self.label = label;
        }
        self.disabled = false;
    }
}

/// Validates one field: clears its old decoration, then sets the new one.
pub fn validate_field<F: Field + ?Sized>(field: &mut F) -> ValidationResult {
    field.clear_validity();
    let result = validate_value(field.name(), field.kind(), field.required(), &field.value());
    field.set_validity(result.valid, result.message);
    debug!("{} -> {:?}", field.name().as_str(), result);
    result
}

/// Validates every required field, even after one has failed, so that each
/// one shows its current state.
pub fn validate_form<F: Field>(fields: &mut [F]) -> bool {
    let mut all_valid = true;
    for field in fields.iter_mut().filter(|field| field.required()) {
        all_valid &= validate_field(field).valid;
    }
    all_valid
}

pub struct FormController<F: Field> {
    fields: Vec<F>,
    state: SubmitState,
    banner: Option<Banner>,
    button: SubmitButton,
}

impl<F: Field> FormController<F> {
    pub fn new(fields: Vec<F>) -> Self {
        Self::with_label(fields, DEFAULT_SUBMIT_LABEL)
    }

    pub fn with_label(fields: Vec<F>, label: &str) -> Self {
        Self {
            fields,
            state: SubmitState::Idle,
            banner: None,
            button: SubmitButton::new(label),
        }
    }

    pub fn fields(&self) -> &[F] {
        &self.fields
    }

    pub fn field(&self, name: FieldName) -> Option<&F> {
        self.fields.iter().find(|field| field.name() == name)
    }

    pub fn state(&self) -> SubmitState {
        self.state
    }

    pub fn banner(&self) -> Option<&Banner> {
        self.banner.as_ref()
    }

    pub fn button(&self) -> &SubmitButton {
        &self.button
    }

    pub fn is_busy(&self) -> bool {
        self.state == SubmitState::Submitting
    }

    pub fn set_value(&mut self, name: FieldName, value: &str) {
        if let Some(field) = self.field_mut(name) {
            field.set_value(value);
        }
    }

    /// Blur handler. Returns `None` for names the form does not have.
    pub fn validate(&mut self, name: FieldName) -> Option<ValidationResult> {
        self.field_mut(name).map(|field| validate_field(field))
    }

    /// Input handler: stores the new value and re-validates the field.
    pub fn input(&mut self, name: FieldName, value: &str) -> Option<ValidationResult> {
        self.set_value(name, value);
        self.validate(name)
    }

    /// How long the current banner stays up before it hides itself. Only
    /// the success banner times out.
    pub fn banner_timeout_ms(&self) -> Option<u32> {
        match self.banner.as_ref()?.kind {
            BannerKind::Success => Some(config::BANNER_DISPLAY_MS),
            BannerKind::Error => None,
        }
    }

    pub fn dismiss_banner(&mut self) {
        self.banner = None;
    }

    /// Handles a submit event up to the point where the relay must be
    /// called. Returns the submission to send, or `None` when validation
    /// failed or a submission is already in flight.
    pub fn begin_submit(&mut self) -> Option<FormSubmission> {
        if self.is_busy() {
            debug!("Submit ignored, a submission is already in flight");
            return None;
        }

        self.banner = None;
        self.state = SubmitState::Validating;

        if !validate_form(&mut self.fields) {
            info!("Contact form has invalid fields, not sending");
            self.state = SubmitState::Idle;
            return None;
        }

        let submission = FormSubmission::from_fields(&self.fields);
        self.button.start_sending();
        self.state = SubmitState::Submitting;
        Some(submission)
    }

    /// Applies the relay result. Does nothing unless a submission is in
    /// flight.
    pub fn finish_submit(&mut self, outcome: SubmissionOutcome) {
        if !self.is_busy() {
            return;
        }

        match outcome {
            SubmissionOutcome::Success => {
                info!("Contact submission delivered");
                for field in self.fields.iter_mut() {
                    field.set_value("");
                    field.clear_validity();
                }
                self.banner = Some(Banner {
                    kind: BannerKind::Success,
                    message: SUCCESS_MESSAGE.to_string(),
                });
                self.state = SubmitState::Succeeded;
            }
            SubmissionOutcome::NetworkFailure(reason) => {
                info!("Contact submission failed: {}", reason);
                self.banner = Some(Banner {
                    kind: BannerKind::Error,
                    message: FAILURE_MESSAGE.to_string(),
                });
                self.state = SubmitState::Failed;
            }
        }

        self.button.restore();
    }

    /// Runs a whole submit attempt against `relay`. Returns the relay
    /// outcome, or `None` if nothing was sent.
    pub async fn submit<R: Relay + ?Sized>(&mut self, relay: &R) -> Option<SubmissionOutcome> {
        let submission = self.begin_submit()?;
        let outcome = relay.submit(&submission).await;
        self.finish_submit(outcome.clone());
        Some(outcome)
    }

    fn field_mut(&mut self, name: FieldName) -> Option<&mut F> {
        self.fields.iter_mut().find(|field| field.name() == name)
    }
}
