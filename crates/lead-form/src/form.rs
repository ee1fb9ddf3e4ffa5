//! Capture form submission state machine.

use lead_contract::{FlattenedErrors, LeadField, LeadRecord, LeadSubmission, validate_submission};
use thiserror::Error;
use tracing::{debug, warn};

use crate::api::{LeadsApi, SubmitError};

/// Lifecycle of one form instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormState {
    /// Accepting edits. Inline errors, if any, are shown here.
    #[default]
    Idle,
    /// A submission is in flight and the trigger is disabled.
    Submitting,
    /// The lead was stored. Terminal for this instance.
    Submitted,
}

/// Why a submit attempt did not start.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitBlocked {
    /// Local checks failed; the errors are also kept on the form.
    #[error("form has invalid fields")]
    Invalid(FlattenedErrors),
    /// Another submission is still running.
    #[error("a submission is already in flight")]
    InFlight,
    /// The form was already submitted successfully.
    #[error("form was already submitted")]
    Completed,
}

/// Transient notification shown after a submission settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// The lead was stored.
    Confirmation,
    /// The service rejected the lead or could not be reached.
    Failure,
}

impl Notice {
    /// Text shown to the visitor. Server payloads are never included.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Confirmation => "Thanks! We will call you back shortly.",
            Self::Failure => "We could not send your request. Please try again.",
        }
    }
}

/// Lead capture form.
///
/// # Examples
/// ```
/// use lead_form::{FormState, LeadForm};
///
/// let mut form = LeadForm::new();
/// form.set_name("Ana");
/// form.set_phone("600 111 222");
/// let submission = form.begin_submit().expect("valid fields");
/// assert_eq!(submission.phone, "600 111 222");
/// assert_eq!(form.state(), FormState::Submitting);
/// assert!(!form.can_submit());
/// ```
#[derive(Debug, Clone, Default)]
pub struct LeadForm {
    name: String,
    phone: String,
    state: FormState,
    errors: FlattenedErrors,
    notice: Option<Notice>,
}

impl LeadForm {
    /// Create an empty form in [`FormState::Idle`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current name field value.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current phone field value.
    #[must_use]
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> FormState {
        self.state
    }

    /// Inline errors for `field`.
    #[must_use]
    pub fn field_errors(&self, field: LeadField) -> &[String] {
        self.errors.field(field)
    }

    /// Whether the submit control is enabled.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.state == FormState::Idle
    }

    /// Edit the name. Ignored unless idle.
    pub fn set_name(&mut self, value: impl Into<String>) {
        if self.can_submit() {
            self.name = value.into();
            self.errors.clear_field(LeadField::Name);
        }
    }

    /// Edit the phone number. Ignored unless idle.
    pub fn set_phone(&mut self, value: impl Into<String>) {
        if self.can_submit() {
            self.phone = value.into();
            self.errors.clear_field(LeadField::Phone);
        }
    }

    /// Validate locally and move to [`FormState::Submitting`].
    ///
    /// The returned submission carries the values as typed; the service
    /// trims them itself.
    ///
    /// # Errors
    /// Returns [`SubmitBlocked`] when the form is not idle or a field fails
    /// the local checks.
    pub fn begin_submit(&mut self) -> Result<LeadSubmission, SubmitBlocked> {
        match self.state {
            FormState::Submitting => return Err(SubmitBlocked::InFlight),
            FormState::Submitted => return Err(SubmitBlocked::Completed),
            FormState::Idle => {}
        }

        let submission = LeadSubmission::new(self.name.clone(), self.phone.clone());
        if let Err(errors) = validate_submission(&submission) {
            debug!(?errors, "submission blocked by local validation");
            self.errors = errors.clone();
            return Err(SubmitBlocked::Invalid(errors));
        }

        self.errors = FlattenedErrors::default();
        self.notice = None;
        self.state = FormState::Submitting;
        Ok(submission)
    }

    /// Settle an in-flight submission. Ignored unless submitting.
    pub fn finish(&mut self, outcome: Result<LeadRecord, SubmitError>) {
        if self.state != FormState::Submitting {
            return;
        }
        match outcome {
            Ok(record) => {
                debug!(lead_id = %record.id, "lead submitted");
                self.name.clear();
                self.phone.clear();
                self.state = FormState::Submitted;
                self.notice = Some(Notice::Confirmation);
            }
            Err(error) => {
                warn!(%error, "lead submission failed");
                self.state = FormState::Idle;
                self.notice = Some(Notice::Failure);
            }
        }
    }

    /// Run a complete submission through `api`.
    ///
    /// # Errors
    /// Returns [`SubmitBlocked`] when the submission never started. Service
    /// failures are reported through [`LeadForm::take_notice`] instead.
    pub async fn submit_with<A>(&mut self, api: &A) -> Result<(), SubmitBlocked>
    where
        A: LeadsApi + ?Sized,
    {
        let submission = self.begin_submit()?;
        let outcome = api.create_lead(&submission).await;
        self.finish(outcome);
        Ok(())
    }

    /// Take the pending notification, if any.
    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }
}

#[cfg(test)]
#[path = "form_tests.rs"]
mod tests;
