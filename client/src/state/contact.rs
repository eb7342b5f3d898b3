//! Contact form state for the simulated submission flow.
//!
//! The form never talks to a network. Submitting waits `SUBMIT_DELAY`,
//! clears the fields, and shows a confirmation for `CONFIRMATION_DURATION`.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::time::Duration;

/// Simulated round-trip before the form reports success.
pub const SUBMIT_DELAY: Duration = Duration::from_millis(1500);
/// How long the confirmation panel stays up.
pub const CONFIRMATION_DURATION: Duration = Duration::from_millis(5000);

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Submitted,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactState {
    pub form: ContactForm,
    pub status: SubmitStatus,
}

impl ContactState {
    pub fn set_field(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.form.name = value,
            ContactField::Email => self.form.email = value,
            ContactField::Message => self.form.message = value,
        }
    }

    /// All fields filled and the email at least looks like an address.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        let form = &self.form;
        !form.name.trim().is_empty()
            && !form.message.trim().is_empty()
            && form
                .email
                .trim()
                .split_once('@')
                .is_some_and(|(local, domain)| !local.is_empty() && !domain.is_empty())
    }

    /// Enter `Submitting`. Returns `false` (and changes nothing) while a
    /// submission is in flight or the form is incomplete.
    pub fn begin_submit(&mut self) -> bool {
        if self.status == SubmitStatus::Submitting || !self.is_complete() {
            return false;
        }
        self.status = SubmitStatus::Submitting;
        true
    }

    /// Complete the simulated submission: clear the fields and confirm.
    pub fn finish_submit(&mut self) {
        if self.status != SubmitStatus::Submitting {
            return;
        }
        self.form = ContactForm::default();
        self.status = SubmitStatus::Submitted;
    }

    /// The confirmation panel replaces the form while this holds.
    #[must_use]
    pub fn shows_confirmation(&self) -> bool {
        self.status == SubmitStatus::Submitted
    }

    /// Hide the confirmation once its display time elapses.
    pub fn dismiss_confirmation(&mut self) {
        if self.status == SubmitStatus::Submitted {
            self.status = SubmitStatus::Idle;
        }
    }
}
