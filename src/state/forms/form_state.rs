//! Contact form submit state

use std::collections::BTreeSet;

/// Phase of the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    /// A submission is in flight; further submits are ignored
    Submitting,
}

/// Mutable state owned by the contact form controller
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub phase: FormPhase,
    /// Fields that failed the most recent validation pass
    pub last_error_set: BTreeSet<String>,
}

impl FormState {
    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    /// Replace the error set with the fields that just failed
    pub fn record_errors<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.last_error_set = names.into_iter().map(Into::into).collect();
    }

    pub fn begin_submission(&mut self) {
        self.phase = FormPhase::Submitting;
        self.last_error_set.clear();
    }

    /// Back to the pristine state, as after clearing the form
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
