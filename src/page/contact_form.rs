//! Contact form controller

use super::presenter::ErrorPresenter;
use super::submission::{Enquiry, SubmissionSimulator};
use super::validator::{validate_field, ValidationResult};
use crate::config::SiteConfig;
use crate::dom::Dom;
use crate::error::SetupError;
use crate::state::{FieldSpec, FormState};
use crate::timers::Scheduler;
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

/// What happened to a submit trigger
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SubmitOutcome {
    /// A submission is already in flight
    Ignored,
    /// At least one field failed validation; nothing was submitted
    Blocked {
        first_invalid: String,
        failures: Vec<ValidationResult>,
    },
    /// All fields passed and the submission started
    Accepted,
}

/// Validates the contact form on submit and hands valid input to the
/// submission simulator
#[derive(Debug)]
pub struct ContactForm {
    fields: Vec<FieldSpec>,
    submit_button: String,
    presenter: ErrorPresenter,
    simulator: SubmissionSimulator,
    state: FormState,
}

impl ContactForm {
    const COMPONENT: &'static str = "contact form";

    /// Bind to the document.
    ///
    /// Returns `Ok(None)` when the page has no contact form. A form that is
    /// present but lacks a field input, the submit control or the success
    /// notice is a setup error.
    pub fn attach<D: Dom>(dom: &D, config: &SiteConfig) -> Result<Option<Self>, SetupError> {
        let layout = &config.layout;
        if !dom.contains(&layout.form) {
            tracing::debug!("no contact form on this page");
            return Ok(None);
        }

        let mut seen = HashSet::new();
        for field in &layout.fields {
            if !seen.insert(field.name.as_str()) {
                return Err(SetupError::DuplicateField(field.name.clone()));
            }
        }

        let required = layout
            .fields
            .iter()
            .map(|f| f.input_id())
            .chain([layout.submit_button.as_str(), layout.success_notice.as_str()]);
        for id in required {
            if !dom.contains(id) {
                return Err(SetupError::MissingElement {
                    component: Self::COMPONENT,
                    element: id.to_string(),
                });
            }
        }

        let simulator = SubmissionSimulator::new(
            &layout.submit_button,
            &layout.success_notice,
            layout.fields.iter().map(|f| f.input_id().to_string()).collect(),
            config.timing.clone(),
            config.labels.clone(),
        );

        Ok(Some(Self {
            fields: layout.fields.clone(),
            submit_button: layout.submit_button.clone(),
            presenter: ErrorPresenter::new(&layout.fields),
            simulator,
            state: FormState::default(),
        }))
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Id of the submit control
    pub fn submit_button(&self) -> &str {
        &self.submit_button
    }

    /// Current trimmed values of every registered field
    pub fn read_values<D: Dom>(&self, dom: &D) -> BTreeMap<String, String> {
        self.fields
            .iter()
            .map(|f| {
                let value = dom.value(f.input_id()).unwrap_or_default();
                (f.name.clone(), value.trim().to_string())
            })
            .collect()
    }

    /// Validate every registered field in form order
    pub fn validate_all<D: Dom>(&self, dom: &D) -> Vec<ValidationResult> {
        let values = self.read_values(dom);
        self.fields
            .iter()
            .map(|f| validate_field(f, values.get(&f.name).map_or("", String::as_str)))
            .collect()
    }

    /// Handle a submit trigger
    pub fn submit<D: Dom, S: Scheduler>(
        &mut self,
        dom: &mut D,
        scheduler: &mut S,
    ) -> SubmitOutcome {
        if self.state.is_submitting() {
            tracing::debug!("submit ignored, submission already in flight");
            return SubmitOutcome::Ignored;
        }

        self.presenter.clear_all(dom);

        let results = self.validate_all(dom);
        let failures: Vec<ValidationResult> =
            results.into_iter().filter(|r| !r.is_valid).collect();
        self.state
            .record_errors(failures.iter().map(|r| r.field_name.as_str()));

        if let Some(first) = failures.first() {
            for failure in &failures {
                self.presenter
                    .show_error(dom, &failure.field_name, &failure.message);
            }
            let first_invalid = first.field_name.clone();
            dom.focus(&first_invalid);
            tracing::debug!(
                "submit blocked, {} invalid field(s), focusing {first_invalid}",
                failures.len()
            );
            return SubmitOutcome::Blocked {
                first_invalid,
                failures,
            };
        }

        let values = self.read_values(dom);
        self.state.begin_submission();
        self.simulator.submit(dom, scheduler, values);
        SubmitOutcome::Accepted
    }

    /// The simulated processing delay elapsed
    pub fn on_submission_processed<D: Dom, S: Scheduler>(
        &mut self,
        dom: &mut D,
        scheduler: &mut S,
    ) -> Option<Enquiry> {
        let enquiry = self.simulator.complete(dom, scheduler);
        // The form has just been cleared
        self.state.reset();
        enquiry
    }

    /// The success notice has been shown long enough
    pub fn on_hide_notice<D: Dom>(&mut self, dom: &mut D) {
        self.simulator.hide_notice(dom);
    }
}
