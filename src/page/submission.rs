//! Simulated asynchronous form submission
//!
//! Stands in for a network call: the submit control shows a sending state,
//! then after a fixed delay the form is cleared and a success notice shown for
//! a while. Nothing here can fail.

use crate::config::{LabelConfig, TimingConfig};
use crate::dom::{Dom, ScrollBlock};
use crate::timers::{Scheduler, TimerEvent, TimerHandle};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

/// Values accepted by a simulated submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Enquiry {
    /// Trimmed field values keyed by field name
    pub values: BTreeMap<String, String>,
    pub received_at: DateTime<Utc>,
}

/// Drives the submit control and success notice through a submission
#[derive(Debug)]
pub struct SubmissionSimulator {
    submit_button: String,
    success_notice: String,
    /// Every field cleared on completion
    fields: Vec<String>,
    timing: TimingConfig,
    labels: LabelConfig,
    /// Values waiting for the processing delay to elapse
    in_flight: Option<BTreeMap<String, String>>,
    /// Label the control had before it switched to the sending label
    idle_label: Option<String>,
    hide_timer: Option<TimerHandle>,
}

impl SubmissionSimulator {
    pub fn new(
        submit_button: &str,
        success_notice: &str,
        fields: Vec<String>,
        timing: TimingConfig,
        labels: LabelConfig,
    ) -> Self {
        Self {
            submit_button: submit_button.to_string(),
            success_notice: success_notice.to_string(),
            fields,
            timing,
            labels,
            in_flight: None,
            idle_label: None,
            hide_timer: None,
        }
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Stage one: lock the submit control and schedule completion
    pub fn submit<D: Dom, S: Scheduler>(
        &mut self,
        dom: &mut D,
        scheduler: &mut S,
        values: BTreeMap<String, String>,
    ) {
        // A notice still showing from the previous enquiry must not hide the
        // next one early.
        if let Some(handle) = self.hide_timer.take() {
            scheduler.cancel(handle);
        }

        self.idle_label = dom.text(&self.submit_button).filter(|l| !l.is_empty());
        dom.set_disabled(&self.submit_button, true);
        dom.set_text(&self.submit_button, &self.labels.sending);

        self.in_flight = Some(values);
        scheduler.schedule(self.timing.submit_delay(), TimerEvent::SubmissionProcessed);
        tracing::debug!(
            "submission started, completing in {}ms",
            self.timing.submit_delay_ms
        );
    }

    /// Stage two: release the control, show the notice, clear the form
    pub fn complete<D: Dom, S: Scheduler>(
        &mut self,
        dom: &mut D,
        scheduler: &mut S,
    ) -> Option<Enquiry> {
        let values = self.in_flight.take()?;

        let label = self
            .idle_label
            .take()
            .unwrap_or_else(|| self.labels.send.clone());
        dom.set_disabled(&self.submit_button, false);
        dom.set_text(&self.submit_button, &label);

        dom.set_visible(&self.success_notice, true);
        dom.scroll_into_view(&self.success_notice, ScrollBlock::Center);

        for field in &self.fields {
            dom.set_value(field, "");
        }

        self.hide_timer = Some(scheduler.schedule(
            self.timing.success_notice(),
            TimerEvent::HideSuccessNotice,
        ));

        let enquiry = Enquiry {
            values,
            received_at: Utc::now(),
        };
        tracing::info!("Form submitted: {:?}", enquiry.values);
        Some(enquiry)
    }

    /// Final stage: hide the success notice
    pub fn hide_notice<D: Dom>(&mut self, dom: &mut D) {
        self.hide_timer = None;
        dom.set_visible(&self.success_notice, false);
    }
}
