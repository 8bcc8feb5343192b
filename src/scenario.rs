//! Scripted page sessions
//!
//! A scenario describes a document, the path it is served at and a list of
//! steps: user events and waits. Running it yields the final document and
//! everything the page produced along the way.

use crate::config::SiteConfig;
use crate::dom::{Element, MemoryDom};
use crate::page::{Enquiry, Page, PageEvent, SubmitOutcome};
use crate::timers::{TokioTimers, VirtualClock};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

fn root_path() -> String {
    "/".to_string()
}

/// One step of a scenario
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Step {
    /// Let time pass, firing any timers that come due
    Wait { wait_ms: u64 },
    Event(PageEvent),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Scenario {
    /// Path the page is served at
    #[serde(default = "root_path")]
    pub path: String,
    /// Document elements in document order
    #[serde(default)]
    pub elements: Vec<Element>,
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// Everything a scenario run produced
#[derive(Debug, Serialize)]
pub struct Report {
    pub path: String,
    pub active_links: Vec<String>,
    pub submissions: Vec<SubmitOutcome>,
    pub enquiries: Vec<Enquiry>,
    /// Timers still pending when the script ended
    pub pending_timers: usize,
    pub document: MemoryDom,
}

impl Report {
    fn new(path: &str, page: &Page) -> Self {
        Self {
            path: path.to_string(),
            active_links: page.active_links().to_vec(),
            submissions: Vec::new(),
            enquiries: Vec::new(),
            pending_timers: 0,
            document: MemoryDom::new(),
        }
    }
}

impl Scenario {
    /// Load a scenario from a JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading scenario {}", path.display()))?;
        Self::from_json(&content).with_context(|| format!("parsing scenario {}", path.display()))
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    fn load_page(&self, config: &SiteConfig) -> Result<(MemoryDom, Page)> {
        let mut dom = MemoryDom::from_elements(self.elements.clone());
        let page = Page::load(&mut dom, config, &self.path)
            .with_context(|| format!("loading page {}", self.path))?;
        Ok((dom, page))
    }

    /// Run against a virtual clock: waits complete instantly and timer
    /// ordering is deterministic.
    pub fn run(&self, config: &SiteConfig) -> Result<Report> {
        let (mut dom, mut page) = self.load_page(config)?;
        let mut report = Report::new(&self.path, &page);
        let mut clock = VirtualClock::new();

        for step in &self.steps {
            match step {
                Step::Event(event) => {
                    let dispatch = page.dispatch(event, &mut dom, &mut clock);
                    if dispatch.default_prevented {
                        tracing::debug!(?event, "default action prevented");
                    }
                    report.submissions.extend(dispatch.submission);
                }
                Step::Wait { wait_ms } => {
                    let until = clock.now() + Duration::from_millis(*wait_ms);
                    while let Some(event) = clock.pop_due(until) {
                        report
                            .enquiries
                            .extend(page.on_timer(&event, &mut dom, &mut clock));
                    }
                    clock.settle(until);
                }
            }
        }

        report.pending_timers = clock.pending();
        report.document = dom;
        Ok(report)
    }

    /// Run against wall-clock time on the tokio timer wheel
    pub async fn run_realtime(&self, config: &SiteConfig) -> Result<Report> {
        let (mut dom, mut page) = self.load_page(config)?;
        let mut report = Report::new(&self.path, &page);
        let mut timers = TokioTimers::new();

        for step in &self.steps {
            match step {
                Step::Event(event) => {
                    let dispatch = page.dispatch(event, &mut dom, &mut timers);
                    if dispatch.default_prevented {
                        tracing::debug!(?event, "default action prevented");
                    }
                    report.submissions.extend(dispatch.submission);
                }
                Step::Wait { wait_ms } => {
                    let deadline = tokio::time::Instant::now() + Duration::from_millis(*wait_ms);
                    loop {
                        let fired = tokio::time::timeout_at(deadline, timers.next_fired()).await;
                        match fired {
                            Ok(Some(event)) => {
                                tracing::debug!(?event, "timer fired");
                                report
                                    .enquiries
                                    .extend(page.on_timer(&event, &mut dom, &mut timers));
                            }
                            Ok(None) => {
                                tokio::time::sleep_until(deadline).await;
                                break;
                            }
                            Err(_elapsed) => break,
                        }
                    }
                }
            }
        }

        report.pending_timers = timers.pending();
        report.document = dom;
        Ok(report)
    }
}
