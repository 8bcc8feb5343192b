//! Page components and event dispatch
//!
//! A [`Page`] is built once per page load from the document and the site
//! configuration. Every component is an explicit instance bound to its
//! element ids; components whose elements are absent are simply not attached.

mod accordion;
mod active_link;
mod contact_form;
mod drawer;
mod interactions;
mod presenter;
mod submission;
mod validator;

pub use accordion::{Accordion, AccordionSet};
pub use active_link::{is_active_target, mark_active_links, normalize_path, ACTIVE_CLASS};
pub use contact_form::{ContactForm, SubmitOutcome};
pub use drawer::{DrawerTrigger, NavDrawer, OPEN_CLASS, SCROLL_LOCK_CLASS};
pub use interactions::{Interactions, RAISED_SHADOW, RESTING_SHADOW};
pub use presenter::ErrorPresenter;
pub use submission::{Enquiry, SubmissionSimulator};
pub use validator::{
    is_valid_email, is_valid_phone, validate, validate_field, ValidationFailure,
    ValidationResult,
};

use crate::config::SiteConfig;
use crate::dom::Dom;
use crate::error::SetupError;
use crate::timers::{Scheduler, TimerEvent};
use serde::{Deserialize, Serialize};

/// A discrete user interaction delivered to the page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PageEvent {
    Click { target: String },
    KeyDown { key: String },
    /// The contact form's submit trigger
    Submit,
    /// The user typed into a form control
    Input { field: String, value: String },
    Scroll { y: f64 },
    PointerEnter { target: String },
    PointerLeave { target: String },
}

/// What dispatching one event produced
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dispatch {
    /// Set when the event triggered a form submission
    pub submission: Option<SubmitOutcome>,
    /// The browser's default action (following a link, posting the form)
    /// must not happen
    pub default_prevented: bool,
}

impl Dispatch {
    fn prevented(submission: Option<SubmitOutcome>) -> Self {
        Self {
            submission,
            default_prevented: true,
        }
    }
}

/// All interactive components of one loaded page
#[derive(Debug)]
pub struct Page {
    contact_form: Option<ContactForm>,
    drawer: Option<NavDrawer>,
    accordions: AccordionSet,
    interactions: Interactions,
    active_links: Vec<String>,
}

impl Page {
    /// Attach every component to the document and mark the active
    /// navigation link for `current_path`.
    pub fn load<D: Dom>(
        dom: &mut D,
        config: &SiteConfig,
        current_path: &str,
    ) -> Result<Self, SetupError> {
        let layout = &config.layout;
        let contact_form = ContactForm::attach(dom, config)?;
        let active_links = mark_active_links(dom, current_path, &layout.nav_link_attribute);
        let page = Self {
            contact_form,
            drawer: NavDrawer::attach(dom, layout),
            accordions: AccordionSet::attach(dom, layout),
            interactions: Interactions::new(config),
            active_links,
        };
        tracing::debug!(
            contact_form = page.contact_form.is_some(),
            drawer = page.drawer.is_some(),
            accordions = page.accordions.len(),
            "page loaded at {current_path}"
        );
        Ok(page)
    }

    pub fn contact_form(&self) -> Option<&ContactForm> {
        self.contact_form.as_ref()
    }

    pub fn drawer(&self) -> Option<&NavDrawer> {
        self.drawer.as_ref()
    }

    pub fn accordions(&self) -> &AccordionSet {
        &self.accordions
    }

    /// Ids of the links flagged active at load
    pub fn active_links(&self) -> &[String] {
        &self.active_links
    }

    /// Route an event to the component that owns its target
    pub fn dispatch<D: Dom, S: Scheduler>(
        &mut self,
        event: &PageEvent,
        dom: &mut D,
        scheduler: &mut S,
    ) -> Dispatch {
        match event {
            PageEvent::Click { target } => return self.click(target, dom, scheduler),
            PageEvent::KeyDown { key } => {
                if key == "Escape" {
                    if let Some(drawer) = self.drawer.as_mut() {
                        drawer.handle(dom, DrawerTrigger::Escape);
                    }
                }
            }
            PageEvent::Submit => {
                if let Some(form) = self.contact_form.as_mut() {
                    return Dispatch::prevented(Some(form.submit(dom, scheduler)));
                }
            }
            PageEvent::Input { field, value } => dom.set_value(field, value),
            PageEvent::Scroll { y } => self.interactions.on_scroll(dom, *y),
            PageEvent::PointerEnter { target } => self.interactions.on_pointer_enter(dom, target),
            PageEvent::PointerLeave { target } => self.interactions.on_pointer_leave(dom, target),
        }
        Dispatch::default()
    }

    fn click<D: Dom, S: Scheduler>(
        &mut self,
        target: &str,
        dom: &mut D,
        scheduler: &mut S,
    ) -> Dispatch {
        if let Some(drawer) = self.drawer.as_mut() {
            if let Some(trigger) = drawer.trigger_for_click(target) {
                drawer.handle(dom, trigger);
                return Dispatch::default();
            }
        }

        if self.accordions.toggle(dom, target) {
            return Dispatch::default();
        }

        if let Some(form) = self.contact_form.as_mut() {
            if form.submit_button() == target {
                return Dispatch::prevented(Some(form.submit(dom, scheduler)));
            }
        }

        Dispatch {
            submission: None,
            default_prevented: self.interactions.on_click(dom, scheduler, target),
        }
    }

    /// Deliver a fired timer event. Returns the enquiry when a simulated
    /// submission completed.
    pub fn on_timer<D: Dom, S: Scheduler>(
        &mut self,
        event: &TimerEvent,
        dom: &mut D,
        scheduler: &mut S,
    ) -> Option<Enquiry> {
        match event {
            TimerEvent::SubmissionProcessed => self
                .contact_form
                .as_mut()
                .and_then(|form| form.on_submission_processed(dom, scheduler)),
            TimerEvent::HideSuccessNotice => {
                if let Some(form) = self.contact_form.as_mut() {
                    form.on_hide_notice(dom);
                }
                None
            }
            TimerEvent::ReleasePress { target } => {
                self.interactions.on_release(dom, target);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{Element, MemoryDom};
    use crate::state::FieldSpec;
    use crate::timers::VirtualClock;
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    fn full_page() -> MemoryDom {
        let mut dom = MemoryDom::from_elements(vec![
            Element::new("body"),
            Element::new("navigation"),
            Element::new("mpr-open"),
            Element::new("mpr-close"),
            Element::new("mpr-drawer"),
            Element::new("mpr-overlay"),
            Element::new("services-btn")
                .with_class("mpr-drawer-accordion-btn")
                .with_attribute("aria-expanded", "false")
                .with_attribute("aria-controls", "services-panel"),
            Element::new("services-panel").hidden(),
            Element::new("nav-mornington")
                .with_attribute("data-nav", "")
                .with_attribute("href", "/locations/mornington/"),
            Element::new("nav-contact")
                .with_attribute("data-nav", "")
                .with_attribute("href", "/contact/"),
            Element::new("contactForm"),
        ]);
        for field in FieldSpec::contact_defaults() {
            dom.insert(Element::new(&field.group_id()));
            dom.insert(Element::input(field.input_id()));
            dom.insert(Element::new(&field.error_slot_id()));
        }
        dom.with(Element::new("submit-button").with_text("Send"))
            .with(Element::new("formSuccess").hidden())
            .with(Element::new("phone-number"))
    }

    fn load(dom: &mut MemoryDom, path: &str) -> Page {
        Page::load(dom, &SiteConfig::default(), path).unwrap()
    }

    fn input(field: &str, value: &str) -> PageEvent {
        PageEvent::Input {
            field: field.to_string(),
            value: value.to_string(),
        }
    }

    fn click(target: &str) -> PageEvent {
        PageEvent::Click {
            target: target.to_string(),
        }
    }

    /// Fire everything due within `by`, the way the page's event loop would
    fn advance(
        page: &mut Page,
        dom: &mut MemoryDom,
        clock: &mut VirtualClock,
        by: Duration,
    ) -> Vec<Enquiry> {
        let until = clock.now() + by;
        let mut enquiries = Vec::new();
        while let Some(event) = clock.pop_due(until) {
            enquiries.extend(page.on_timer(&event, dom, clock));
        }
        clock.settle(until);
        enquiries
    }

    #[test]
    fn test_load_attaches_everything() {
        let mut dom = full_page();
        let page = load(&mut dom, "/locations/mornington/index.html");

        assert!(page.contact_form().is_some());
        assert!(page.drawer().is_some());
        assert_eq!(page.accordions().len(), 1);
        assert_eq!(page.active_links(), ["nav-mornington"]);
        assert!(dom.has_class("nav-mornington", ACTIVE_CLASS));
    }

    #[test]
    fn test_load_on_bare_page_attaches_nothing() {
        let mut dom = MemoryDom::new();
        let page = load(&mut dom, "/");

        assert!(page.contact_form().is_none());
        assert!(page.drawer().is_none());
        assert!(page.accordions().is_empty());
        assert!(page.active_links().is_empty());
    }

    #[test]
    fn test_load_fails_on_incomplete_form() {
        let mut dom = full_page();
        dom.remove("submit-button");
        let err = Page::load(&mut dom, &SiteConfig::default(), "/contact/").unwrap_err();
        assert!(matches!(err, SetupError::MissingElement { .. }));
    }

    #[test]
    fn test_events_without_components_are_ignored() {
        let mut dom = MemoryDom::new();
        let mut clock = VirtualClock::new();
        let mut page = load(&mut dom, "/");

        assert_eq!(page.dispatch(&PageEvent::Submit, &mut dom, &mut clock), Dispatch::default());
        assert_eq!(page.dispatch(&click("mpr-open"), &mut dom, &mut clock), Dispatch::default());
        page.dispatch(
            &PageEvent::KeyDown {
                key: "Escape".to_string(),
            },
            &mut dom,
            &mut clock,
        );
        assert_eq!(dom, MemoryDom::new());
    }

    #[test]
    fn test_drawer_and_accordion_through_clicks() {
        let mut dom = full_page();
        let mut clock = VirtualClock::new();
        let mut page = load(&mut dom, "/");

        page.dispatch(&click("mpr-open"), &mut dom, &mut clock);
        assert!(dom.has_class("body", SCROLL_LOCK_CLASS));

        page.dispatch(&click("services-btn"), &mut dom, &mut clock);
        assert!(dom.is_visible("services-panel"));

        page.dispatch(
            &PageEvent::KeyDown {
                key: "Escape".to_string(),
            },
            &mut dom,
            &mut clock,
        );
        assert!(!page.drawer().unwrap().is_open());
        assert!(!dom.has_class("body", SCROLL_LOCK_CLASS));
        assert!(!dom.has_class("mpr-overlay", OPEN_CLASS));
    }

    #[test]
    fn test_other_keys_leave_drawer_open() {
        let mut dom = full_page();
        let mut clock = VirtualClock::new();
        let mut page = load(&mut dom, "/");
        page.dispatch(&click("mpr-open"), &mut dom, &mut clock);

        page.dispatch(
            &PageEvent::KeyDown {
                key: "Enter".to_string(),
            },
            &mut dom,
            &mut clock,
        );

        assert!(page.drawer().unwrap().is_open());
    }

    #[test]
    fn test_enquiry_flow_end_to_end() {
        let mut dom = full_page();
        let mut clock = VirtualClock::new();
        let mut page = load(&mut dom, "/contact/");

        for event in [
            input("name", "Jane Doe"),
            input("email", "jane@example.com"),
            input("phone", "0412 345 678"),
        ] {
            page.dispatch(&event, &mut dom, &mut clock);
        }
        let dispatch = page.dispatch(&click("submit-button"), &mut dom, &mut clock);
        assert_eq!(dispatch.submission, Some(SubmitOutcome::Accepted));
        assert!(dispatch.default_prevented);
        assert!(dom.is_disabled("submit-button"));
        assert_eq!(dom.text("submit-button").as_deref(), Some("Sending..."));

        // Nothing happens before the processing delay
        assert!(advance(&mut page, &mut dom, &mut clock, Duration::from_millis(999)).is_empty());
        assert!(dom.is_disabled("submit-button"));

        let enquiries = advance(&mut page, &mut dom, &mut clock, Duration::from_millis(1));
        assert_eq!(enquiries.len(), 1);
        assert_eq!(enquiries[0].values["name"], "Jane Doe");
        assert!(!dom.is_disabled("submit-button"));
        assert_eq!(dom.text("submit-button").as_deref(), Some("Send"));
        assert!(dom.is_visible("formSuccess"));
        assert_eq!(dom.value("name").as_deref(), Some(""));

        advance(&mut page, &mut dom, &mut clock, Duration::from_millis(4999));
        assert!(dom.is_visible("formSuccess"));
        advance(&mut page, &mut dom, &mut clock, Duration::from_millis(1));
        assert!(!dom.is_visible("formSuccess"));
    }

    #[test]
    fn test_double_submit_is_ignored() {
        let mut dom = full_page();
        let mut clock = VirtualClock::new();
        let mut page = load(&mut dom, "/contact/");
        page.dispatch(&input("name", "Jane Doe"), &mut dom, &mut clock);
        page.dispatch(&input("email", "jane@example.com"), &mut dom, &mut clock);

        page.dispatch(&PageEvent::Submit, &mut dom, &mut clock);
        let second = page.dispatch(&PageEvent::Submit, &mut dom, &mut clock);

        assert_eq!(second.submission, Some(SubmitOutcome::Ignored));
        assert_eq!(clock.pending(), 1);
    }

    #[test]
    fn test_phone_button_press_released_by_timer() {
        let mut dom = full_page();
        let mut clock = VirtualClock::new();
        let mut page = load(&mut dom, "/");

        page.dispatch(&click("phone-number"), &mut dom, &mut clock);
        assert_eq!(dom.style("phone-number", "transform").as_deref(), Some("scale(0.95)"));

        advance(&mut page, &mut dom, &mut clock, Duration::from_millis(150));
        assert_eq!(dom.style("phone-number", "transform").as_deref(), Some("scale(1)"));
    }

    #[test]
    fn test_anchor_click_prevents_navigation() {
        let mut dom = full_page()
            .with(Element::new("link-contact").with_attribute("href", "#contactForm"))
            .with(Element::new("link-blog").with_attribute("href", "/blog/"));
        let mut clock = VirtualClock::new();
        let mut page = load(&mut dom, "/");

        let anchor = page.dispatch(&click("link-contact"), &mut dom, &mut clock);
        assert!(anchor.default_prevented);
        assert!(anchor.submission.is_none());
        assert_eq!(dom.last_scroll.as_ref().map(|s| s.target.as_str()), Some("contactForm"));

        let regular = page.dispatch(&click("link-blog"), &mut dom, &mut clock);
        assert_eq!(regular, Dispatch::default());
    }

    #[test]
    fn test_scroll_event_updates_navigation_shadow() {
        let mut dom = full_page();
        let mut clock = VirtualClock::new();
        let mut page = load(&mut dom, "/");

        page.dispatch(&PageEvent::Scroll { y: 240.0 }, &mut dom, &mut clock);

        assert_eq!(dom.style("navigation", "box-shadow").as_deref(), Some(RAISED_SHADOW));
    }

    #[test]
    fn test_event_deserialization() {
        let event: PageEvent =
            serde_json::from_str(r#"{"type": "click", "target": "mpr-open"}"#).unwrap();
        assert_eq!(event, click("mpr-open"));

        let event: PageEvent =
            serde_json::from_str(r#"{"type": "key_down", "key": "Escape"}"#).unwrap();
        assert_eq!(
            event,
            PageEvent::KeyDown {
                key: "Escape".to_string()
            }
        );

        let event: PageEvent = serde_json::from_str(r#"{"type": "submit"}"#).unwrap();
        assert_eq!(event, PageEvent::Submit);
    }
}
