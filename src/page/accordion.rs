//! Collapsible menu sections of the mobile drawer

use crate::config::PageLayout;
use crate::dom::Dom;
use crate::state::AccordionState;

const ARIA_EXPANDED: &str = "aria-expanded";
const ARIA_CONTROLS: &str = "aria-controls";

/// One toggle button and the panel it owns
#[derive(Debug, Clone)]
pub struct Accordion {
    button: String,
    panel: String,
    state: AccordionState,
}

impl Accordion {
    /// Pair a button with its panel, reading the initial state from
    /// `aria-expanded`. The panel's visibility is brought in line with it.
    pub fn attach<D: Dom>(dom: &mut D, button: &str, panel: &str) -> Self {
        let state = AccordionState::from_aria(dom.attribute(button, ARIA_EXPANDED).as_deref());
        let accordion = Self {
            button: button.to_string(),
            panel: panel.to_string(),
            state,
        };
        accordion.apply(dom);
        accordion
    }

    pub fn button(&self) -> &str {
        &self.button
    }

    pub fn is_expanded(&self) -> bool {
        self.state.is_expanded
    }

    /// Flip the expanded flag and the panel visibility together
    pub fn toggle<D: Dom>(&mut self, dom: &mut D) {
        self.state.toggle();
        self.apply(dom);
    }

    fn apply<D: Dom>(&self, dom: &mut D) {
        dom.set_attribute(&self.button, ARIA_EXPANDED, self.state.aria_value());
        dom.set_visible(&self.panel, self.state.is_expanded);
    }
}

/// All accordions of a page, each independent of the others
#[derive(Debug, Clone, Default)]
pub struct AccordionSet {
    accordions: Vec<Accordion>,
}

impl AccordionSet {
    /// Find every accordion button and resolve its panel: the element named
    /// by `aria-controls`, or the element right after the button when the
    /// attribute is absent. Buttons without a panel are skipped.
    pub fn attach<D: Dom>(dom: &mut D, layout: &PageLayout) -> Self {
        let mut accordions = Vec::new();
        for button in dom.elements_with_class(&layout.accordion_button_class) {
            let panel = match dom.attribute(&button, ARIA_CONTROLS) {
                Some(panel) => Some(panel).filter(|panel| dom.contains(panel)),
                None => dom.next_element(&button),
            };
            match panel {
                Some(panel) => accordions.push(Accordion::attach(dom, &button, &panel)),
                None => tracing::warn!("accordion button {button} has no panel, skipping"),
            }
        }
        Self { accordions }
    }

    pub fn len(&self) -> usize {
        self.accordions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accordions.is_empty()
    }

    pub fn get(&self, button: &str) -> Option<&Accordion> {
        self.accordions.iter().find(|a| a.button == button)
    }

    /// Toggle the accordion owning `button`. Returns false if none does.
    pub fn toggle<D: Dom>(&mut self, dom: &mut D, button: &str) -> bool {
        match self.accordions.iter_mut().find(|a| a.button == button) {
            Some(accordion) => {
                accordion.toggle(dom);
                true
            }
            None => false,
        }
    }
}
