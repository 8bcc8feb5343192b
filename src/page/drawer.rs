//! Mobile navigation drawer

use crate::config::PageLayout;
use crate::dom::Dom;
use crate::state::DrawerState;

/// Marker class on drawer and overlay while open
pub const OPEN_CLASS: &str = "is-open";
/// Marker class on the body while page scrolling is locked
pub const SCROLL_LOCK_CLASS: &str = "mpr-lock";

/// Something that asks the drawer to open or close
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawerTrigger {
    OpenButton,
    CloseButton,
    OverlayClick,
    Escape,
}

/// Slide-out menu with its overlay and the body scroll lock
#[derive(Debug, Clone)]
pub struct NavDrawer {
    drawer: String,
    overlay: String,
    body: String,
    open_button: String,
    close_button: String,
    state: DrawerState,
}

impl NavDrawer {
    /// Bind to the document. Returns `None` if the page has no drawer or no
    /// overlay.
    pub fn attach<D: Dom>(dom: &D, layout: &PageLayout) -> Option<Self> {
        if !dom.contains(&layout.drawer) || !dom.contains(&layout.overlay) {
            tracing::debug!("no navigation drawer on this page");
            return None;
        }
        Some(Self {
            drawer: layout.drawer.clone(),
            overlay: layout.overlay.clone(),
            body: layout.body.clone(),
            open_button: layout.open_button.clone(),
            close_button: layout.close_button.clone(),
            state: DrawerState::default(),
        })
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open
    }

    /// Map a clicked element to a trigger
    pub fn trigger_for_click(&self, target: &str) -> Option<DrawerTrigger> {
        if target == self.open_button {
            Some(DrawerTrigger::OpenButton)
        } else if target == self.close_button {
            Some(DrawerTrigger::CloseButton)
        } else if target == self.overlay {
            Some(DrawerTrigger::OverlayClick)
        } else {
            None
        }
    }

    pub fn handle<D: Dom>(&mut self, dom: &mut D, trigger: DrawerTrigger) {
        match trigger {
            DrawerTrigger::OpenButton => self.open(dom),
            DrawerTrigger::CloseButton | DrawerTrigger::OverlayClick | DrawerTrigger::Escape => {
                self.close(dom)
            }
        }
    }

    pub fn open<D: Dom>(&mut self, dom: &mut D) {
        self.set_open(dom, true);
    }

    pub fn close<D: Dom>(&mut self, dom: &mut D) {
        self.set_open(dom, false);
    }

    /// Drawer marker, overlay marker and scroll lock always move together
    fn set_open<D: Dom>(&mut self, dom: &mut D, open: bool) {
        if self.state.is_open == open {
            return;
        }
        dom.set_class(&self.drawer, OPEN_CLASS, open);
        dom.set_class(&self.overlay, OPEN_CLASS, open);
        dom.set_class(&self.body, SCROLL_LOCK_CLASS, open);
        self.state.is_open = open;
        tracing::debug!("navigation drawer {}", if open { "opened" } else { "closed" });
    }
}
