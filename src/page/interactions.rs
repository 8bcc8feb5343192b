//! Small cosmetic interactions: anchor scrolling, navigation shadow, hover
//! lift, phone button press and phone-link tracking

use crate::config::SiteConfig;
use crate::dom::{Dom, ScrollBlock};
use crate::timers::{Scheduler, TimerEvent};
use std::time::Duration;

pub const RAISED_SHADOW: &str = "0 4px 8px rgba(0,0,0,0.15)";
pub const RESTING_SHADOW: &str = "0 2px 5px rgba(0,0,0,0.1)";

const LIFTED: &str = "translateY(-1px)";
const SETTLED: &str = "translateY(0)";
const PRESSED: &str = "scale(0.95)";
const RELEASED: &str = "scale(1)";

#[derive(Debug, Clone)]
pub struct Interactions {
    navigation: String,
    phone_button: String,
    nav_item_class: String,
    shadow_threshold: f64,
    press_release: Duration,
}

impl Interactions {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            navigation: config.layout.navigation.clone(),
            phone_button: config.layout.phone_button.clone(),
            nav_item_class: config.layout.nav_item_class.clone(),
            shadow_threshold: config.scroll_shadow_threshold,
            press_release: config.timing.press_release(),
        }
    }

    /// Handle a click on `target`. Returns true when the click was consumed
    /// (an in-page anchor link), i.e. default navigation must not happen.
    pub fn on_click<D: Dom, S: Scheduler>(
        &self,
        dom: &mut D,
        scheduler: &mut S,
        target: &str,
    ) -> bool {
        if target == self.phone_button {
            dom.set_style(target, "transform", PRESSED);
            scheduler.schedule(
                self.press_release,
                TimerEvent::ReleasePress {
                    target: target.to_string(),
                },
            );
        }

        let Some(href) = dom.attribute(target, "href") else {
            return false;
        };

        if let Some(anchor) = href.strip_prefix('#') {
            if dom.contains(anchor) {
                dom.scroll_into_view(anchor, ScrollBlock::Start);
            }
            return true;
        }

        if let Some(number) = href.strip_prefix("tel:") {
            // Analytics hook
            tracing::info!("Phone number clicked: {number}");
        }
        false
    }

    /// Raise the navigation bar's shadow once the page scrolled past the
    /// threshold
    pub fn on_scroll<D: Dom>(&self, dom: &mut D, scroll_y: f64) {
        let shadow = if scroll_y > self.shadow_threshold {
            RAISED_SHADOW
        } else {
            RESTING_SHADOW
        };
        dom.set_style(&self.navigation, "box-shadow", shadow);
    }

    pub fn on_pointer_enter<D: Dom>(&self, dom: &mut D, target: &str) {
        if dom.has_class(target, &self.nav_item_class) {
            dom.set_style(target, "transform", LIFTED);
        }
    }

    pub fn on_pointer_leave<D: Dom>(&self, dom: &mut D, target: &str) {
        if dom.has_class(target, &self.nav_item_class) {
            dom.set_style(target, "transform", SETTLED);
        }
    }

    /// A pressed element springs back
    pub fn on_release<D: Dom>(&self, dom: &mut D, target: &str) {
        dom.set_style(target, "transform", RELEASED);
    }
}
