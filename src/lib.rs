//! MPR Site - interaction logic for the Mornington Peninsula Roofing pages
//!
//! Contact form validation and simulated submission, the mobile navigation
//! drawer, its accordions, active-link highlighting and the small cosmetic
//! interactions, all driven through a [`dom::Dom`] and a
//! [`timers::Scheduler`] so they run against any document and clock.

pub mod config;
pub mod dom;
pub mod error;
pub mod page;
pub mod scenario;
pub mod state;
pub mod timers;
