//! Error types for page setup

use thiserror::Error;

/// Errors raised while attaching components to a document.
///
/// A component whose anchor element is absent is simply not attached; these
/// errors cover a component that is present but incomplete.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    /// The component exists but an element it cannot work without is missing
    #[error("{component} is missing required element `{element}`")]
    MissingElement {
        component: &'static str,
        element: String,
    },

    /// The same field name was registered twice
    #[error("field `{0}` is registered more than once")]
    DuplicateField(String),
}
