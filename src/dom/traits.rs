//! Capability trait for document mutation, enabling mocking in tests

use serde::{Deserialize, Serialize};

/// Class applied to a field group that failed validation
pub const ERROR_CLASS: &str = "error";

/// Vertical alignment for a scroll-into-view request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollBlock {
    #[default]
    Start,
    Center,
}

/// Everything a page component may observe or change in the document.
///
/// Elements are addressed by id. Every mutator is a silent no-op when the id
/// is unknown, and every query answers "absent" (`false`, `None`, empty).
#[cfg_attr(test, mockall::automock)]
pub trait Dom {
    /// Check whether an element with this id exists
    fn contains(&self, id: &str) -> bool;

    /// Ids of all elements carrying a class, in document order
    fn elements_with_class(&self, class: &str) -> Vec<String>;

    /// Ids of all elements carrying an attribute, in document order
    fn elements_with_attribute(&self, name: &str) -> Vec<String>;

    /// Id of the element following this one in document order
    fn next_element(&self, id: &str) -> Option<String>;

    fn has_class(&self, id: &str, class: &str) -> bool;

    /// Add (`present == true`) or remove a class
    fn set_class(&mut self, id: &str, class: &str, present: bool);

    /// Mark or unmark an element as being in an error state
    fn set_error_state(&mut self, id: &str, errored: bool) {
        self.set_class(id, ERROR_CLASS, errored);
    }

    fn is_visible(&self, id: &str) -> bool;

    fn set_visible(&mut self, id: &str, visible: bool);

    fn attribute(&self, id: &str, name: &str) -> Option<String>;

    fn set_attribute(&mut self, id: &str, name: &str, value: &str);

    /// Text content of an element
    fn text(&self, id: &str) -> Option<String>;

    fn set_text(&mut self, id: &str, text: &str);

    /// Current value of a form control
    fn value(&self, id: &str) -> Option<String>;

    fn set_value(&mut self, id: &str, value: &str);

    fn is_disabled(&self, id: &str) -> bool;

    fn set_disabled(&mut self, id: &str, disabled: bool);

    /// Inline style property
    fn style(&self, id: &str, property: &str) -> Option<String>;

    fn set_style(&mut self, id: &str, property: &str, value: &str);

    /// Move keyboard focus to an element
    fn focus(&mut self, id: &str);

    /// Smoothly scroll the viewport so the element is visible
    fn scroll_into_view(&mut self, id: &str, block: ScrollBlock);
}
