//! In-memory document

use super::traits::{Dom, ScrollBlock};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

fn visible_by_default() -> bool {
    true
}

/// A single element of the in-memory document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    pub id: String,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub classes: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub styles: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub text: String,
    /// Present only on form controls
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default = "visible_by_default")]
    pub visible: bool,
    #[serde(default)]
    pub disabled: bool,
}

impl Element {
    /// Create a visible element with no classes or content
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            classes: BTreeSet::new(),
            attributes: BTreeMap::new(),
            styles: BTreeMap::new(),
            text: String::new(),
            value: None,
            visible: true,
            disabled: false,
        }
    }

    /// Create an empty form control
    pub fn input(id: &str) -> Self {
        Self::new(id).with_value("")
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.insert(class.to_string());
        self
    }

    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }

    pub fn with_value(mut self, value: &str) -> Self {
        self.value = Some(value.to_string());
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }
}

/// Last scroll-into-view request issued against the document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrollRequest {
    pub target: String,
    pub block: ScrollBlock,
}

/// Ordered in-memory document implementing [`Dom`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryDom {
    pub elements: Vec<Element>,
    #[serde(default)]
    pub focused: Option<String>,
    #[serde(default)]
    pub last_scroll: Option<ScrollRequest>,
}

impl MemoryDom {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a document from elements in document order
    pub fn from_elements(elements: Vec<Element>) -> Self {
        let mut dom = Self::new();
        for element in elements {
            dom.insert(element);
        }
        dom
    }

    /// Append an element, replacing any existing element with the same id
    pub fn insert(&mut self, element: Element) {
        if let Some(existing) = self.get_mut(&element.id) {
            *existing = element;
        } else {
            self.elements.push(element);
        }
    }

    /// Builder form of [`MemoryDom::insert`]
    pub fn with(mut self, element: Element) -> Self {
        self.insert(element);
        self
    }

    pub fn remove(&mut self, id: &str) -> Option<Element> {
        let index = self.elements.iter().position(|e| e.id == id)?;
        Some(self.elements.remove(index))
    }

    pub fn get(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id)
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.elements.iter_mut().find(|e| e.id == id)
    }
}

impl Dom for MemoryDom {
    fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    fn elements_with_class(&self, class: &str) -> Vec<String> {
        self.elements
            .iter()
            .filter(|e| e.classes.contains(class))
            .map(|e| e.id.clone())
            .collect()
    }

    fn elements_with_attribute(&self, name: &str) -> Vec<String> {
        self.elements
            .iter()
            .filter(|e| e.attributes.contains_key(name))
            .map(|e| e.id.clone())
            .collect()
    }

    fn next_element(&self, id: &str) -> Option<String> {
        let index = self.elements.iter().position(|e| e.id == id)?;
        self.elements.get(index + 1).map(|e| e.id.clone())
    }

    fn has_class(&self, id: &str, class: &str) -> bool {
        self.get(id).is_some_and(|e| e.classes.contains(class))
    }

    fn set_class(&mut self, id: &str, class: &str, present: bool) {
        if let Some(element) = self.get_mut(id) {
            if present {
                element.classes.insert(class.to_string());
            } else {
                element.classes.remove(class);
            }
        }
    }

    fn is_visible(&self, id: &str) -> bool {
        self.get(id).is_some_and(|e| e.visible)
    }

    fn set_visible(&mut self, id: &str, visible: bool) {
        if let Some(element) = self.get_mut(id) {
            element.visible = visible;
        }
    }

    fn attribute(&self, id: &str, name: &str) -> Option<String> {
        self.get(id).and_then(|e| e.attributes.get(name).cloned())
    }

    fn set_attribute(&mut self, id: &str, name: &str, value: &str) {
        if let Some(element) = self.get_mut(id) {
            element
                .attributes
                .insert(name.to_string(), value.to_string());
        }
    }

    fn text(&self, id: &str) -> Option<String> {
        self.get(id).map(|e| e.text.clone())
    }

    fn set_text(&mut self, id: &str, text: &str) {
        if let Some(element) = self.get_mut(id) {
            element.text = text.to_string();
        }
    }

    fn value(&self, id: &str) -> Option<String> {
        self.get(id).and_then(|e| e.value.clone())
    }

    fn set_value(&mut self, id: &str, value: &str) {
        if let Some(element) = self.get_mut(id) {
            element.value = Some(value.to_string());
        }
    }

    fn is_disabled(&self, id: &str) -> bool {
        self.get(id).is_some_and(|e| e.disabled)
    }

    fn set_disabled(&mut self, id: &str, disabled: bool) {
        if let Some(element) = self.get_mut(id) {
            element.disabled = disabled;
        }
    }

    fn style(&self, id: &str, property: &str) -> Option<String> {
        self.get(id).and_then(|e| e.styles.get(property).cloned())
    }

    fn set_style(&mut self, id: &str, property: &str, value: &str) {
        if let Some(element) = self.get_mut(id) {
            element
                .styles
                .insert(property.to_string(), value.to_string());
        }
    }

    fn focus(&mut self, id: &str) {
        if self.contains(id) {
            self.focused = Some(id.to_string());
        }
    }

    fn scroll_into_view(&mut self, id: &str, block: ScrollBlock) {
        if self.contains(id) {
            self.last_scroll = Some(ScrollRequest {
                target: id.to_string(),
                block,
            });
        }
    }
}
