//! Navigation drawer and accordion state

/// Open/closed state of the mobile navigation drawer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DrawerState {
    pub is_open: bool,
}

/// Expanded state of a single accordion panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AccordionState {
    pub is_expanded: bool,
}

impl AccordionState {
    /// Read the state from an `aria-expanded` attribute value
    pub fn from_aria(value: Option<&str>) -> Self {
        Self {
            is_expanded: value == Some("true"),
        }
    }

    pub fn toggle(&mut self) {
        self.is_expanded = !self.is_expanded;
    }

    /// Value for the `aria-expanded` attribute
    pub fn aria_value(&self) -> &'static str {
        if self.is_expanded {
            "true"
        } else {
            "false"
        }
    }
}
