//! Inline error presentation for form fields

use crate::dom::Dom;
use crate::state::FieldSpec;

/// Group and error-slot ids of one field
#[derive(Debug, Clone, PartialEq, Eq)]
struct FieldSlots {
    field: String,
    group: String,
    error_slot: String,
}

/// Applies and clears visual error state on a form's fields
#[derive(Debug, Clone)]
pub struct ErrorPresenter {
    slots: Vec<FieldSlots>,
}

impl ErrorPresenter {
    pub fn new(fields: &[FieldSpec]) -> Self {
        Self {
            slots: fields
                .iter()
                .map(|f| FieldSlots {
                    field: f.name.clone(),
                    group: f.group_id(),
                    error_slot: f.error_slot_id(),
                })
                .collect(),
        }
    }

    /// Mark a field's group as errored and write its message
    pub fn show_error<D: Dom>(&self, dom: &mut D, field: &str, message: &str) {
        let Some(slots) = self.slots.iter().find(|s| s.field == field) else {
            tracing::debug!("no error slots registered for field {field}");
            return;
        };
        dom.set_error_state(&slots.group, true);
        dom.set_text(&slots.error_slot, message);
    }

    /// Unmark every group and empty every error slot
    pub fn clear_all<D: Dom>(&self, dom: &mut D) {
        for slots in &self.slots {
            dom.set_error_state(&slots.group, false);
            dom.set_text(&slots.error_slot, "");
        }
    }
}
