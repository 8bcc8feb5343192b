//! Form domain layer
//!
//! Field declarations and the contact form's submit state.

mod field;
mod form_state;

pub use field::{FieldKind, FieldSpec};
pub use form_state::{FormPhase, FormState};
