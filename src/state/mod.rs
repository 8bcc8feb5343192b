//! Transient page state

mod forms;
mod nav_state;

pub use forms::*;
pub use nav_state::*;
