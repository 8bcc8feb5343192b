//! Document access layer
//!
//! Components never touch a real rendering environment. They talk to the page
//! through the [`Dom`] capability trait, which the in-memory [`MemoryDom`]
//! implements for tests and for the scenario runner.

mod memory;
mod traits;

pub use memory::{Element, MemoryDom, ScrollRequest};
pub use traits::{Dom, ScrollBlock};

#[cfg(test)]
pub use traits::MockDom;
