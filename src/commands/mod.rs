//! Backend Command Wrappers
//!
//! Frontend bindings to the inventory REST API, organized by resource.

mod inventory;

// Re-export all public items
pub use inventory::*;
