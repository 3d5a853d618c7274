//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and the simulated
//! run scheduling from page and component logic to improve testability.

pub mod clipboard;
pub mod theme;
pub mod mock_task;
