//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render assistant chrome and feature panels while reading and
//! writing shell and UI state from Leptos context providers.

pub mod code_panel;
pub mod feature_nav;
pub mod feature_panel;
pub mod feature_view;
pub mod header;
pub mod impact_panel;
pub mod launcher;
pub mod search_panel;
pub mod select;
pub mod shell;
pub mod test_panel;
pub mod video_panel;
