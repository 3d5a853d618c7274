//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`panel`, `shell`, `ui`) so components depend on
//! small focused models that can be unit tested without a browser.

pub mod panel;
pub mod shell;
pub mod ui;
