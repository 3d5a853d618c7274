//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page picks a layout and delegates rendering details to `components`.

pub mod layouts;
