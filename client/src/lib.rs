//! # client
//!
//! Leptos + WASM frontend for the Confluence AI Assistant demo.
//!
//! This crate contains pages, components, and application state for six
//! assistant layouts over five mocked features. Feature data, inputs, and
//! canned results come from the `features` crate; this crate adds the
//! reactive panels, the shared shell, and the timers that simulate latency.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
