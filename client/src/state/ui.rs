//! Local UI chrome state (theme, workspace selectors).
//!
//! DESIGN
//! ======
//! Keeps presentation preferences out of panel and shell state so every
//! layout can share one header without owning its data.

use crate::util::theme::Theme;

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Theme and the space/page pickers shown in the header.
///
/// Provided once at the app root as an `RwSignal<UiState>` context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiState {
    pub theme: Theme,
    /// Selected Confluence space value (see `features::catalog::SPACES`).
    pub space: String,
    /// Selected page value within the space (see `features::catalog::SPACE_PAGES`).
    pub space_page: String,
}

impl Default for UiState {
    fn default() -> Self {
        Self { theme: Theme::Light, space: "product-space".to_owned(), space_page: "main-page".to_owned() }
    }
}
