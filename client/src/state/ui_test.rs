use super::*;
use features::catalog::{SPACE_PAGES, SPACES, option_label};

#[test]
fn ui_state_default_theme_is_light() {
    assert_eq!(UiState::default().theme, Theme::Light);
}

#[test]
fn ui_state_default_selectors_resolve_to_labels() {
    let state = UiState::default();
    assert_eq!(option_label(SPACES, &state.space), "Product Space");
    assert_eq!(option_label(SPACE_PAGES, &state.space_page), "Main Documentation");
}
