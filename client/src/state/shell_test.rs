use super::*;

// =============================================================
// Initial state
// =============================================================

#[test]
fn panel_layouts_open_on_search() {
    for variant in [ShellVariant::Dashboard, ShellVariant::TabbedCard, ShellVariant::CompactDashboard] {
        let shell = ShellState::new(variant);
        assert_eq!(shell.active, Some(FeatureId::Search), "{variant:?}");
        assert!(shell.panel_visible());
    }
}

#[test]
fn picker_layouts_open_without_panel() {
    for variant in [ShellVariant::FloatingWidget, ShellVariant::Sidebar, ShellVariant::AccordionPage] {
        let shell = ShellState::new(variant);
        assert_eq!(shell.active, None, "{variant:?}");
        assert!(shell.visible);
        assert!(!shell.panel_visible());
    }
}

#[test]
fn variants_map_to_presentations() {
    assert_eq!(ShellVariant::TabbedCard.presentation(), Presentation::Tabs);
    assert_eq!(ShellVariant::CompactDashboard.presentation(), Presentation::Tabs);
    assert_eq!(ShellVariant::AccordionPage.presentation(), Presentation::Accordion);
    assert_eq!(ShellVariant::FloatingWidget.presentation(), Presentation::Floating);
    assert_eq!(ShellVariant::Dashboard.presentation(), Presentation::FixedSidebar);
    assert_eq!(ShellVariant::Sidebar.presentation(), Presentation::FixedSidebar);
}

#[test]
fn variant_paths_are_unique() {
    for (i, a) in ShellVariant::ALL.iter().enumerate() {
        for b in &ShellVariant::ALL[i + 1..] {
            assert_ne!(a.path(), b.path());
        }
    }
}

// =============================================================
// select_feature
// =============================================================

#[test]
fn select_feature_is_idempotent_for_every_variant() {
    for variant in ShellVariant::ALL {
        let mut once = ShellState::new(variant);
        once.select_feature(FeatureId::Code);
        let mut twice = once.clone();
        twice.select_feature(FeatureId::Code);
        assert_eq!(once, twice, "{variant:?}");
        assert_eq!(twice.active, Some(FeatureId::Code));
    }
}

#[test]
fn sidebar_select_expands_panel() {
    let mut shell = ShellState::new(ShellVariant::Sidebar);
    shell.select_feature(FeatureId::Video);
    assert!(shell.expanded);
    assert!(shell.panel_visible());
}

#[test]
fn sidebar_back_collapses_to_rail() {
    let mut shell = ShellState::new(ShellVariant::Sidebar);
    shell.select_feature(FeatureId::Impact);
    shell.back();
    assert_eq!(shell.active, None);
    assert!(!shell.expanded);
}

#[test]
fn back_is_ignored_by_fixed_layouts() {
    let mut shell = ShellState::new(ShellVariant::Dashboard);
    shell.select_feature(FeatureId::Testing);
    shell.back();
    assert_eq!(shell.active, Some(FeatureId::Testing));
}

// =============================================================
// Accordion
// =============================================================

#[test]
fn accordion_toggle_opens_and_collapses_single_section() {
    let mut shell = ShellState::new(ShellVariant::AccordionPage);
    shell.toggle_section(FeatureId::Code);
    assert_eq!(shell.active, Some(FeatureId::Code));
    shell.toggle_section(FeatureId::Video);
    assert_eq!(shell.active, Some(FeatureId::Video));
    shell.toggle_section(FeatureId::Video);
    assert_eq!(shell.active, None);
}

#[test]
fn tabs_toggle_never_collapses() {
    let mut shell = ShellState::new(ShellVariant::TabbedCard);
    shell.toggle_section(FeatureId::Search);
    assert_eq!(shell.active, Some(FeatureId::Search));
}

// =============================================================
// Floating widget chrome
// =============================================================

#[test]
fn minimize_hides_panel_and_select_restores_it() {
    let mut shell = ShellState::new(ShellVariant::FloatingWidget);
    shell.select_feature(FeatureId::Search);
    shell.toggle_minimized();
    assert!(shell.minimized);
    assert!(!shell.panel_visible());
    shell.select_feature(FeatureId::Search);
    assert!(!shell.minimized);
}

#[test]
fn minimize_only_applies_to_floating_widget() {
    let mut shell = ShellState::new(ShellVariant::TabbedCard);
    shell.toggle_minimized();
    assert!(!shell.minimized);
}

#[test]
fn drag_accumulates_and_clamps_to_anchor() {
    let mut shell = ShellState::new(ShellVariant::FloatingWidget);
    shell.drag(-40.0, 25.0);
    shell.drag(-10.0, 5.0);
    assert_eq!(shell.position, (-50.0, 30.0));
    shell.drag(500.0, -500.0);
    assert_eq!(shell.position, (0.0, 0.0));
}

#[test]
fn drag_is_ignored_outside_floating_widget() {
    let mut shell = ShellState::new(ShellVariant::Sidebar);
    shell.drag(-40.0, 25.0);
    assert_eq!(shell.position, (0.0, 0.0));
}

#[test]
fn escape_closes_visible_widget_once() {
    let mut shell = ShellState::new(ShellVariant::FloatingWidget);
    assert!(shell.escape());
    assert!(!shell.visible);
    assert!(!shell.escape());
}

#[test]
fn close_then_open_keeps_selection() {
    let mut shell = ShellState::new(ShellVariant::Sidebar);
    shell.select_feature(FeatureId::Code);
    shell.close();
    assert!(!shell.panel_visible());
    shell.open();
    assert_eq!(shell.active, Some(FeatureId::Code));
    assert!(shell.panel_visible());
}

// =============================================================
// Initial feature from the query string
// =============================================================

#[test]
fn feature_query_accepts_names_and_aliases() {
    assert_eq!(feature_from_query(Some("code")), Some(FeatureId::Code));
    assert_eq!(feature_from_query(Some(" Test ")), Some(FeatureId::Testing));
    assert_eq!(feature_from_query(Some("diff")), Some(FeatureId::Impact));
}

#[test]
fn feature_query_ignores_missing_blank_and_unknown() {
    assert_eq!(feature_from_query(None), None);
    assert_eq!(feature_from_query(Some("  ")), None);
    assert_eq!(feature_from_query(Some("weather")), None);
}

#[test]
fn with_feature_opens_the_panel_in_every_layout() {
    for variant in ShellVariant::ALL {
        let shell = ShellState::with_feature(variant, Some(FeatureId::Video));
        assert_eq!(shell.active, Some(FeatureId::Video), "{variant:?}");
        assert!(shell.panel_visible(), "{variant:?}");
    }
}

#[test]
fn with_feature_none_matches_new() {
    for variant in ShellVariant::ALL {
        assert_eq!(ShellState::with_feature(variant, None), ShellState::new(variant));
    }
}

#[test]
fn minimize_and_restore_keep_active_feature() {
    let mut shell = ShellState::new(ShellVariant::FloatingWidget);
    shell.select_feature(FeatureId::Impact);
    shell.toggle_minimized();
    assert_eq!(shell.active, Some(FeatureId::Impact));
    assert!(!shell.panel_visible());
    shell.toggle_minimized();
    assert_eq!(shell.active, Some(FeatureId::Impact));
    assert!(shell.panel_visible());
}
