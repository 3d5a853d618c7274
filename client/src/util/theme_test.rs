use super::*;

#[test]
fn stored_choice_beats_system_preference() {
    assert_eq!(Theme::resolve(Some("light"), true), Theme::Light);
    assert_eq!(Theme::resolve(Some("dark"), false), Theme::Dark);
}

#[test]
fn missing_or_garbled_choice_follows_system() {
    assert_eq!(Theme::resolve(None, true), Theme::Dark);
    assert_eq!(Theme::resolve(None, false), Theme::Light);
    assert_eq!(Theme::resolve(Some("sepia"), true), Theme::Dark);
    assert_eq!(Theme::resolve(Some(""), false), Theme::Light);
}

#[test]
fn toggling_round_trips_through_stored_names() {
    for theme in [Theme::Light, Theme::Dark] {
        let next = theme.toggled();
        assert_ne!(next, theme);
        assert_eq!(Theme::resolve(Some(next.as_str()), false), next);
        assert_eq!(next.toggled(), theme);
    }
}

#[test]
fn toggle_icon_shows_the_other_theme() {
    assert_eq!(Theme::Light.toggle_icon(), "☾");
    assert_eq!(Theme::Dark.toggle_icon(), "☀");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn server_render_loads_light() {
    assert_eq!(load(), Theme::Light);
}
