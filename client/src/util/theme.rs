//! Light/dark theme preference.
//!
//! The choice lives in `localStorage` under [`STORAGE_KEY`]; without one the
//! system `prefers-color-scheme` decides. The page reflects it through a
//! `data-theme` attribute on `<html>`, which the stylesheet keys off.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

pub const STORAGE_KEY: &str = "confluence-ai-theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Glyph on the header button: the theme a click switches to.
    #[must_use]
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Self::Light => "☾",
            Self::Dark => "☀",
        }
    }

    /// A stored choice wins; anything unrecognized falls back to the system.
    #[must_use]
    pub fn resolve(stored: Option<&str>, prefers_dark: bool) -> Self {
        match stored.map(str::trim) {
            Some("dark") => Self::Dark,
            Some("light") => Self::Light,
            _ if prefers_dark => Self::Dark,
            _ => Self::Light,
        }
    }
}

/// Theme for this browser. Light during SSR.
#[must_use]
pub fn load() -> Theme {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return Theme::Light;
        };
        let stored = window.local_storage().ok().flatten().and_then(|s| s.get_item(STORAGE_KEY).ok().flatten());
        let prefers_dark = window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .is_some_and(|mq| mq.matches());
        Theme::resolve(stored.as_deref(), prefers_dark)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Theme::Light
    }
}

/// Set `data-theme` on `<html>`.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        let root = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element());
        if let Some(Err(e)) = root.map(|el| el.set_attribute("data-theme", theme.as_str())) {
            log::warn!("failed to apply theme: {e:?}");
        }
    }
}

/// Remember an explicit choice.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub fn store(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_some_and(|s| s.set_item(STORAGE_KEY, theme.as_str()).is_err()) {
            log::warn!("theme preference not saved");
        }
    }
}
