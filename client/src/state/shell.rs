//! Layout shell state shared by every assistant presentation.
//!
//! DESIGN
//! ======
//! All six layouts hold the same thing: one active feature plus a few
//! transient chrome toggles. They are modelled as one [`ShellState`] whose
//! behavior is parameterized by [`ShellVariant`] and its [`Presentation`],
//! so the components only differ in markup.

use features::FeatureId;

#[cfg(test)]
#[path = "shell_test.rs"]
mod shell_test;

/// How the shell arranges feature navigation around the active panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Presentation {
    /// Horizontal tab strip above the panel.
    Tabs,
    /// Stacked sections, at most one open.
    Accordion,
    /// Draggable card floating over the page.
    Floating,
    /// Vertical navigation rail beside the panel.
    FixedSidebar,
}

/// One of the six layouts the demo ships.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShellVariant {
    Dashboard,
    FloatingWidget,
    Sidebar,
    TabbedCard,
    AccordionPage,
    CompactDashboard,
}

impl ShellVariant {
    pub const ALL: [Self; 6] = [
        Self::TabbedCard,
        Self::Dashboard,
        Self::FloatingWidget,
        Self::Sidebar,
        Self::AccordionPage,
        Self::CompactDashboard,
    ];

    #[must_use]
    pub fn presentation(self) -> Presentation {
        match self {
            Self::TabbedCard | Self::CompactDashboard => Presentation::Tabs,
            Self::AccordionPage => Presentation::Accordion,
            Self::FloatingWidget => Presentation::Floating,
            Self::Dashboard | Self::Sidebar => Presentation::FixedSidebar,
        }
    }

    /// Route path the layout is mounted at.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::TabbedCard => "/",
            Self::Dashboard => "/dashboard",
            Self::FloatingWidget => "/widget",
            Self::Sidebar => "/sidebar",
            Self::AccordionPage => "/accordion",
            Self::CompactDashboard => "/compact",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::TabbedCard => "Tabbed card",
            Self::Dashboard => "Dashboard",
            Self::FloatingWidget => "Floating widget",
            Self::Sidebar => "Sidebar",
            Self::AccordionPage => "Accordion",
            Self::CompactDashboard => "Compact dashboard",
        }
    }

    /// Layouts that start with a panel open rather than a feature picker.
    #[must_use]
    pub fn opens_with_panel(self) -> bool {
        matches!(self, Self::Dashboard | Self::TabbedCard | Self::CompactDashboard)
    }

    /// Layouts whose panel area can collapse back to the bare navigation.
    #[must_use]
    pub fn is_collapsible(self) -> bool {
        matches!(self, Self::Sidebar | Self::AccordionPage | Self::FloatingWidget)
    }
}

/// Parse a `?feature=` query value. Unknown names are logged and ignored.
#[must_use]
pub fn feature_from_query(raw: Option<&str>) -> Option<FeatureId> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    raw.parse::<FeatureId>()
        .inspect_err(|err| log::warn!("ignoring feature query: {err}"))
        .ok()
}

/// Active feature and chrome toggles for one mounted shell.
#[derive(Clone, Debug, PartialEq)]
pub struct ShellState {
    pub variant: ShellVariant,
    pub active: Option<FeatureId>,
    /// Whether the shell is shown at all; launchers reopen a closed shell.
    pub visible: bool,
    /// Collapsible sidebar: panel area open.
    pub expanded: bool,
    /// Floating widget: body hidden, header kept.
    pub minimized: bool,
    /// Floating widget: offset of the card from its anchor, in CSS pixels.
    pub position: (f64, f64),
}

impl ShellState {
    #[must_use]
    pub fn new(variant: ShellVariant) -> Self {
        Self {
            variant,
            active: variant.opens_with_panel().then_some(FeatureId::Search),
            visible: true,
            expanded: false,
            minimized: false,
            position: (0.0, 0.0),
        }
    }

    /// Start `variant` with `feature` already selected, as from a
    /// `?feature=` link.
    #[must_use]
    pub fn with_feature(variant: ShellVariant, feature: Option<FeatureId>) -> Self {
        let mut state = Self::new(variant);
        if let Some(feature) = feature {
            state.select_feature(feature);
        }
        state
    }

    #[must_use]
    pub fn presentation(&self) -> Presentation {
        self.variant.presentation()
    }

    /// Whether a feature panel is currently rendered.
    #[must_use]
    pub fn panel_visible(&self) -> bool {
        if !self.visible || self.active.is_none() {
            return false;
        }
        match self.variant {
            ShellVariant::Sidebar => self.expanded,
            ShellVariant::FloatingWidget => !self.minimized,
            _ => true,
        }
    }

    /// Show `feature`. Selecting the active feature again changes nothing.
    pub fn select_feature(&mut self, feature: FeatureId) {
        self.active = Some(feature);
        match self.variant {
            ShellVariant::Sidebar => self.expanded = true,
            ShellVariant::FloatingWidget => self.minimized = false,
            _ => {}
        }
    }

    /// Accordion header click: open `feature`, or collapse it when already open.
    pub fn toggle_section(&mut self, feature: FeatureId) {
        if self.active == Some(feature) && self.variant.is_collapsible() {
            self.active = None;
        } else {
            self.select_feature(feature);
        }
    }

    /// Return from a panel to the bare navigation.
    pub fn back(&mut self) {
        if !self.variant.is_collapsible() {
            return;
        }
        self.active = None;
        self.expanded = false;
    }

    pub fn close(&mut self) {
        self.visible = false;
    }

    pub fn open(&mut self) {
        self.visible = true;
    }

    pub fn toggle_minimized(&mut self) {
        if self.variant == ShellVariant::FloatingWidget {
            self.minimized = !self.minimized;
        }
    }

    /// Move the floating card by a pointer delta. The card is anchored at the
    /// top-right corner and never moves right of or above that anchor.
    pub fn drag(&mut self, dx: f64, dy: f64) {
        if self.variant != ShellVariant::FloatingWidget {
            return;
        }
        let (x, y) = self.position;
        self.position = ((x + dx).min(0.0), (y + dy).max(0.0));
    }

    /// Escape key handling. Returns `true` when the key closed the shell.
    pub fn escape(&mut self) -> bool {
        if self.variant == ShellVariant::FloatingWidget && self.visible {
            self.close();
            return true;
        }
        false
    }
}
