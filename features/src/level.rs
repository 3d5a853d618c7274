//! Badge styling for risk, impact, and priority levels.

/// Visual variant of a level badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BadgeVariant {
    Destructive,
    Default,
    Secondary,
    Outline,
}

impl BadgeVariant {
    /// CSS modifier class for the badge.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Destructive => "badge--destructive",
            Self::Default => "badge--default",
            Self::Secondary => "badge--secondary",
            Self::Outline => "badge--outline",
        }
    }
}

/// Map a `high`/`medium`/`low` level (any case) to its badge variant.
#[must_use]
pub fn badge_for_level(level: &str) -> BadgeVariant {
    match level.trim().to_ascii_lowercase().as_str() {
        "high" => BadgeVariant::Destructive,
        "medium" => BadgeVariant::Default,
        "low" => BadgeVariant::Secondary,
        _ => BadgeVariant::Outline,
    }
}
