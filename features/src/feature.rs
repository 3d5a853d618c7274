//! The five assistant features and their navigation metadata.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

#[cfg(test)]
#[path = "feature_test.rs"]
mod feature_test;

/// Identifier of one assistant feature.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureId {
    #[default]
    Search,
    Video,
    Code,
    Impact,
    Testing,
}

/// Error returned when a string does not name a known feature.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown feature: {0}")]
pub struct UnknownFeature(pub String);

impl FeatureId {
    /// Stable lowercase id used in routes, DOM ids, and serialized state.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Search => "search",
            Self::Video => "video",
            Self::Code => "code",
            Self::Impact => "impact",
            Self::Testing => "testing",
        }
    }

    /// Navigation metadata for this feature.
    #[must_use]
    pub fn def(self) -> &'static FeatureDef {
        match self {
            Self::Search => &FEATURES[0],
            Self::Video => &FEATURES[1],
            Self::Code => &FEATURES[2],
            Self::Impact => &FEATURES[3],
            Self::Testing => &FEATURES[4],
        }
    }
}

impl fmt::Display for FeatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FeatureId {
    type Err = UnknownFeature;

    /// Accepts the canonical ids plus `diff`, which older dashboard links use
    /// for the impact analyzer.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "search" => Ok(Self::Search),
            "video" => Ok(Self::Video),
            "code" => Ok(Self::Code),
            "impact" | "diff" => Ok(Self::Impact),
            "testing" | "test" => Ok(Self::Testing),
            _ => Err(UnknownFeature(raw.to_owned())),
        }
    }
}

/// Label, blurb, and icon glyph shown wherever a feature is listed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeatureDef {
    pub id: FeatureId,
    pub label: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

/// All features in navigation order.
pub static FEATURES: [FeatureDef; 5] = [
    FeatureDef {
        id: FeatureId::Search,
        label: "AI Search",
        title: "AI Powered Search",
        description: "Search across Confluence spaces with AI assistance",
        icon: "\u{1F50D}",
    },
    FeatureDef {
        id: FeatureId::Video,
        label: "Video Summarizer",
        title: "Video Summarizer",
        description: "Generate summaries from video content",
        icon: "\u{1F3AC}",
    },
    FeatureDef {
        id: FeatureId::Code,
        label: "Code Assistant",
        title: "Code Assistant",
        description: "AI-powered code analysis and modifications",
        icon: "\u{2328}",
    },
    FeatureDef {
        id: FeatureId::Impact,
        label: "Impact Analyzer",
        title: "Impact Analyzer",
        description: "Analyze changes and their impact",
        icon: "\u{1F4CA}",
    },
    FeatureDef {
        id: FeatureId::Testing,
        label: "Test Support",
        title: "Test Support Tool",
        description: "Generate comprehensive test strategies",
        icon: "\u{1F9EA}",
    },
];
