//! Static fixtures the feature forms browse.
//!
//! These stand in for content that would come from a Confluence instance:
//! pages to search, video attachments, and the option lists behind each
//! select control.

use serde::Serialize;

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

/// A Confluence page available as a search source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageEntry {
    pub id: &'static str,
    pub title: &'static str,
    pub space: &'static str,
    pub last_updated: &'static str,
}

pub static PAGES: [PageEntry; 5] = [
    PageEntry { id: "page-1", title: "API Documentation", space: "Engineering", last_updated: "2 days ago" },
    PageEntry { id: "page-2", title: "User Authentication Guide", space: "Product", last_updated: "1 week ago" },
    PageEntry { id: "page-3", title: "Database Schema", space: "Engineering", last_updated: "3 days ago" },
    PageEntry { id: "page-4", title: "UI Component Library", space: "Design", last_updated: "5 days ago" },
    PageEntry { id: "page-5", title: "Security Protocols", space: "Engineering", last_updated: "1 day ago" },
];

/// Look up a page by id.
#[must_use]
pub fn page(id: &str) -> Option<&'static PageEntry> {
    PAGES.iter().find(|p| p.id == id)
}

/// A video attachment that can be summarized.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VideoEntry {
    pub id: &'static str,
    pub title: &'static str,
    pub duration: &'static str,
    pub size: &'static str,
    pub page: &'static str,
    pub uploaded: &'static str,
}

pub static VIDEOS: [VideoEntry; 4] = [
    VideoEntry {
        id: "video-1",
        title: "Product Demo - Q4 Features",
        duration: "12:34",
        size: "45 MB",
        page: "Product Updates",
        uploaded: "2 days ago",
    },
    VideoEntry {
        id: "video-2",
        title: "Team Meeting - Architecture Review",
        duration: "28:45",
        size: "120 MB",
        page: "Engineering Notes",
        uploaded: "1 week ago",
    },
    VideoEntry {
        id: "video-3",
        title: "Customer Interview Session",
        duration: "35:20",
        size: "95 MB",
        page: "User Research",
        uploaded: "3 days ago",
    },
    VideoEntry {
        id: "video-4",
        title: "Security Training Workshop",
        duration: "22:18",
        size: "78 MB",
        page: "Training Materials",
        uploaded: "5 days ago",
    },
];

/// A recent code change the impact analyzer can be pointed at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CodeChange {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub files: &'static [&'static str],
    pub risk: &'static str,
    pub affected_areas: u32,
    pub timestamp: &'static str,
    pub author: &'static str,
}

pub static CODE_CHANGES: [CodeChange; 3] = [
    CodeChange {
        id: "auth-update",
        title: "Authentication Service Update",
        description: "Updated JWT token expiration and added refresh token logic",
        files: &["auth.js", "middleware.js", "user.controller.js"],
        risk: "medium",
        affected_areas: 5,
        timestamp: "2 hours ago",
        author: "John Doe",
    },
    CodeChange {
        id: "api-refactor",
        title: "API Endpoint Refactoring",
        description: "Consolidated user management endpoints and updated response format",
        files: &["api-routes.js", "user.service.js", "validation.js"],
        risk: "high",
        affected_areas: 12,
        timestamp: "1 day ago",
        author: "Sarah Wilson",
    },
    CodeChange {
        id: "db-schema",
        title: "Database Schema Changes",
        description: "Added new fields for user preferences and activity tracking",
        files: &["migrations/001-user-prefs.sql", "models/user.js"],
        risk: "low",
        affected_areas: 3,
        timestamp: "3 days ago",
        author: "Mike Chen",
    },
];

/// Look up a recent change by id.
#[must_use]
pub fn code_change(id: &str) -> Option<&'static CodeChange> {
    CODE_CHANGES.iter().find(|c| c.id == id)
}

/// `(value, label)` pairs for a select control.
pub type SelectOptions = &'static [(&'static str, &'static str)];

pub const LANGUAGES: SelectOptions = &[
    ("javascript", "JavaScript"),
    ("typescript", "TypeScript"),
    ("python", "Python"),
    ("java", "Java"),
    ("csharp", "C#"),
    ("go", "Go"),
    ("rust", "Rust"),
];

pub const CHANGE_TYPES: SelectOptions = &[
    ("feature", "New Feature"),
    ("enhancement", "Enhancement"),
    ("bugfix", "Bug Fix"),
    ("security", "Security Update"),
    ("infrastructure", "Infrastructure"),
    ("deprecated", "Deprecation"),
];

pub const TEST_TYPES: SelectOptions = &[
    ("unit", "Unit Tests"),
    ("integration", "Integration Tests"),
    ("e2e", "End-to-End Tests"),
    ("performance", "Performance Tests"),
    ("security", "Security Tests"),
    ("accessibility", "Accessibility Tests"),
];

pub const SPACES: SelectOptions = &[
    ("product-space", "Product Space"),
    ("engineering", "Engineering"),
    ("design", "Design"),
    ("marketing", "Marketing"),
];

pub const SPACE_PAGES: SelectOptions = &[
    ("main-page", "Main Documentation"),
    ("api-docs", "API Documentation"),
    ("user-guide", "User Guide"),
    ("troubleshooting", "Troubleshooting"),
];

/// Document versions offered for a before/after comparison.
pub const DOC_VERSIONS: SelectOptions = &[
    ("api-v1.2", "API Documentation v1.2"),
    ("api-v1.3", "API Documentation v1.3"),
    ("guide-2024-03", "User Guide - March 2024"),
    ("guide-2024-04", "User Guide - April 2024"),
    ("arch-v2.1", "System Architecture v2.1"),
    ("arch-v2.2", "System Architecture v2.2"),
    ("schema-v1.0", "Database Schema v1.0"),
    ("schema-v1.1", "Database Schema v1.1"),
];

/// Label for `value` in `options`, or an empty string when unlisted.
#[must_use]
pub fn option_label(options: SelectOptions, value: &str) -> &'static str {
    options.iter().find(|(v, _)| *v == value).map_or("", |(_, label)| label)
}

/// Formats offered by the export bar under each result.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Pdf,
    Docx,
    Txt,
    Md,
}

impl ExportFormat {
    pub const ALL: [Self; 4] = [Self::Pdf, Self::Docx, Self::Txt, Self::Md];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Docx => "docx",
            Self::Txt => "txt",
            Self::Md => "md",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pdf => "PDF",
            Self::Docx => "DOCX",
            Self::Txt => "TXT",
            Self::Md => "MD",
        }
    }

    /// Parse a select value; unknown values fall back to PDF.
    #[must_use]
    pub fn from_value(raw: &str) -> Self {
        Self::ALL.into_iter().find(|f| f.as_str() == raw).unwrap_or_default()
    }
}
