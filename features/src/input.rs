//! Form inputs for each feature and the rules that gate their triggers.
//!
//! DESIGN
//! ======
//! Every form implements [`FeatureInput`], which ties the input to its result
//! type, its validation rule, its mocked responder, and its fixed delay. The
//! client drives all five panels through this one trait.

use std::time::Duration;

use crate::catalog;
use crate::feature::FeatureId;
use crate::mock;

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

/// Why a trigger was refused before it started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    /// A required text field is blank.
    #[error("{field} is required")]
    Missing { field: &'static str },
    /// The search form has no source pages checked.
    #[error("select at least one page")]
    NoPagesSelected,
}

/// A feature form that can be submitted for a mocked result.
pub trait FeatureInput {
    /// Result produced once the simulated delay elapses.
    type Output: Clone + PartialEq + serde::Serialize + 'static;

    /// Feature this input belongs to.
    const FEATURE: FeatureId;

    /// Check the required fields.
    ///
    /// # Errors
    ///
    /// Returns the first [`InputError`] found.
    fn validate(&self) -> Result<(), InputError>;

    /// Build the literal result for this input.
    fn respond(&self) -> Self::Output;

    /// Whether the trigger control should be enabled.
    fn is_ready(&self) -> bool {
        self.validate().is_ok()
    }

    /// Fixed simulated latency for this feature.
    fn delay() -> Duration {
        mock::delay(Self::FEATURE)
    }
}

fn require(value: &str, field: &'static str) -> Result<(), InputError> {
    if value.trim().is_empty() { Err(InputError::Missing { field }) } else { Ok(()) }
}

// =============================================================================
// SEARCH
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchInput {
    pub query: String,
    /// Checked page ids, in the order they were checked.
    pub selected_pages: Vec<String>,
}

impl SearchInput {
    /// Check or uncheck a source page.
    pub fn set_page(&mut self, page_id: &str, checked: bool) {
        let present = self.selected_pages.iter().any(|id| id == page_id);
        if checked && !present {
            self.selected_pages.push(page_id.to_owned());
        } else if !checked {
            self.selected_pages.retain(|id| id != page_id);
        }
    }

    #[must_use]
    pub fn is_selected(&self, page_id: &str) -> bool {
        self.selected_pages.iter().any(|id| id == page_id)
    }
}

impl FeatureInput for SearchInput {
    type Output = crate::results::SearchResult;
    const FEATURE: FeatureId = FeatureId::Search;

    fn validate(&self) -> Result<(), InputError> {
        require(&self.query, "question")?;
        if self.selected_pages.is_empty() {
            return Err(InputError::NoPagesSelected);
        }
        Ok(())
    }

    fn respond(&self) -> Self::Output {
        mock::search(self)
    }
}

// =============================================================================
// VIDEO
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VideoInput {
    pub video_url: String,
}

impl FeatureInput for VideoInput {
    type Output = crate::results::VideoSummary;
    const FEATURE: FeatureId = FeatureId::Video;

    fn validate(&self) -> Result<(), InputError> {
        require(&self.video_url, "video URL")
    }

    fn respond(&self) -> Self::Output {
        mock::video_summary()
    }
}

// =============================================================================
// CODE
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodeInput {
    pub code: String,
    pub language: String,
}

impl Default for CodeInput {
    fn default() -> Self {
        Self { code: String::new(), language: "javascript".to_owned() }
    }
}

impl FeatureInput for CodeInput {
    type Output = crate::results::CodeAnalysis;
    const FEATURE: FeatureId = FeatureId::Code;

    fn validate(&self) -> Result<(), InputError> {
        require(&self.code, "code")
    }

    fn respond(&self) -> Self::Output {
        mock::code_analysis()
    }
}

// =============================================================================
// IMPACT
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImpactInput {
    pub change_description: String,
    pub change_type: String,
    /// Recent change picked from `catalog::CODE_CHANGES`, if any.
    pub change_id: Option<String>,
    /// Document versions to compare; both must be set for a comparison.
    pub old_version: String,
    pub new_version: String,
}

impl Default for ImpactInput {
    fn default() -> Self {
        Self {
            change_description: String::new(),
            change_type: "feature".to_owned(),
            change_id: None,
            old_version: String::new(),
            new_version: String::new(),
        }
    }
}

impl ImpactInput {
    /// Point the analysis at a recent change and prefill its description.
    /// Unknown ids are ignored.
    pub fn pick_change(&mut self, change_id: &str) {
        let Some(change) = catalog::code_change(change_id) else {
            return;
        };
        self.change_id = Some(change.id.to_owned());
        change.description.clone_into(&mut self.change_description);
    }

    /// Both version selectors are filled.
    #[must_use]
    pub fn compares_versions(&self) -> bool {
        !self.old_version.trim().is_empty() && !self.new_version.trim().is_empty()
    }
}

impl FeatureInput for ImpactInput {
    type Output = crate::results::ImpactAnalysis;
    const FEATURE: FeatureId = FeatureId::Impact;

    fn validate(&self) -> Result<(), InputError> {
        require(&self.change_description, "change description")
    }

    fn respond(&self) -> Self::Output {
        mock::impact_analysis(self)
    }
}

// =============================================================================
// TESTING
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestInput {
    pub feature: String,
    pub test_type: String,
    pub requirements: String,
}

impl Default for TestInput {
    fn default() -> Self {
        Self { feature: String::new(), test_type: "unit".to_owned(), requirements: String::new() }
    }
}

impl FeatureInput for TestInput {
    type Output = crate::results::TestPlan;
    const FEATURE: FeatureId = FeatureId::Testing;

    fn validate(&self) -> Result<(), InputError> {
        require(&self.feature, "feature name")
    }

    fn respond(&self) -> Self::Output {
        mock::test_plan()
    }
}
