//! Result shapes produced by each feature's simulated run.

use serde::Serialize;

// =============================================================================
// SEARCH
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    /// Templated sentence echoing the user's question.
    pub headline: String,
    pub answer: String,
    pub sources: Vec<SearchSource>,
    /// Percent, 0 to 100.
    pub confidence: u8,
    pub related_topics: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SearchSource {
    pub id: String,
    pub title: String,
    pub space: String,
}

// =============================================================================
// VIDEO
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct VideoSummary {
    pub title: String,
    pub duration: String,
    pub key_points: Vec<String>,
    pub summary: String,
    pub transcript: String,
    pub speakers: Vec<String>,
    pub action_items: Vec<String>,
}

// =============================================================================
// CODE
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CodeAnalysis {
    pub suggestions: Vec<CodeSuggestion>,
    pub optimized_code: String,
    pub metrics: CodeMetrics,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CodeSuggestion {
    pub kind: String,
    pub title: String,
    pub description: String,
    pub line: u32,
    pub priority: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CodeMetrics {
    pub complexity: u32,
    pub maintainability: u32,
    pub security: u32,
    pub performance: u32,
}

// =============================================================================
// IMPACT
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ImpactAnalysis {
    pub overall_impact: String,
    pub risk_level: String,
    pub affected_systems: Vec<AffectedSystem>,
    pub stakeholders: Vec<Stakeholder>,
    pub timeline: ImpactTimeline,
    pub recommendations: Vec<String>,
    pub dependencies: Vec<String>,
    /// Before/after source for the picked recent change, when one was picked.
    pub code_diff: Option<CodeDiff>,
    /// Present when both document versions were chosen.
    pub version_comparison: Option<VersionComparison>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CodeDiff {
    pub change_id: String,
    pub files: Vec<String>,
    pub before: String,
    pub after: String,
    /// Bullet summary shown in the unified view.
    pub key_changes: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct VersionComparison {
    pub old_version: String,
    pub new_version: String,
    pub lines_added: u32,
    pub lines_removed: u32,
    pub lines_modified: u32,
    pub files_changed: u32,
    pub breaking_changes: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AffectedSystem {
    pub name: String,
    pub risk: String,
    pub impact: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Stakeholder {
    pub role: String,
    pub impact: String,
    pub action: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ImpactTimeline {
    pub planning: String,
    pub development: String,
    pub testing: String,
    pub deployment: String,
    pub total: String,
}

// =============================================================================
// TESTING
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TestPlan {
    pub test_cases: Vec<TestCase>,
    pub automation: Automation,
    pub metrics: TestMetrics,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TestCase {
    pub id: String,
    pub title: String,
    pub priority: String,
    pub kind: String,
    pub steps: Vec<String>,
    pub expected_result: String,
    pub status: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Automation {
    pub framework: String,
    pub coverage: String,
    pub execution_time: String,
    pub code: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TestMetrics {
    pub total: u32,
    pub passed: u32,
    pub failed: u32,
    pub pending: u32,
    /// Percent, 0 to 100.
    pub coverage: u8,
}
