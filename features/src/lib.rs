//! Feature catalog, inputs, and mocked results for the Confluence AI Assistant.
//!
//! This crate is UI-framework agnostic so the Leptos client (and anything
//! else) can consume it directly. It owns the five assistant features, the
//! fixtures their forms browse, the validation rules that gate each trigger,
//! and the literal results each trigger produces after its simulated delay.
//!
//! Nothing here performs I/O or keeps time. Scheduling the delay is the
//! caller's job; [`FeatureInput::delay`] only says how long it should be.

pub mod catalog;
pub mod export;
pub mod feature;
pub mod input;
pub mod level;
pub mod mock;
pub mod results;

pub use export::{ExportRequest, ExportTarget};
pub use feature::{FEATURES, FeatureDef, FeatureId, UnknownFeature};
pub use input::{
    CodeInput, FeatureInput, ImpactInput, InputError, SearchInput, TestInput, VideoInput,
};
pub use level::{BadgeVariant, badge_for_level};
pub use results::{
    AffectedSystem, Automation, CodeAnalysis, CodeDiff, CodeMetrics, CodeSuggestion,
    ImpactAnalysis, ImpactTimeline, SearchResult, SearchSource, Stakeholder, TestCase,
    TestMetrics, TestPlan, VersionComparison, VideoSummary,
};
