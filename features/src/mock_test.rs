use super::*;

#[test]
fn search_echoes_selected_pages_in_order() {
    let input = SearchInput {
        query: "How does auth work?".to_owned(),
        selected_pages: vec!["page-5".to_owned(), "page-2".to_owned()],
    };
    let result = search(&input);

    let ids = result.sources.iter().map(|s| s.id.as_str()).collect::<Vec<_>>();
    assert_eq!(ids, vec!["page-5", "page-2"]);
    assert_eq!(result.sources[0].title, "Security Protocols");
    assert_eq!(result.confidence, 87);
    assert_eq!(result.related_topics.len(), 3);
}

#[test]
fn search_headline_interpolates_trimmed_query() {
    let input = SearchInput { query: "  auth  ".to_owned(), selected_pages: vec!["page-1".to_owned()] };
    let result = search(&input);
    assert!(result.headline.contains("for \"auth\""));
    assert!(result.headline.contains("1 selected page(s)"));
}

#[test]
fn search_skips_unknown_page_ids() {
    let input = SearchInput {
        query: "auth".to_owned(),
        selected_pages: vec!["page-1".to_owned(), "ghost".to_owned()],
    };
    assert_eq!(search(&input).sources.len(), 1);
}

#[test]
fn code_analysis_literal() {
    let analysis = code_analysis();
    assert_eq!(analysis.metrics.maintainability, 85);
    assert_eq!(analysis.suggestions.len(), 3);
    assert_eq!(analysis.suggestions[1].priority, "high");
    assert!(analysis.optimized_code.starts_with("// Optimized version"));
}

#[test]
fn video_summary_literal() {
    let summary = video_summary();
    assert_eq!(summary.duration, "12:34");
    assert_eq!(summary.key_points.len(), 5);
    assert_eq!(summary.speakers.len(), 3);
}

#[test]
fn impact_analysis_literal() {
    let analysis = impact_analysis(&ImpactInput::default());
    assert_eq!(analysis.overall_impact, "High");
    assert_eq!(analysis.risk_level, "Medium");
    assert_eq!(analysis.affected_systems.len(), 4);
    assert_eq!(analysis.timeline.total, "7-9 weeks");
    assert!(analysis.code_diff.is_none());
    assert!(analysis.version_comparison.is_none());
}

#[test]
fn impact_attaches_diff_for_recorded_change() {
    let mut input = ImpactInput::default();
    input.pick_change("auth-update");
    let diff = impact_analysis(&input).code_diff.expect("auth-update has recorded source");
    assert_eq!(diff.change_id, "auth-update");
    assert_eq!(diff.files, ["auth.js", "middleware.js", "user.controller.js"]);
    assert!(diff.before.contains("expiresIn: '1h'"));
    assert!(diff.after.contains("expiresIn: '24h'"));
    assert_eq!(diff.key_changes.len(), 5);
}

#[test]
fn impact_has_no_diff_for_changes_without_source() {
    let mut input = ImpactInput::default();
    input.pick_change("db-schema");
    assert!(impact_analysis(&input).code_diff.is_none());
}

#[test]
fn impact_compares_versions_only_when_both_chosen() {
    let mut input = ImpactInput { old_version: "api-v1.2".to_owned(), ..ImpactInput::default() };
    assert!(impact_analysis(&input).version_comparison.is_none());

    input.new_version = "api-v1.3".to_owned();
    let cmp = impact_analysis(&input).version_comparison.expect("both versions chosen");
    assert_eq!(cmp.old_version, "API Documentation v1.2");
    assert_eq!(cmp.new_version, "API Documentation v1.3");
    assert_eq!((cmp.lines_added, cmp.lines_removed, cmp.lines_modified, cmp.files_changed), (47, 23, 15, 8));
    assert_eq!(cmp.breaking_changes.len(), 3);
}

#[test]
fn test_plan_metrics_agree_with_cases() {
    let plan = test_plan();
    let pending = plan.test_cases.iter().filter(|c| c.status == "pending").count();
    assert_eq!(plan.metrics.total as usize, plan.test_cases.len());
    assert_eq!(plan.metrics.pending as usize, pending);
    assert_eq!(plan.metrics.passed + plan.metrics.failed, 0);
}

#[test]
fn responses_serialize_with_snake_case_fields() {
    let value = serde_json::to_value(code_analysis()).unwrap();
    assert_eq!(value["metrics"]["maintainability"], 85);
    assert_eq!(value["suggestions"][0]["kind"], "performance");
}
