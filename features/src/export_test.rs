use super::*;
use crate::mock;

#[test]
fn download_request_carries_ids_and_result() {
    let analysis = mock::code_analysis();
    let request = ExportRequest {
        feature: FeatureId::Code,
        target: ExportTarget::Download,
        format: ExportFormat::Md,
        result: &analysis,
    };
    let value = request.to_json().unwrap();

    assert_eq!(value["feature"], "code");
    assert_eq!(value["target"], "download");
    assert_eq!(value["format"], "md");
    assert_eq!(value["result"]["metrics"]["maintainability"], 85);
    assert_eq!(value["result"]["suggestions"].as_array().map(Vec::len), Some(3));
}

#[test]
fn confluence_save_serializes_target() {
    let plan = mock::test_plan();
    let request =
        ExportRequest { feature: FeatureId::Testing, target: ExportTarget::Confluence, format: ExportFormat::Pdf, result: &plan };
    let value = request.to_json().unwrap();
    assert_eq!(value["feature"], "testing");
    assert_eq!(value["target"], "confluence");
    assert_eq!(value["result"]["metrics"]["coverage"], 85);
}

#[test]
fn absent_impact_extras_serialize_as_null() {
    let analysis = mock::impact_analysis(&crate::input::ImpactInput::default());
    let request =
        ExportRequest { feature: FeatureId::Impact, target: ExportTarget::Download, format: ExportFormat::Txt, result: &analysis };
    let value = request.to_json().unwrap();
    assert!(value["result"]["code_diff"].is_null());
    assert!(value["result"]["version_comparison"].is_null());
}
