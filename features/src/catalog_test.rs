use super::*;

#[test]
fn page_lookup_finds_known_ids() {
    let entry = page("page-2").expect("page-2 is in the catalog");
    assert_eq!(entry.title, "User Authentication Guide");
    assert_eq!(entry.space, "Product");
}

#[test]
fn page_lookup_misses_unknown_ids() {
    assert!(page("page-99").is_none());
}

#[test]
fn page_ids_are_unique() {
    for (i, a) in PAGES.iter().enumerate() {
        for b in &PAGES[i + 1..] {
            assert_ne!(a.id, b.id);
        }
    }
}

#[test]
fn option_label_resolves_listed_values() {
    assert_eq!(option_label(LANGUAGES, "csharp"), "C#");
    assert_eq!(option_label(CHANGE_TYPES, "deprecated"), "Deprecation");
    assert_eq!(option_label(TEST_TYPES, "nope"), "");
}

#[test]
fn export_format_parses_select_values() {
    assert_eq!(ExportFormat::from_value("md"), ExportFormat::Md);
    assert_eq!(ExportFormat::from_value("docx"), ExportFormat::Docx);
    assert_eq!(ExportFormat::from_value("xlsx"), ExportFormat::Pdf);
}

#[test]
fn export_format_labels_are_uppercase_values() {
    for format in ExportFormat::ALL {
        assert_eq!(format.label(), format.as_str().to_ascii_uppercase());
    }
}

#[test]
fn code_change_lookup() {
    let change = code_change("api-refactor").expect("api-refactor is in the catalog");
    assert_eq!(change.risk, "high");
    assert_eq!(change.affected_areas, 12);
    assert_eq!(change.author, "Sarah Wilson");
    assert!(code_change("auth").is_none());
}

#[test]
fn doc_versions_pair_up_old_and_new() {
    assert_eq!(DOC_VERSIONS.len(), 8);
    assert_eq!(option_label(DOC_VERSIONS, "schema-v1.1"), "Database Schema v1.1");
}
