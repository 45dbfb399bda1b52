// tests/unit_report.rs
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use uniscan_core::metadata::ProjectMetadata;
use uniscan_core::report::{self, ProjectReportRow};
use uniscan_core::rules::RuleSet;

fn rules(json: &str) -> RuleSet {
    RuleSet::parse(json, Path::new("rules.json")).unwrap()
}

fn row(name: &str, hits: &[(&str, u64)]) -> ProjectReportRow {
    ProjectReportRow {
        name: name.to_string(),
        metadata: ProjectMetadata {
            engine_version: "2021.3.5f1".to_string(),
            script_count: 3,
            script_lines: 120,
            non_meta_files: 10,
            prefab_count: 2,
            scene_count: 1,
            game_object_count: 7,
        },
        hits: hits
            .iter()
            .map(|(k, v)| (k.to_string(), *v))
            .collect::<BTreeMap<_, _>>(),
    }
}

#[test]
fn test_header_is_metadata_then_sorted_rules() {
    let r = rules(r#"{"trigger": {}, "button": {}}"#);
    let header = report::header(&r);
    assert_eq!(
        header,
        vec![
            "Project",
            "UnityVersion",
            "CSharpScripts",
            "CSharpLines",
            "NonMetaFiles",
            "Prefabs",
            "Scenes",
            "GameObjects",
            "button",
            "trigger",
        ]
    );
}

#[test]
fn test_to_csv_row_fields() {
    let r = rules(r#"{"button": {}}"#);
    let csv = report::to_csv(&r, &[row("ProjA", &[("button", 4)])]);
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1], "ProjA,2021.3.5f1,3,120,10,2,1,7,4");
}

#[test]
fn test_missing_rule_count_prints_zero() {
    let r = rules(r#"{"button": {}, "grab": {}}"#);
    // Row only carries a button count; grab must still emit 0.
    let csv = report::to_csv(&r, &[row("ProjA", &[("button", 1)])]);
    let last = csv.lines().last().unwrap();
    assert!(last.ends_with(",1,0"));
}

#[test]
fn test_field_escaping_round_trips() {
    let r = rules("{}");
    let csv = report::to_csv(&r, &[row("Proj, \"A\"", &[])]);
    let records = report::parse_csv(&csv);
    assert_eq!(records[1][0], "Proj, \"A\"");
}

#[test]
fn test_write_overwrites_previous_report() {
    let d = tempfile::tempdir().unwrap();
    let path = d.path().join("summary.csv");
    fs::write(&path, "stale content from an old run\nrow\nrow\n").unwrap();

    let r = rules(r#"{"button": {}}"#);
    report::write(&path, &r, &[row("ProjA", &[("button", 0)])]).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(!content.contains("stale"));
    assert_eq!(content.lines().count(), 2);
}

#[test]
fn test_parse_csv_quoted_fields() {
    let records = report::parse_csv("a,\"b,c\",\"d\"\"e\"\nf,g,h\n");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0], vec!["a", "b,c", "d\"e"]);
    assert_eq!(records[1], vec!["f", "g", "h"]);
}

#[test]
fn test_column_index() {
    let header: Vec<String> = ["Project", "UnityVersion"]
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(report::column_index(&header, "UnityVersion"), Some(1));
    assert_eq!(report::column_index(&header, "Missing"), None);
}
