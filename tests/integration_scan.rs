// tests/integration_scan.rs
//! Full pipeline: discovery -> extraction -> interaction scan -> CSV.

use std::fs;
use std::path::{Path, PathBuf};
use uniscan_core::rules::RuleSet;
use uniscan_core::{discovery, engine, report};

const RULES_JSON: &str = r#"{
    "button": {"gameObjects": ["Button"], "scripts": ["ButtonEntity"]},
    "grab": {"gameObjects": ["Cube"], "scripts": []}
}"#;

fn make_project(parent: &Path, name: &str) -> PathBuf {
    let root = parent.join(name);
    fs::create_dir_all(root.join("Assets")).unwrap();
    fs::create_dir_all(root.join("ProjectSettings")).unwrap();
    root
}

fn make_dataset(root: &Path) {
    let a = make_project(root, "ProjA");
    fs::write(
        a.join("ProjectSettings").join("ProjectVersion.txt"),
        "m_EditorVersion: 2021.3.5f1\n",
    )
    .unwrap();
    let assets = a.join("Assets");
    fs::write(assets.join("Player.cs"), "class Player {\n}\n").unwrap();
    fs::write(
        assets.join("Main.unity"),
        "m_GameObject: {fileID: 1}\nm_Name: ButtonPrimary\nm_GameObject: {fileID: 2}\n",
    )
    .unwrap();
    fs::write(assets.join("Widget.prefab"), "m_Name: Cube\nButtonEntity\n").unwrap();

    // Second project, nested one level down, no version marker.
    let b = make_project(&root.join("extra"), "ProjB");
    fs::write(b.join("Assets").join("empty.unity"), "").unwrap();
}

fn scan_to_csv(root: &Path) -> String {
    let rules = RuleSet::parse(RULES_JSON, Path::new("rules.json")).unwrap();
    let handles = discovery::discover(root);
    let rows = engine::scan_projects(&handles, &rules, false);
    report::to_csv(&rules, &rows)
}

#[test]
fn test_end_to_end_report() {
    let d = tempfile::tempdir().unwrap();
    make_dataset(d.path());

    let csv = scan_to_csv(d.path());
    let records = report::parse_csv(&csv);
    assert_eq!(records.len(), 3);
    assert_eq!(
        records[0],
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
            "grab",
        ]
    );

    let proj_a = records
        .iter()
        .find(|r| r[0] == "ProjA")
        .expect("ProjA row missing");
    assert_eq!(proj_a[1], "2021.3.5f1");
    assert_eq!(proj_a[2], "1"); // scripts
    assert_eq!(proj_a[3], "2"); // non-blank lines
    assert_eq!(proj_a[4], "3"); // non-meta files
    assert_eq!(proj_a[5], "1"); // prefabs
    assert_eq!(proj_a[6], "1"); // scenes
    assert_eq!(proj_a[7], "2"); // m_GameObject markers
    // button: scene name prefix hit + prefab ButtonEntity substring hit.
    assert_eq!(proj_a[8], "2");
    // grab: prefab m_Name: Cube hit.
    assert_eq!(proj_a[9], "1");

    // ProjB's display name is its first component relative to the root.
    let proj_b = records
        .iter()
        .find(|r| r[0] == "extra")
        .expect("ProjB row missing");
    assert_eq!(proj_b[1], "Unknown");
    assert_eq!(proj_b[2], "0");
    assert_eq!(proj_b[8], "0");
    assert_eq!(proj_b[9], "0");
}

#[test]
fn test_scan_is_idempotent() {
    let d = tempfile::tempdir().unwrap();
    make_dataset(d.path());

    let first = scan_to_csv(d.path());
    let second = scan_to_csv(d.path());
    assert_eq!(first, second);
}

#[test]
fn test_written_report_is_byte_identical_across_runs() {
    let d = tempfile::tempdir().unwrap();
    make_dataset(d.path());
    let out = d.path().join("summary.csv");

    let rules = RuleSet::parse(RULES_JSON, Path::new("rules.json")).unwrap();
    for _ in 0..2 {
        let handles = discovery::discover(d.path());
        let rows = engine::scan_projects(&handles, &rules, false);
        report::write(&out, &rules, &rows).unwrap();
    }
    let first = fs::read(&out).unwrap();

    let handles = discovery::discover(d.path());
    let rows = engine::scan_projects(&handles, &rules, false);
    report::write(&out, &rules, &rows).unwrap();
    assert_eq!(fs::read(&out).unwrap(), first);
}

#[test]
fn test_removing_a_rule_leaves_other_counts_unchanged() {
    let d = tempfile::tempdir().unwrap();
    make_dataset(d.path());

    let full = RuleSet::parse(RULES_JSON, Path::new("rules.json")).unwrap();
    let reduced = RuleSet::parse(
        r#"{"grab": {"gameObjects": ["Cube"], "scripts": []}}"#,
        Path::new("rules.json"),
    )
    .unwrap();

    let handles = discovery::discover(d.path());
    let full_rows = engine::scan_projects(&handles, &full, false);
    let reduced_rows = engine::scan_projects(&handles, &reduced, false);

    for (a, b) in full_rows.iter().zip(&reduced_rows) {
        assert_eq!(a.hits.get("grab"), b.hits.get("grab"));
    }
}
