// src/report.rs
use crate::error::{Result, ScanError};
use crate::metadata::ProjectMetadata;
use crate::rules::RuleSet;
use crate::scanner::HitCounter;
use std::fs;
use std::path::Path;

/// Identity and metadata columns, in emission order. Rule columns follow.
pub const METADATA_COLUMNS: &[&str] = &[
    "Project",
    "UnityVersion",
    "CSharpScripts",
    "CSharpLines",
    "NonMetaFiles",
    "Prefabs",
    "Scenes",
    "GameObjects",
];

/// The final denormalized record for one project.
#[derive(Debug, Clone)]
pub struct ProjectReportRow {
    pub name: String,
    pub metadata: ProjectMetadata,
    pub hits: HitCounter,
}

/// The full column set, fixed for the run: metadata columns plus one
/// column per rule, derived once from the rule set.
#[must_use]
pub fn header(rules: &RuleSet) -> Vec<String> {
    METADATA_COLUMNS
        .iter()
        .map(ToString::to_string)
        .chain(rules.names().map(ToString::to_string))
        .collect()
}

/// Renders the report as CSV text. Row order is production order.
/// A project with zero hits for a rule prints 0, never an empty field.
#[must_use]
pub fn to_csv(rules: &RuleSet, rows: &[ProjectReportRow]) -> String {
    let mut out = String::new();
    push_record(&mut out, header(rules).iter().map(String::as_str));

    for row in rows {
        let m = &row.metadata;
        let mut fields: Vec<String> = vec![
            row.name.clone(),
            m.engine_version.clone(),
            m.script_count.to_string(),
            m.script_lines.to_string(),
            m.non_meta_files.to_string(),
            m.prefab_count.to_string(),
            m.scene_count.to_string(),
            m.game_object_count.to_string(),
        ];
        for name in rules.names() {
            fields.push(row.hits.get(name).copied().unwrap_or(0).to_string());
        }
        push_record(&mut out, fields.iter().map(String::as_str));
    }
    out
}

/// Writes the report, overwriting any prior run's output.
///
/// # Errors
/// Returns an I/O error tagged with the destination path.
pub fn write(path: &Path, rules: &RuleSet, rows: &[ProjectReportRow]) -> Result<()> {
    fs::write(path, to_csv(rules, rows)).map_err(|source| ScanError::Io {
        source,
        path: path.to_path_buf(),
    })
}

fn push_record<'a>(out: &mut String, fields: impl Iterator<Item = &'a str>) {
    let escaped: Vec<String> = fields.map(escape_field).collect();
    out.push_str(&escaped.join(","));
    out.push('\n');
}

fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Reads a report back into records (used by `versions` and `stats`).
///
/// # Errors
/// Returns an I/O error tagged with the report path.
pub fn read(path: &Path) -> Result<Vec<Vec<String>>> {
    let content = fs::read_to_string(path).map_err(|source| ScanError::Io {
        source,
        path: path.to_path_buf(),
    })?;
    Ok(parse_csv(&content))
}

/// Minimal CSV parser for the emitter's own output: comma-delimited,
/// double-quoted fields with doubled embedded quotes.
#[must_use]
pub fn parse_csv(content: &str) -> Vec<Vec<String>> {
    let mut records = Vec::new();
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = content.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => in_quotes = false,
                _ => field.push(c),
            }
            continue;
        }
        match c {
            '"' => in_quotes = true,
            ',' => fields.push(std::mem::take(&mut field)),
            '\r' => {}
            '\n' => {
                fields.push(std::mem::take(&mut field));
                records.push(std::mem::take(&mut fields));
            }
            _ => field.push(c),
        }
    }
    if !field.is_empty() || !fields.is_empty() {
        fields.push(field);
        records.push(fields);
    }
    records
}

/// Column index lookup in a parsed report header.
#[must_use]
pub fn column_index(header: &[String], name: &str) -> Option<usize> {
    header.iter().position(|h| h == name)
}
