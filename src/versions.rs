// src/versions.rs
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Bucket for versions that do not look like a Unity release string.
pub const UNKNOWN_MAJOR: &str = "Unknown";

// Unity release strings look like 2021.3.15f1 (or 5.6.1f1 for the old line).
static MAJOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,4})\.\d+\.\d+f\d+").unwrap_or_else(|_| panic!("Invalid Regex"))
});

/// Reduces a full engine version to its major bucket: `2021.3.15f1` ->
/// `2021.x`; anything unparseable -> `Unknown`.
#[must_use]
pub fn major_version(version: &str) -> String {
    MAJOR_RE
        .captures(version)
        .and_then(|caps| caps.get(1))
        .map_or_else(
            || UNKNOWN_MAJOR.to_string(),
            |m| format!("{}.x", m.as_str()),
        )
}

/// Counts projects per major version, sorted by version label.
pub fn distribution<'a>(versions: impl Iterator<Item = &'a str>) -> BTreeMap<String, usize> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for version in versions {
        *counts.entry(major_version(version)).or_insert(0) += 1;
    }
    counts
}
