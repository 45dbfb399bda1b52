// src/scanner.rs
use crate::corpus::ProjectCorpus;
use crate::project::ProjectHandle;
use crate::rules::RuleSet;
use std::collections::BTreeMap;

/// Per-rule hit counts for one project (or one file, before summing).
/// Every rule name is always present; zero hits stay 0, never absent.
pub type HitCounter = BTreeMap<String, u64>;

/// A counter with every rule at zero.
#[must_use]
pub fn zero_hits(rules: &RuleSet) -> HitCounter {
    rules.names().map(|name| (name.to_string(), 0)).collect()
}

/// Scans one file's raw text against every rule.
///
/// Per rule: each gameObject pattern contributes 1 if its `m_Name:` match
/// appears anywhere in the text (presence, not occurrence count); each
/// script pattern contributes 1 if it appears as a plain substring. The
/// asymmetry mirrors the asset format: object names are structural single
/// fields, script identifiers may legitimately repeat.
#[must_use]
pub fn scan_text(text: &str, rules: &RuleSet) -> HitCounter {
    let mut hits = zero_hits(rules);
    for (name, rule) in rules.iter() {
        let mut count = 0u64;
        for pattern in &rule.game_objects {
            if pattern.is_match(text) {
                count += 1;
            }
        }
        for script in &rule.scripts {
            if text.contains(script.as_str()) {
                count += 1;
            }
        }
        if count > 0 {
            if let Some(slot) = hits.get_mut(name) {
                *slot += count;
            }
        }
    }
    hits
}

/// Scans every relevant file of a project and sums the per-file counters.
/// Unreadable files contribute zero hits and never abort the scan.
#[must_use]
pub fn scan_project(handle: &ProjectHandle, rules: &RuleSet) -> HitCounter {
    let corpus = ProjectCorpus::new(handle);
    let mut totals = zero_hits(rules);
    for path in corpus.scan_files() {
        let Some(record) = corpus.read(&path) else {
            continue;
        };
        for (name, count) in scan_text(&record.text, rules) {
            if let Some(slot) = totals.get_mut(&name) {
                *slot += count;
            }
        }
    }
    totals
}
