// src/engine.rs
use crate::metadata;
use crate::project::ProjectHandle;
use crate::report::ProjectReportRow;
use crate::rules::RuleSet;
use crate::scanner;
use rayon::prelude::*;

/// Runs extraction and interaction scanning for every discovered project.
///
/// Projects are independent, so they run on the rayon pool; `collect`
/// preserves input order, keeping the report deterministic for a given
/// discovery order.
#[must_use]
pub fn scan_projects(
    handles: &[ProjectHandle],
    rules: &RuleSet,
    include_meta: bool,
) -> Vec<ProjectReportRow> {
    handles
        .par_iter()
        .map(|handle| scan_one(handle, rules, include_meta))
        .collect()
}

fn scan_one(handle: &ProjectHandle, rules: &RuleSet, include_meta: bool) -> ProjectReportRow {
    ProjectReportRow {
        name: handle.name.clone(),
        metadata: metadata::extract(handle, include_meta),
        hits: scanner::scan_project(handle, rules),
    }
}
