use super::args::ScanArgs;
use crate::config::ScanConfig;
use crate::report;
use crate::rules::RuleSet;
use crate::stats::{self, STAT_COLUMNS};
use crate::versions;
use crate::{discovery, engine};
use anyhow::{anyhow, Result};
use colored::Colorize;
use std::path::Path;

/// Runs the full scan pipeline: rules -> discovery -> per-project
/// extraction and scanning -> CSV report.
///
/// # Errors
/// Returns error if the rule set fails to load or the report cannot be
/// written. Per-project and per-file failures degrade, never abort.
pub fn handle_scan(args: &ScanArgs) -> Result<()> {
    let config = effective_config(args);
    let rules = RuleSet::load(&config.rules)?;
    println!(
        "Loaded {} {} from {}",
        rules.len(),
        pluralize("rule", rules.len()),
        config.rules.display()
    );

    let handles = discovery::discover(&args.root);
    if handles.is_empty() {
        println!(
            "{} No Unity projects found under {}",
            "~".yellow().bold(),
            args.root.display()
        );
    } else {
        println!(
            "Scanning {} {}...",
            handles.len(),
            pluralize("project", handles.len())
        );
    }
    if config.verbose {
        for handle in &handles {
            println!("  {} {}", "->".blue(), handle.root.display());
        }
    }

    let rows = engine::scan_projects(&handles, &rules, config.include_meta);
    report::write(&config.output, &rules, &rows)?;
    println!(
        "{} Wrote {} {} to {}",
        "OK".green().bold(),
        rows.len(),
        pluralize("row", rows.len()),
        config.output.display()
    );
    Ok(())
}

fn effective_config(args: &ScanArgs) -> ScanConfig {
    let mut config = ScanConfig::load();
    if let Some(rules) = &args.rules {
        config.rules.clone_from(rules);
    }
    if let Some(output) = &args.output {
        config.output.clone_from(output);
    }
    config.include_meta |= args.include_meta;
    config.verbose |= args.verbose;
    config
}

/// Prints the per-major-version project counts of an emitted report.
///
/// # Errors
/// Returns error if the report is unreadable or has no version column.
pub fn handle_versions(report_path: &Path) -> Result<()> {
    let records = report::read(report_path)?;
    let (header, rows) = records
        .split_first()
        .ok_or_else(|| anyhow!("report {} is empty", report_path.display()))?;
    let idx = report::column_index(header, "UnityVersion")
        .ok_or_else(|| anyhow!("report {} has no UnityVersion column", report_path.display()))?;

    let counts = versions::distribution(rows.iter().filter_map(|r| r.get(idx)).map(String::as_str));

    println!("{}", "Unity version distribution".bold());
    for (major, count) in &counts {
        println!("  {major:<10} {count:>5}");
    }
    println!(
        "  {:<10} {:>5}",
        "total".dimmed(),
        rows.len().to_string().dimmed()
    );
    Ok(())
}

/// Prints mean/variance/min/Q1/median/Q3/max per numeric report column.
///
/// # Errors
/// Returns error if the report is unreadable or empty.
pub fn handle_stats(report_path: &Path) -> Result<()> {
    let records = report::read(report_path)?;
    let (header, rows) = records
        .split_first()
        .ok_or_else(|| anyhow!("report {} is empty", report_path.display()))?;

    println!(
        "{}",
        format!(
            "{:<14} {:>10} {:>14} {:>8} {:>8} {:>8} {:>8} {:>8}",
            "Metric", "Mean", "Variance", "Min", "Q1", "Median", "Q3", "Max"
        )
        .bold()
    );

    for column in STAT_COLUMNS {
        let Some(idx) = report::column_index(header, column) else {
            continue;
        };
        let values: Vec<f64> = rows
            .iter()
            .filter_map(|r| r.get(idx))
            .filter_map(|v| v.parse().ok())
            .collect();
        let Some(summary) = stats::describe(column, &values) else {
            continue;
        };
        println!(
            "{:<14} {:>10} {:>14} {:>8} {:>8} {:>8} {:>8} {:>8}",
            summary.name,
            stats::format_stat(summary.mean),
            stats::format_stat(summary.variance),
            stats::format_stat(summary.min),
            stats::format_stat(summary.q1),
            stats::format_stat(summary.median),
            stats::format_stat(summary.q3),
            stats::format_stat(summary.max),
        );
    }
    Ok(())
}

fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}
