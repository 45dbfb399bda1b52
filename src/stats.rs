// src/stats.rs
//! Descriptive statistics over the numeric report columns.

/// Report columns summarized by the `stats` subcommand.
pub const STAT_COLUMNS: &[&str] = &[
    "CSharpScripts",
    "CSharpLines",
    "NonMetaFiles",
    "Prefabs",
    "Scenes",
    "GameObjects",
];

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSummary {
    pub name: String,
    pub mean: f64,
    pub variance: f64,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

/// Summarizes one column. Returns `None` for an empty column. Variance is
/// the sample variance (n-1 denominator), 0 for a single value.
#[must_use]
pub fn describe(name: &str, values: &[f64]) -> Option<ColumnSummary> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let n = sorted.len();
    let mean = sorted.iter().sum::<f64>() / n as f64;
    let variance = if n > 1 {
        sorted.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1) as f64
    } else {
        0.0
    };

    Some(ColumnSummary {
        name: name.to_string(),
        mean,
        variance,
        min: sorted[0],
        q1: percentile(&sorted, 25.0),
        median: percentile(&sorted, 50.0),
        q3: percentile(&sorted, 75.0),
        max: sorted[n - 1],
    })
}

/// Percentile with linear interpolation between closest ranks, over a
/// sorted non-empty slice.
#[must_use]
pub fn percentile(sorted: &[f64], p: f64) -> f64 {
    let last = sorted.len() - 1;
    let rank = p / 100.0 * last as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let frac = rank - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

/// Formats a statistic: whole numbers without decimals, otherwise 2 dp.
#[must_use]
pub fn format_stat(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value:.2}")
    }
}
