//! Aggregation collaborator: summary statistics over stored validation runs.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::store::ValidationRun;

/// An error message counts as syntax-like when it mentions any of these.
const SYNTAX_MARKERS: &[&str] = &["semicolon", "Malformed", "Unmatched", "Mismatched"];

/// Fixed keyword list scanned via substring match against error messages.
const TRACKED_KEYWORDS: &[&str] = &[
    "PADAM", "ANKHE", "VARTTAI", "ELAITHE", "ALAITHE", "MALLI-MALLI",
];

/// Diagnostic count for one calendar day (UTC, `YYYY-MM-DD`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayCount {
    pub date: String,
    pub count: usize,
}

#[derive(Debug, Default, Serialize)]
pub struct AnalyticsSummary {
    pub total_runs: usize,
    pub total_errors: usize,
    pub total_warnings: usize,
    pub avg_errors_per_run: f64,
    pub avg_warnings_per_run: f64,
    /// Per-message frequency of syntax-like errors.
    pub syntax_errors: BTreeMap<String, usize>,
    /// Per-message frequency of the remaining ("semantic") errors.
    pub semantic_errors: BTreeMap<String, usize>,
    /// How often each tracked keyword shows up in error messages.
    pub keyword_errors: BTreeMap<String, usize>,
    pub errors_over_time: Vec<DayCount>,
    pub warnings_over_time: Vec<DayCount>,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn day_counts(buckets: BTreeMap<String, usize>) -> Vec<DayCount> {
    buckets
        .into_iter()
        .map(|(date, count)| DayCount { date, count })
        .collect()
}

/// Compute the full summary over a slice of stored runs.
pub fn summarize(runs: &[ValidationRun]) -> AnalyticsSummary {
    let mut summary = AnalyticsSummary {
        total_runs: runs.len(),
        ..AnalyticsSummary::default()
    };

    let mut errors_by_day: BTreeMap<String, usize> = BTreeMap::new();
    let mut warnings_by_day: BTreeMap<String, usize> = BTreeMap::new();

    for run in runs {
        let day = run.recorded_at.date_naive().to_string();

        *errors_by_day.entry(day.clone()).or_default() += run.report.errors.len();
        *warnings_by_day.entry(day).or_default() += run.report.warnings.len();

        summary.total_errors += run.report.errors.len();
        summary.total_warnings += run.report.warnings.len();

        for error in &run.report.errors {
            let is_syntax = SYNTAX_MARKERS.iter().any(|m| error.message.contains(m));
            let bucket = if is_syntax {
                &mut summary.syntax_errors
            } else {
                &mut summary.semantic_errors
            };
            *bucket.entry(error.message.clone()).or_default() += 1;

            for keyword in TRACKED_KEYWORDS {
                if error.message.contains(keyword) {
                    *summary.keyword_errors.entry((*keyword).to_string()).or_default() += 1;
                }
            }
        }
    }

    if !runs.is_empty() {
        summary.avg_errors_per_run = round2(summary.total_errors as f64 / runs.len() as f64);
        summary.avg_warnings_per_run = round2(summary.total_warnings as f64 / runs.len() as f64);
    }

    summary.errors_over_time = day_counts(errors_by_day);
    summary.warnings_over_time = day_counts(warnings_by_day);
    summary
}
