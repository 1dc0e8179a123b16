//! In-process persistence collaborator: every validation run is recorded
//! with its report and timestamp, listable newest-first.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::validator::Report;

/// One stored validation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationRun {
    pub source: String,
    pub report: Report,
    pub recorded_at: DateTime<Utc>,
}

/// Append-only store of validation runs, kept in insertion order.
#[derive(Debug, Default)]
pub struct RunStore {
    runs: Vec<ValidationRun>,
}

impl RunStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a run stamped with the current time.
    pub fn insert(&mut self, source: impl Into<String>, report: Report) {
        self.insert_at(source, report, Utc::now());
    }

    /// Record a run with an explicit timestamp (tests, backfill).
    pub fn insert_at(
        &mut self,
        source: impl Into<String>,
        report: Report,
        recorded_at: DateTime<Utc>,
    ) {
        self.runs.push(ValidationRun {
            source: source.into(),
            report,
            recorded_at,
        });
    }

    /// Newest-first listing, optionally paginated.
    pub fn list(&self, limit: Option<usize>, offset: usize) -> Vec<&ValidationRun> {
        let newest_first = self.runs.iter().rev().skip(offset);
        match limit {
            Some(n) => newest_first.take(n).collect(),
            None => newest_first.collect(),
        }
    }

    /// All runs in insertion order, for aggregation.
    pub fn runs(&self) -> &[ValidationRun] {
        &self.runs
    }

    pub fn len(&self) -> usize {
        self.runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }
}
