//! Session-scoped history of past evaluation runs
//!
//! The history is an explicit, caller-owned list: the hosting session
//! creates one, records each run into it, and drops it when the session
//! ends. Nothing here is process-global.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::types::EvaluationResult;

/// One recorded evaluation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    /// RFC 3339 timestamp taken when the run was recorded.
    pub evaluated_at: String,
    pub result: EvaluationResult,
}

/// Ordered list of past evaluation runs, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisHistory {
    records: Vec<AnalysisRecord>,
}

impl AnalysisHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a completed run, stamping it with the current time.
    pub fn record(&mut self, result: EvaluationResult) {
        self.records.push(AnalysisRecord {
            evaluated_at: Utc::now().to_rfc3339(),
            result,
        });
    }

    pub fn iter(&self) -> impl Iterator<Item = &AnalysisRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Most recently recorded run, if any.
    pub fn latest(&self) -> Option<&AnalysisRecord> {
        self.records.last()
    }
}
