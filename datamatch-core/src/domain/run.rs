use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::dataset::RowRecord;
use super::ids::RunId;

/// Similarity threshold recorded on every persisted run. The matching
/// heuristic never produces scores below 1.0, so this is never exercised.
pub const DEFAULT_THRESHOLD: f64 = 0.1;

// ===== Run Status =====

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum RunStatus {
    Completed,
    Failed,
}

impl RunStatus {
    pub fn is_successful(&self) -> bool {
        matches!(self, RunStatus::Completed)
    }
}

// ===== Column Match =====

/// A matched column pair with its similarity score, serialized as a
/// three-element array: `["name", "name", 1.0]`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ColumnMatch(pub String, pub String, pub f64);

impl ColumnMatch {
    pub fn name(&self) -> &str {
        &self.0
    }

    pub fn score(&self) -> f64 {
        self.2
    }
}

// ===== Ephemeral Run Preview =====

/// Result of a preview comparison. Never persisted; carries no id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunPreview {
    pub dataset1: String,
    pub dataset2: String,
    pub matching_method: Option<String>,
    pub num_cdes: u32,
    pub timestamp: DateTime<Utc>,
    pub common_columns: Vec<ColumnMatch>,
}

impl RunPreview {
    pub fn new(
        dataset1: String,
        dataset2: String,
        matching_method: Option<String>,
        num_cdes: u32,
        common_columns: Vec<ColumnMatch>,
    ) -> Self {
        Self {
            dataset1,
            dataset2,
            matching_method,
            num_cdes,
            timestamp: Utc::now(),
            common_columns,
        }
    }
}

// ===== Result Summary =====

/// Placeholder statistics recorded on persisted runs. Real anomaly counting
/// does not exist; all values are zero.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ResultSummary {
    pub total_records: u64,
    pub total_anomalies: u64,
    pub anomaly_pct: f64,
}

// ===== Persisted Run =====

/// A persisted comparison between two datasets, written as `<id>.json` in
/// the runs directory. Carries full copies of both datasets' rows; `merged`
/// is dataset1's rows unchanged, there is no real merge step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunRecord {
    pub id: RunId,
    pub dataset1: String,
    pub dataset2: String,
    pub matching_method: Option<String>,
    pub num_cdes: u32,
    pub timestamp: DateTime<Utc>,
    pub data1: Vec<RowRecord>,
    pub data2: Vec<RowRecord>,
    pub merged: Vec<RowRecord>,
    pub common_columns: Vec<ColumnMatch>,
    pub status: RunStatus,
    pub duration: String,
    pub selected: Vec<String>,
    pub threshold: f64,
    pub result_summary: ResultSummary,
}

impl RunRecord {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        dataset1: String,
        dataset2: String,
        matching_method: Option<String>,
        num_cdes: u32,
        selected: Vec<String>,
        data1: Vec<RowRecord>,
        data2: Vec<RowRecord>,
        common_columns: Vec<ColumnMatch>,
        elapsed: Duration,
    ) -> Self {
        let merged = data1.clone();
        Self {
            id: RunId::new(),
            dataset1,
            dataset2,
            matching_method,
            num_cdes,
            timestamp: Utc::now(),
            data1,
            data2,
            merged,
            common_columns,
            status: RunStatus::Completed,
            duration: format_duration(elapsed),
            selected,
            threshold: DEFAULT_THRESHOLD,
            result_summary: ResultSummary::default(),
        }
    }
}

fn format_duration(elapsed: Duration) -> String {
    format!("{:.2} seconds", elapsed.as_secs_f64())
}
