use crate::timing::TestStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One test record, resolved and normalized across schema versions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedTestResult {
    /// Qase case ID taken from the `Q-<digits>` tag.
    pub case_id: i64,
    pub name: String,
    pub status: TestStatus,
    pub start_time: DateTime<Utc>,
    pub duration_ms: u64,
    /// Dotted names of the enclosing suites, if any.
    pub package: Option<String>,
}

impl NormalizedTestResult {
    pub fn passed(&self) -> bool {
        self.status == TestStatus::Passed
    }
}

/// Distinct case IDs in first-occurrence order.
pub fn distinct_case_ids(results: &[NormalizedTestResult]) -> Vec<i64> {
    let mut ids: Vec<i64> = Vec::with_capacity(results.len());
    for result in results {
        if !ids.contains(&result.case_id) {
            ids.push(result.case_id);
        }
    }
    ids
}
