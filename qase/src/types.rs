use report::{NormalizedTestResult, TestStatus};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultStatus {
    Passed,
    Failed,
}

impl From<TestStatus> for ResultStatus {
    fn from(status: TestStatus) -> Self {
        match status {
            TestStatus::Passed => Self::Passed,
            TestStatus::Failed => Self::Failed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunCreate {
    pub title: String,
    pub cases: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultCreate {
    pub case_id: i64,
    pub status: ResultStatus,
    pub time_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl From<&NormalizedTestResult> for ResultCreate {
    fn from(result: &NormalizedTestResult) -> Self {
        let comment = result
            .package
            .as_deref()
            .filter(|package| !package.is_empty())
            .map(|package| format!("Package: {}", package));

        Self {
            case_id: result.case_id,
            status: result.status.into(),
            time_ms: result.duration_ms,
            comment,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultCreateBulk {
    pub results: Vec<ResultCreate>,
}

/// Envelope shared by every Qase v1 response.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    pub status: bool,
    pub result: Option<T>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IdResult {
    pub id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub run_id: i64,
    pub cases: usize,
    pub results: usize,
}
