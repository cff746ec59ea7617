use crate::types::{ResultCreate, ResultCreateBulk, RunCreate, RunSummary};
use async_trait::async_trait;
use report::{distinct_case_ids, NormalizedTestResult};
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum QaseError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Qase API returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Qase rejected {operation}: status false")]
    Rejected { operation: &'static str },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

pub type QaseResult<T> = Result<T, QaseError>;

/// The remote side of a run: open it, attach results, close it.
#[async_trait]
pub trait ResultSubmitter: Send + Sync {
    async fn create_run(&self, run: RunCreate) -> QaseResult<i64>;

    async fn create_results_bulk(&self, run_id: i64, bulk: ResultCreateBulk) -> QaseResult<()>;

    async fn complete_run(&self, run_id: i64) -> QaseResult<()>;
}

/// Reports `results` as a new run titled `title`.
///
/// The run is scoped to the distinct case IDs, every result goes out in a
/// single bulk request, and the run is completed afterwards. The first
/// failing step aborts the rest.
pub async fn submit_run(
    submitter: &dyn ResultSubmitter,
    title: &str,
    results: &[NormalizedTestResult],
) -> QaseResult<RunSummary> {
    let cases = distinct_case_ids(results);
    let case_count = cases.len();

    info!("Creating test run");
    let run_id = submitter
        .create_run(RunCreate {
            title: title.to_string(),
            cases,
        })
        .await?;
    info!("Created test run ID: {}", run_id);

    info!("Creating test run results for run ID: {}", run_id);
    let bulk = ResultCreateBulk {
        results: results.iter().map(ResultCreate::from).collect(),
    };
    let result_count = bulk.results.len();
    submitter.create_results_bulk(run_id, bulk).await?;

    info!("Completing test run ID: {}", run_id);
    submitter.complete_run(run_id).await?;
    info!("Completed test run ID: {}", run_id);

    Ok(RunSummary {
        run_id,
        cases: case_count,
        results: result_count,
    })
}
