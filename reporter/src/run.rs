use crate::error::ReporterResult;
use crate::settings::Settings;
use qase::{submit_run, QaseClient, ResultSubmitter, RunSummary};
use report::NormalizedTestResult;
use std::io::Write;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Results were printed, nothing was sent.
    DryRun { results: usize },
    /// The report held no usable results, so no run was created.
    Empty,
    Submitted(RunSummary),
}

/// Parses the report named in `settings` and reports it to Qase.
pub async fn run(settings: &Settings) -> ReporterResult<RunOutcome> {
    let shown = std::fs::canonicalize(&settings.filename)
        .unwrap_or_else(|_| settings.filename.clone());
    info!("Reading file: {}", shown.display());

    let results = report::parse_file(&settings.filename)?;

    if settings.dry_run {
        let stdout = std::io::stdout();
        write_results(&results, stdout.lock())?;
        return Ok(RunOutcome::DryRun {
            results: results.len(),
        });
    }

    let client = QaseClient::new(settings.qase.clone())?;
    report_results(&client, &settings.run_title, &results).await
}

pub async fn report_results(
    submitter: &dyn ResultSubmitter,
    title: &str,
    results: &[NormalizedTestResult],
) -> ReporterResult<RunOutcome> {
    if results.is_empty() {
        warn!("No test results with a Qase ID found, not creating a test run");
        return Ok(RunOutcome::Empty);
    }

    let summary = submit_run(submitter, title, results).await?;
    info!(
        "Reported {} results for {} cases in run {}",
        summary.results, summary.cases, summary.run_id
    );
    Ok(RunOutcome::Submitted(summary))
}

pub fn write_results(
    results: &[NormalizedTestResult],
    mut writer: impl Write,
) -> ReporterResult<()> {
    serde_json::to_writer_pretty(&mut writer, results)?;
    writeln!(writer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use qase::{QaseResult, ResultCreateBulk, RunCreate};
    use report::TestStatus;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct CountingSubmitter {
        calls: AtomicUsize,
    }

    #[async_trait::async_trait]
    impl ResultSubmitter for CountingSubmitter {
        async fn create_run(&self, _run: RunCreate) -> QaseResult<i64> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(1)
        }

        async fn create_results_bulk(&self, _run_id: i64, _bulk: ResultCreateBulk) -> QaseResult<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        async fn complete_run(&self, _run_id: i64) -> QaseResult<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    fn sample() -> NormalizedTestResult {
        serde_json::from_value(serde_json::json!({
            "case_id": 4,
            "name": "Login",
            "status": "passed",
            "start_time": "2024-01-01T10:00:00Z",
            "duration_ms": 120,
            "package": "Auth"
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_empty_results_skip_submission() {
        let submitter = CountingSubmitter::default();
        let outcome = report_results(&submitter, "Nightly", &[]).await.unwrap();
        assert_eq!(outcome, RunOutcome::Empty);
        assert_eq!(submitter.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_results_are_submitted() {
        let submitter = CountingSubmitter::default();
        let outcome = report_results(&submitter, "Nightly", &[sample()])
            .await
            .unwrap();
        assert!(matches!(outcome, RunOutcome::Submitted(RunSummary { run_id: 1, .. })));
        assert_eq!(submitter.calls.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_write_results_as_json() {
        let mut out = Vec::new();
        write_results(&[sample()], &mut out).unwrap();

        let written: Vec<NormalizedTestResult> = serde_json::from_slice(&out).unwrap();
        assert_eq!(written, vec![sample()]);
        assert_eq!(written[0].status, TestStatus::Passed);
        assert!(out.ends_with(b"\n"));
    }
}
