//! Walks a Robot Framework `output.xml` tree and collects normalized results.

use crate::document::{Document, Element};
use crate::error::{RecordError, RecordResult, ReportError, ReportResult};
use crate::identifier::resolve_case_id;
use crate::result::NormalizedTestResult;
use crate::timing::{normalize_status, STATUS_ELEMENT};
use tracing::{debug, info, warn};

pub const ROOT_ELEMENT: &str = "robot";
pub const SUITE_ELEMENT: &str = "suite";
pub const TEST_ELEMENT: &str = "test";

/// Normalizes a single `<test>` element.
///
/// The case ID is resolved first; without one the status is never looked at.
pub fn normalize_test(
    test: &Element,
    package: Option<String>,
) -> RecordResult<NormalizedTestResult> {
    let case_id = resolve_case_id(test)?;
    let status = test
        .child(STATUS_ELEMENT)
        .ok_or(RecordError::MissingStatusNode)?;
    let outcome = normalize_status(status)?;

    Ok(NormalizedTestResult {
        case_id,
        name: test.attr("name").to_string(),
        status: outcome.status,
        start_time: outcome.start_time,
        duration_ms: outcome.duration_ms,
        package,
    })
}

/// Extracts every usable `<test>` in document order.
///
/// Only a wrong root element is fatal. Records that fail to normalize are
/// logged and skipped.
pub fn extract_results(document: &Document) -> ReportResult<Vec<NormalizedTestResult>> {
    let root = document.root();
    if root.name() != ROOT_ELEMENT {
        return Err(ReportError::InvalidRootElement {
            expected: ROOT_ELEMENT,
            found: root.name().to_string(),
        });
    }

    let mut session = ExtractSession::default();
    session.visit(root);
    Ok(session.finish())
}

#[derive(Default)]
struct ExtractSession<'a> {
    suites: Vec<&'a str>,
    results: Vec<NormalizedTestResult>,
    seen: usize,
    skipped: usize,
}

impl<'a> ExtractSession<'a> {
    fn visit(&mut self, element: &'a Element) {
        for child in element.children() {
            match child.name() {
                TEST_ELEMENT => self.record(child),
                SUITE_ELEMENT => {
                    let name = child.attr("name");
                    let named = !name.is_empty();
                    if named {
                        self.suites.push(name);
                    }
                    self.visit(child);
                    if named {
                        self.suites.pop();
                    }
                    continue;
                }
                _ => {}
            }
            self.visit(child);
        }
    }

    fn record(&mut self, test: &Element) {
        self.seen += 1;
        let package = (!self.suites.is_empty()).then(|| self.suites.join("."));

        match normalize_test(test, package) {
            Ok(result) => {
                debug!(
                    "Test case ID: {}, Status: {}, Time: {}, TimeMs: {}",
                    result.case_id,
                    result.status.as_str(),
                    result.start_time,
                    result.duration_ms
                );
                self.results.push(result);
            }
            Err(e) => {
                self.skipped += 1;
                warn!(
                    "Skipping test #{} ({:?}): {:?} error: {}",
                    self.seen,
                    test.attr("name"),
                    e.kind(),
                    e
                );
            }
        }
    }

    fn finish(self) -> Vec<NormalizedTestResult> {
        info!(
            "Parsed {} of {} test records ({} skipped)",
            self.results.len(),
            self.seen,
            self.skipped
        );
        self.results
    }
}
