pub mod document;
pub mod error;
pub mod extract;
pub mod identifier;
pub mod result;
pub mod timing;

pub use document::{Document, Element};
pub use error::{
    DocumentError, ErrorKind, RecordError, RecordResult, ReportError, ReportResult,
};
pub use extract::{extract_results, normalize_test};
pub use identifier::resolve_case_id;
pub use result::{distinct_case_ids, NormalizedTestResult};
pub use timing::{normalize_status, Outcome, SchemaVersion, TestStatus};

/// Loads `path` and extracts its test results in one step.
pub fn parse_file(path: impl AsRef<std::path::Path>) -> ReportResult<Vec<NormalizedTestResult>> {
    let document = Document::from_file(path)?;
    extract_results(&document)
}

pub mod prelude {
    pub use crate::document::*;
    pub use crate::error::*;
    pub use crate::extract::*;
    pub use crate::result::*;
    pub use crate::timing::*;
}
