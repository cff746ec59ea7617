use std::path::PathBuf;
use thiserror::Error;

/// Failures while turning raw XML into a [`crate::Document`].
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Invalid attribute: {0}")]
    Attribute(#[from] quick_xml::events::attributes::AttrError),

    #[error("Element <{name}> is never closed")]
    Unclosed { name: String },

    #[error("Unexpected second top-level element <{name}>")]
    MultipleRoots { name: String },

    #[error("Document contains no root element")]
    Empty,
}

/// Errors that are fatal to a whole extraction pass.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error(transparent)]
    Document(#[from] DocumentError),

    #[error("Invalid root element: expected <{expected}>, found <{found}>")]
    InvalidRootElement {
        expected: &'static str,
        found: String,
    },
}

pub type ReportResult<T> = Result<T, ReportError>;

/// Errors scoped to a single test record. The extractor logs these and skips
/// the record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("Cannot find tag element")]
    NoTagsFound,

    #[error("Cannot find Qase ID in tags")]
    IdentifierNotFound,

    #[error("Invalid Qase ID in tag: {text}")]
    InvalidIdentifier { text: String },

    #[error("Cannot find status element")]
    MissingStatusNode,

    #[error("Cannot find status attribute")]
    MissingStatusAttribute,

    #[error("Cannot find starttime attribute")]
    MissingStartTime,

    #[error("Cannot find elapsed attribute")]
    MissingElapsed,

    #[error("Cannot find endtime attribute")]
    MissingEndTime,

    #[error("Cannot parse {attribute} value: {value:?}")]
    TimeParse {
        attribute: &'static str,
        value: String,
    },

    #[error("Negative duration: {duration_ms}ms")]
    NegativeDuration { duration_ms: i64 },
}

/// Coarse classification of [`RecordError`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Structural,
    Identifier,
    AttributeMissing,
    TimeParse,
    Duration,
}

impl RecordError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingStatusNode => ErrorKind::Structural,
            Self::NoTagsFound | Self::IdentifierNotFound | Self::InvalidIdentifier { .. } => {
                ErrorKind::Identifier
            }
            Self::MissingStatusAttribute
            | Self::MissingStartTime
            | Self::MissingElapsed
            | Self::MissingEndTime => ErrorKind::AttributeMissing,
            Self::TimeParse { .. } => ErrorKind::TimeParse,
            Self::NegativeDuration { .. } => ErrorKind::Duration,
        }
    }
}

pub type RecordResult<T> = Result<T, RecordError>;
