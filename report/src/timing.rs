//! Status and timing decoding for a test's `<status>` element.
//!
//! Robot Framework 7 writes `start` (ISO-8601) and `elapsed` (seconds).
//! Older releases write `starttime` and `endtime` in a compact format. The
//! schema is sniffed once per element from the `start` attribute and then
//! drives how the duration is computed.

use crate::document::Element;
use crate::error::{RecordError, RecordResult};
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

pub const STATUS_ELEMENT: &str = "status";

/// `starttime` / `endtime`, e.g. `20240101 10:00:02.250`.
pub const LEGACY_TIME_FORMAT: &str = "%Y%m%d %H:%M:%S%.f";

/// `start`, e.g. `2024-01-01T10:00:00.123456`.
pub const CURRENT_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestStatus {
    Passed,
    Failed,
}

impl TestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Passed => "passed",
            Self::Failed => "failed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaVersion {
    /// `starttime` + `endtime`
    Legacy,
    /// `start` + `elapsed`
    Current,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub status: TestStatus,
    pub start_time: DateTime<Utc>,
    pub duration_ms: u64,
}

/// `PASS` is the only passing value; any other non-empty status fails.
pub fn decode_status(status: &Element) -> RecordResult<TestStatus> {
    match status.attr("status") {
        "" => Err(RecordError::MissingStatusAttribute),
        "PASS" => Ok(TestStatus::Passed),
        _ => Ok(TestStatus::Failed),
    }
}

pub fn decode_start_time(status: &Element) -> RecordResult<(SchemaVersion, DateTime<Utc>)> {
    let start = status.attr("start");
    if !start.is_empty() {
        let start_time = parse_timestamp("start", start, CURRENT_TIME_FORMAT)?;
        return Ok((SchemaVersion::Current, start_time));
    }

    let start = status.attr("starttime");
    if start.is_empty() {
        return Err(RecordError::MissingStartTime);
    }
    let start_time = parse_timestamp("starttime", start, LEGACY_TIME_FORMAT)?;
    Ok((SchemaVersion::Legacy, start_time))
}

/// Raw duration in milliseconds. A legacy `endtime` earlier than its
/// `starttime` yields a negative value here; [`normalize_status`] rejects it.
pub fn decode_duration_ms(
    status: &Element,
    version: SchemaVersion,
    start_time: DateTime<Utc>,
) -> RecordResult<i64> {
    match version {
        SchemaVersion::Current => {
            let elapsed = status.attr("elapsed");
            if elapsed.is_empty() {
                return Err(RecordError::MissingElapsed);
            }
            let seconds = elapsed
                .parse::<f64>()
                .ok()
                .filter(|seconds| seconds.is_finite())
                .ok_or_else(|| RecordError::TimeParse {
                    attribute: "elapsed",
                    value: elapsed.to_string(),
                })?;
            Ok((seconds * 1000.0) as i64)
        }
        SchemaVersion::Legacy => {
            let end = status.attr("endtime");
            if end.is_empty() {
                return Err(RecordError::MissingEndTime);
            }
            let end_time = parse_timestamp("endtime", end, LEGACY_TIME_FORMAT)?;
            Ok((end_time - start_time).num_milliseconds())
        }
    }
}

pub fn normalize_status(status: &Element) -> RecordResult<Outcome> {
    let test_status = decode_status(status)?;
    let (version, start_time) = decode_start_time(status)?;
    let duration_ms = decode_duration_ms(status, version, start_time)?;
    let duration_ms = u64::try_from(duration_ms)
        .map_err(|_| RecordError::NegativeDuration { duration_ms })?;

    Ok(Outcome {
        status: test_status,
        start_time,
        duration_ms,
    })
}

fn parse_timestamp(
    attribute: &'static str,
    value: &str,
    format: &str,
) -> RecordResult<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(value, format)
        .map(|naive| naive.and_utc())
        .map_err(|_| RecordError::TimeParse {
            attribute,
            value: value.to_string(),
        })
}
