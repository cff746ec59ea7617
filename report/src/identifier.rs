//! Qase case ID lookup in a test's `<tag>` children.

use crate::document::Element;
use crate::error::{RecordError, RecordResult};
use regex::Regex;
use std::sync::OnceLock;

pub const TAG_ELEMENT: &str = "tag";

fn case_id_re() -> &'static Regex {
    static CASE_ID_RE: OnceLock<Regex> = OnceLock::new();
    CASE_ID_RE.get_or_init(|| Regex::new(r"Q-([0-9]+)").expect("valid case id regex"))
}

/// Extracts the numeric part of the first tag matching `Q-<digits>`, where
/// digits are ASCII `0-9` only.
///
/// Tags are checked in document order and the first match wins, even if its
/// number turns out to be unusable (zero or wider than `i64`).
pub fn resolve_case_id(test: &Element) -> RecordResult<i64> {
    let mut tags = test.children_named(TAG_ELEMENT).peekable();
    if tags.peek().is_none() {
        return Err(RecordError::NoTagsFound);
    }

    for tag in tags {
        if let Some(captures) = case_id_re().captures(tag.text()) {
            return match captures[1].parse::<i64>() {
                Ok(id) if id > 0 => Ok(id),
                _ => Err(RecordError::InvalidIdentifier {
                    text: tag.text().trim().to_string(),
                }),
            };
        }
    }

    Err(RecordError::IdentifierNotFound)
}
