//! Scan filters

use chrono::{NaiveDate, NaiveDateTime};

use crate::error::{NotrError, NotrResult};
use crate::types::{Entry, DATE_INPUT_FORMAT};

/// Filters applied by [`super::QueryEngine::scan`]
///
/// All set filters must pass. `since` falls back to the engine's default
/// window when unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanFilter {
    /// Keep entries with `timestamp >= since`
    pub since: Option<NaiveDateTime>,
    /// Case-insensitive substring over the whole line
    pub search: Option<String>,
    /// Literal `#<tag>` somewhere in the line
    pub tag: Option<String>,
}

impl ScanFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn since(mut self, since: NaiveDateTime) -> Self {
        self.since = Some(since);
        self
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Apply the filters in order: time window, search term, tag
    pub(crate) fn matches(&self, entry: &Entry, since: NaiveDateTime) -> bool {
        if entry.timestamp < since {
            return false;
        }
        if let Some(term) = self.search.as_deref().filter(|t| !t.is_empty()) {
            if !entry.contains_ignore_case(term) {
                return false;
            }
        }
        if let Some(tag) = self.tag.as_deref().filter(|t| !t.is_empty()) {
            if !entry.has_tag(tag) {
                return false;
            }
        }
        true
    }
}

/// Parse a `--since` argument (`YYYY-MM-DD`) as local midnight
pub fn parse_since(input: &str) -> NotrResult<NaiveDateTime> {
    NaiveDate::parse_from_str(input, DATE_INPUT_FORMAT)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or_else(|| NotrError::InvalidDate(input.to_string()))
}
