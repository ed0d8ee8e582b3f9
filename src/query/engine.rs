//! Query Engine - multi-file scan and current-month tail

use chrono::{Duration, NaiveDateTime};
use log::{debug, trace};

use super::filter::ScanFilter;
use crate::error::NotrResult;
use crate::store::{read_lines, read_raw_lines, LogStore};
use crate::types::Entry;

/// Default look-back window for scans without `since`
pub const DEFAULT_WINDOW_HOURS: i64 = 24;

/// Default number of lines returned by a tail
pub const DEFAULT_TAIL_COUNT: usize = 10;

/// Result of a tail over the current month's file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tail {
    /// The current month's file does not exist
    NoFile,
    /// The last lines of the file, oldest first
    Lines(Vec<String>),
}

/// Read-side queries over a [`LogStore`]
pub struct QueryEngine<'a> {
    store: &'a LogStore,
    /// `None` when the window is too large to represent: no lower bound
    window: Option<Duration>,
}

impl<'a> QueryEngine<'a> {
    /// Create an engine with the default 24 hour window
    pub fn new(store: &'a LogStore) -> Self {
        Self::with_window_hours(store, DEFAULT_WINDOW_HOURS)
    }

    /// Create an engine with a custom default window
    ///
    /// A window beyond what a `Duration` can hold means "everything".
    pub fn with_window_hours(store: &'a LogStore, hours: i64) -> Self {
        Self {
            store,
            window: Duration::try_hours(hours),
        }
    }

    /// The `since` bound used when a filter leaves it unset
    ///
    /// Saturates at `NaiveDateTime::MIN` instead of overflowing.
    pub fn default_since(&self) -> NaiveDateTime {
        self.window
            .and_then(|window| self.store.clock().now().checked_sub_signed(window))
            .unwrap_or(NaiveDateTime::MIN)
    }

    /// Scan every monthly file and collect the entries passing `filter`
    ///
    /// Files are visited oldest first and lines in file order, so the result
    /// is chronological for append-only data. Lines without a valid
    /// timestamp prefix, or that are not valid UTF-8, are skipped.
    pub fn scan(&self, filter: &ScanFilter) -> NotrResult<Vec<Entry>> {
        let since = filter.since.unwrap_or_else(|| self.default_since());
        let mut results = Vec::new();

        for path in self.store.log_files()? {
            let lines = read_raw_lines(&path)?.unwrap_or_default();
            for (line_num, bytes) in lines.iter().enumerate() {
                let Some(entry) = std::str::from_utf8(bytes).ok().and_then(Entry::decode) else {
                    trace!(
                        "event=skip_line file={} line={}",
                        path.display(),
                        line_num + 1
                    );
                    continue;
                };
                if filter.matches(&entry, since) {
                    trace!(
                        "event=match at={} tags={:?} edited={}",
                        entry.timestamp,
                        entry.tags(),
                        entry.is_edited()
                    );
                    results.push(entry);
                }
            }
        }

        debug!(
            "event=scan since={} search={:?} tag={:?} matches={}",
            since,
            filter.search,
            filter.tag,
            results.len()
        );
        Ok(results)
    }

    /// The last `n` lines of the current month's file
    ///
    /// Earlier months are not consulted even when the current file holds
    /// fewer than `n` lines.
    pub fn recent_tail(&self, n: usize) -> NotrResult<Tail> {
        let lines = match read_lines(&self.store.current_log_path())? {
            Some(lines) => lines,
            None => return Ok(Tail::NoFile),
        };

        let start = lines.len().saturating_sub(n);
        Ok(Tail::Lines(
            lines[start..].iter().map(|l| l.trim().to_string()).collect(),
        ))
    }
}
