//! Capturing recorder.
//!
//! `LogCatcher` appends every recorded call to an ordered list guarded by a
//! mutex and answers "was a log matching X emitted" by scanning that list.
//! Queries never fail: no match is `false`. A poisoned lock is recovered
//! rather than propagated.

use log_catcher_domain::{LogEntry, LogQuery, TextMatch};
use log_catcher_ports::LogRecorder;
use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// In-memory, append-only-until-reset log capture.
#[derive(Debug, Default)]
pub struct LogCatcher {
    entries: Mutex<Vec<LogEntry>>,
}

impl LogCatcher {
    /// Create an empty catcher.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
        }
    }

    fn entries(&self) -> MutexGuard<'_, Vec<LogEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Drop every captured entry. The catcher stays usable.
    pub fn reset(&self) {
        self.entries().clear();
    }

    /// Capture one call. Interpolation happens before the lock is taken.
    pub fn record(&self, format: &str, args: fmt::Arguments<'_>) {
        self.add_entry(LogEntry::interpolate(format, args));
    }

    /// Append a pre-built entry.
    pub fn add_entry(&self, entry: LogEntry) {
        self.entries().push(entry);
    }

    /// Snapshot of captured entries in insertion order.
    ///
    /// The snapshot is an owned copy; a later `reset` does not empty it.
    #[must_use]
    pub fn logs(&self) -> Vec<LogEntry> {
        self.entries().clone()
    }

    /// Number of captured entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries().len()
    }

    /// True when nothing has been captured since creation or the last reset.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    /// True when some entry satisfies `query`.
    #[must_use]
    pub fn contains(&self, query: &LogQuery) -> bool {
        self.entries().iter().any(|entry| query.matches(entry))
    }

    /// Every entry satisfying `query`, in insertion order.
    #[must_use]
    pub fn matching(&self, query: &LogQuery) -> Vec<LogEntry> {
        self.entries()
            .iter()
            .filter(|entry| query.matches(entry))
            .cloned()
            .collect()
    }

    /// Some entry's format string equals `format`.
    #[must_use]
    pub fn contains_log_with_format_string(&self, format: &str) -> bool {
        self.contains(&LogQuery::format_exact(format))
    }

    /// Some entry's full string equals `full`.
    #[must_use]
    pub fn contains_log_with_full_string(&self, full: &str) -> bool {
        self.contains(&LogQuery::full_exact(full))
    }

    /// Some entry's format string contains `pattern`.
    #[must_use]
    pub fn contains_log_with_format_string_matching(&self, pattern: &str) -> bool {
        self.contains(&LogQuery::format_contains(pattern))
    }

    /// Some entry's full string contains `pattern`.
    #[must_use]
    pub fn contains_log_with_full_string_matching(&self, pattern: &str) -> bool {
        self.contains(&LogQuery::full_contains(pattern))
    }

    /// One entry has exactly this format string and exactly this full string.
    #[must_use]
    pub fn contains_log_with_format_and_full_string(&self, format: &str, full: &str) -> bool {
        self.contains(&LogQuery::format_exact(format).with_full(TextMatch::exact(full)))
    }

    /// One entry's format contains `format_pattern` and its full string
    /// contains `full_pattern`.
    #[must_use]
    pub fn contains_log_with_format_and_full_string_matching(
        &self,
        format_pattern: &str,
        full_pattern: &str,
    ) -> bool {
        self.contains(
            &LogQuery::format_contains(format_pattern).with_full(TextMatch::contains(full_pattern)),
        )
    }
}

impl LogRecorder for LogCatcher {
    fn record(&self, format: &str, args: fmt::Arguments<'_>) {
        Self::record(self, format, args);
    }
}
