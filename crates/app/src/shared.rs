//! Process-wide catcher.
//!
//! One `LogCatcher` lives for the whole process. The free functions here
//! delegate to it one-to-one; [`add_log!`](crate::add_log) records into it.
//! Tests sharing this instance must serialize themselves and reset between
//! cases.

use crate::LogCatcher;
use log_catcher_domain::LogEntry;
use std::fmt;

static SHARED: LogCatcher = LogCatcher::new();

/// The process-wide catcher.
#[must_use]
pub fn catcher() -> &'static LogCatcher {
    &SHARED
}

/// Drop every entry captured by the process-wide catcher.
pub fn reset() {
    SHARED.reset();
}

/// Capture one call into the process-wide catcher.
pub fn record(format: &str, args: fmt::Arguments<'_>) {
    SHARED.record(format, args);
}

/// Snapshot of the process-wide catcher's entries.
#[must_use]
pub fn logs() -> Vec<LogEntry> {
    SHARED.logs()
}

/// See [`LogCatcher::contains_log_with_format_string`].
#[must_use]
pub fn contains_log_with_format_string(format: &str) -> bool {
    SHARED.contains_log_with_format_string(format)
}

/// See [`LogCatcher::contains_log_with_full_string`].
#[must_use]
pub fn contains_log_with_full_string(full: &str) -> bool {
    SHARED.contains_log_with_full_string(full)
}

/// See [`LogCatcher::contains_log_with_format_string_matching`].
#[must_use]
pub fn contains_log_with_format_string_matching(pattern: &str) -> bool {
    SHARED.contains_log_with_format_string_matching(pattern)
}

/// See [`LogCatcher::contains_log_with_full_string_matching`].
#[must_use]
pub fn contains_log_with_full_string_matching(pattern: &str) -> bool {
    SHARED.contains_log_with_full_string_matching(pattern)
}

/// See [`LogCatcher::contains_log_with_format_and_full_string`].
#[must_use]
pub fn contains_log_with_format_and_full_string(format: &str, full: &str) -> bool {
    SHARED.contains_log_with_format_and_full_string(format, full)
}

/// See [`LogCatcher::contains_log_with_format_and_full_string_matching`].
#[must_use]
pub fn contains_log_with_format_and_full_string_matching(
    format_pattern: &str,
    full_pattern: &str,
) -> bool {
    SHARED.contains_log_with_format_and_full_string_matching(format_pattern, full_pattern)
}
