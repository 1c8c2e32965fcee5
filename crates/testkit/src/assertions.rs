//! Query assertions with captured-log diagnostics.

use log_catcher_app::LogCatcher;
use log_catcher_domain::LogQuery;
use std::fmt::Write;

/// Render every captured entry, one per line, for failure messages.
pub fn describe_logs(catcher: &LogCatcher) -> String {
    let logs = catcher.logs();
    if logs.is_empty() {
        return "  (no logs captured)\n".to_string();
    }
    let mut out = String::new();
    for (index, entry) in logs.iter().enumerate() {
        let _ = writeln!(out, "  [{index}] {entry}");
    }
    out
}

/// Panic unless some captured entry satisfies `query`.
#[track_caller]
pub fn assert_logged(catcher: &LogCatcher, query: &LogQuery) {
    if !catcher.contains(query) {
        panic!(
            "expected a log matching {query:?}\ncaptured:\n{}",
            describe_logs(catcher)
        );
    }
}

/// Panic if any captured entry satisfies `query`.
#[track_caller]
pub fn assert_not_logged(catcher: &LogCatcher, query: &LogQuery) {
    let hits = catcher.matching(query);
    if !hits.is_empty() {
        panic!(
            "expected no log matching {query:?}, found {}\ncaptured:\n{}",
            hits.len(),
            describe_logs(catcher)
        );
    }
}
