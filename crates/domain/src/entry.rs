//! Captured log entry.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One recorded logging call.
///
/// `format` is the template as written at the call site, placeholders intact.
/// `full` is the text the call would have printed. Both are fixed at capture.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    format: Box<str>,
    full: Box<str>,
}

impl LogEntry {
    /// Build an entry from an already-interpolated string.
    pub fn new(format: impl Into<Box<str>>, full: impl Into<Box<str>>) -> Self {
        Self {
            format: format.into(),
            full: full.into(),
        }
    }

    /// Build an entry by interpolating `args`.
    ///
    /// Callers pass the `format_args!` expansion of the same literal as
    /// `format`, so `full` matches what a real logging call would print.
    #[must_use]
    pub fn interpolate(format: &str, args: fmt::Arguments<'_>) -> Self {
        let full = args
            .as_str()
            .map_or_else(|| fmt::format(args), str::to_owned);
        Self::new(format, full)
    }

    /// The format string with placeholders intact.
    #[must_use]
    pub fn format(&self) -> &str {
        &self.format
    }

    /// The fully-interpolated string.
    #[must_use]
    pub fn full(&self) -> &str {
        &self.full
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{:?} => {:?}", self.format, self.full)
    }
}
