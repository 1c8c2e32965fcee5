//! Per-entry match predicates.
//!
//! Every catcher query is a linear scan testing one `LogQuery` against each
//! entry. A query holds at most one predicate per field; all present
//! predicates must hold on the same entry.

use crate::LogEntry;
use serde::{Deserialize, Serialize};

/// Predicate over a single string field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum TextMatch {
    /// Field equals the value exactly.
    Exact(Box<str>),
    /// Field contains the value as a literal, case-sensitive substring.
    ///
    /// An empty needle never matches.
    Contains(Box<str>),
}

impl TextMatch {
    /// Exact equality predicate.
    pub fn exact(value: impl Into<Box<str>>) -> Self {
        Self::Exact(value.into())
    }

    /// Substring predicate.
    pub fn contains(value: impl Into<Box<str>>) -> Self {
        Self::Contains(value.into())
    }

    /// Test the predicate against `haystack`.
    #[must_use]
    pub fn is_match(&self, haystack: &str) -> bool {
        match self {
            Self::Exact(value) => haystack == &**value,
            Self::Contains(needle) => !needle.is_empty() && haystack.contains(&**needle),
        }
    }
}

/// Conjunction of optional predicates on an entry's format and full strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogQuery {
    /// Predicate on the format string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<TextMatch>,
    /// Predicate on the full string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full: Option<TextMatch>,
}

impl LogQuery {
    /// A query matching every entry.
    #[must_use]
    pub const fn any() -> Self {
        Self {
            format: None,
            full: None,
        }
    }

    /// Exact format string.
    pub fn format_exact(format: impl Into<Box<str>>) -> Self {
        Self::any().with_format(TextMatch::exact(format))
    }

    /// Exact full string.
    pub fn full_exact(full: impl Into<Box<str>>) -> Self {
        Self::any().with_full(TextMatch::exact(full))
    }

    /// Format string containing `pattern`.
    pub fn format_contains(pattern: impl Into<Box<str>>) -> Self {
        Self::any().with_format(TextMatch::contains(pattern))
    }

    /// Full string containing `pattern`.
    pub fn full_contains(pattern: impl Into<Box<str>>) -> Self {
        Self::any().with_full(TextMatch::contains(pattern))
    }

    /// Replace the format predicate.
    #[must_use]
    pub fn with_format(mut self, predicate: TextMatch) -> Self {
        self.format = Some(predicate);
        self
    }

    /// Replace the full-string predicate.
    #[must_use]
    pub fn with_full(mut self, predicate: TextMatch) -> Self {
        self.full = Some(predicate);
        self
    }

    /// True when every present predicate holds on `entry`.
    #[must_use]
    pub fn matches(&self, entry: &LogEntry) -> bool {
        self.format
            .as_ref()
            .is_none_or(|predicate| predicate.is_match(entry.format()))
            && self
                .full
                .as_ref()
                .is_none_or(|predicate| predicate.is_match(entry.full()))
    }
}
