//! # log-catcher-domain
//!
//! Value types for captured logs:
//!
//! - **Entry** - `LogEntry`, one recorded (format string, full string) pair
//! - **Level** - `LogLevel`, severity used when echoing captured calls
//! - **Query** - `TextMatch`, `LogQuery`, the per-entry predicates queries scan with
//!
//! ## Dependency Rules
//!
//! - Depends only on `shared` crate
//! - No infrastructure or adapter dependencies
//! - Pure domain logic with no I/O

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub use log_catcher_shared::shared_crate_version;

pub mod entry;
pub mod level;
pub mod query;

pub use entry::LogEntry;
pub use level::LogLevel;
pub use query::{LogQuery, TextMatch};

/// Returns the domain crate version.
#[must_use]
pub const fn domain_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
