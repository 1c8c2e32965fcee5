//! # log-catcher-testkit
//!
//! Test helpers: isolation for the process-wide catcher, query assertions
//! with readable failures, and an in-memory sink.
//! This crate depends on `app`, `adapters`, `ports`, and `domain`.

pub mod assertions;
pub mod in_memory;
pub mod isolation;

pub use assertions::{assert_logged, assert_not_logged, describe_logs};
pub use in_memory::MemorySink;
pub use isolation::{IsolatedCatcher, isolated_catcher};

/// Returns the testkit crate version.
#[must_use]
pub const fn testkit_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
