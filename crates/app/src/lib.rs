//! # log-catcher-app
//!
//! The capturing recorder and its queries.
//! This crate depends on `ports`, `domain`, and `shared`.
//!
//! Prefer constructing a [`LogCatcher`] per test and passing it to the code
//! under test as its [`LogRecorder`]. The process-wide catcher in [`shared`]
//! mirrors the same operations for call sites that cannot take a recorder.
//!
//! [`LogRecorder`]: log_catcher_ports::LogRecorder

pub mod catcher;
pub mod shared;

pub use catcher::LogCatcher;

/// Returns the app crate version.
#[must_use]
pub const fn app_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Record a logging call into the process-wide catcher.
///
/// ```
/// log_catcher_app::add_log!("Hello {}", "World");
/// assert!(log_catcher_app::shared::contains_log_with_full_string("Hello World"));
/// ```
#[macro_export]
macro_rules! add_log {
    ($format:literal $(,)?) => {
        $crate::shared::record($format, ::core::format_args!($format))
    };
    ($format:literal, $($arg:tt)+) => {
        $crate::shared::record($format, ::core::format_args!($format, $($arg)+))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use log_catcher_domain::domain_crate_version;
    use log_catcher_ports::ports_crate_version;
    use log_catcher_shared::shared_crate_version;

    #[test]
    fn app_crate_compiles() {
        let version = app_crate_version();
        assert!(!version.is_empty());
    }

    #[test]
    fn app_can_use_ports_domain_and_shared() {
        assert!(!domain_crate_version().is_empty());
        assert!(!ports_crate_version().is_empty());
        assert!(!shared_crate_version().is_empty());
    }
}
