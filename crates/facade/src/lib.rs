//! # log-catcher
//!
//! Facade API for consumers.
//! This crate depends on `infra`, `app`, `adapters`, and `config`.
//!
//! Code that logs takes a [`SharedRecorder`] (or any [`LogRecorder`]) and
//! records through [`record_log!`]. Tests hand it a [`LogCatcher`] and query
//! what was captured; production wiring comes from [`build_recorder`].
//!
//! ```
//! use log_catcher::{LogCatcher, record_log};
//!
//! let catcher = LogCatcher::new();
//! record_log!(catcher, "Hello {}", "World");
//!
//! assert!(catcher.contains_log_with_format_string("Hello {}"));
//! assert!(catcher.contains_log_with_full_string("Hello World"));
//! assert!(catcher.contains_log_with_format_and_full_string_matching("Hello", "World"));
//! ```

pub use log_catcher_adapters::{
    JsonRecorder, LogSink, NoopRecorder, PlainRecorder, StderrLogSink, TeeRecorder,
    TracingRecorder, WriterLogSink,
};
pub use log_catcher_app::{LogCatcher, add_log, shared};
pub use log_catcher_config::{
    CatcherConfig, CatcherEnv, EchoMode, ValidatedCatcherConfig, load_catcher_config_from_path,
    load_catcher_config_std_env, parse_catcher_config_json, parse_catcher_config_toml,
};
pub use log_catcher_domain::{LogEntry, LogLevel, LogQuery, TextMatch};
pub use log_catcher_infra::{
    InfraError, build_recorder, build_recorder_std_env, build_recorder_with_sink,
    load_effective_config_json, validate_env_parsing,
};
pub use log_catcher_ports::{LogRecorder, SharedRecorder, record_log};
pub use log_catcher_shared::{ErrorCode, ErrorEnvelope};

/// Returns the facade crate version.
#[must_use]
pub const fn facade_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
