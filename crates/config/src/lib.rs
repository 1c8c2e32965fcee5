//! # log-catcher-config
//!
//! Configuration schema, validation, and loading for recorder wiring.
//! This crate depends on `domain` and `shared` only.

/// Environment variable parsing and merging.
pub mod env;
/// Config loading helpers (env + file).
pub mod load;
/// Configuration schema types and helpers.
pub mod schema;

pub use env::{
    CatcherEnv, ENV_CAPTURE_ENABLED, ENV_ECHO_EVENT, ENV_ECHO_LEVEL, ENV_ECHO_MODE, EnvParseError,
    apply_env_overrides,
};
pub use load::{
    load_catcher_config_from_path, load_catcher_config_from_sources, load_catcher_config_std_env,
    to_pretty_json, to_pretty_toml,
};
pub use schema::{
    CURRENT_CONFIG_VERSION, CaptureConfig, CatcherConfig, ConfigSchemaError, DEFAULT_ECHO_EVENT,
    EchoConfig, EchoMode, ValidatedCatcherConfig, parse_catcher_config_json,
    parse_catcher_config_toml,
};

/// Returns the config crate version.
#[must_use]
pub const fn config_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
