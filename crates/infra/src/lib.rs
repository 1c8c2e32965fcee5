//! # log-catcher-infra
//!
//! Composition root: turns a validated config into a ready recorder.
//! This crate depends on `app`, `adapters`, `config`, and `shared`.

/// Config loading helpers.
pub mod config_check;
/// Environment validation helpers.
pub mod env_check;
/// Recorder selection helpers.
mod recorder_factory;

pub use config_check::load_effective_config_json;
pub use env_check::{InfraError, InfraResult, validate_env_parsing};
pub use recorder_factory::{build_recorder, build_recorder_std_env, build_recorder_with_sink};

/// Returns the infra crate version.
#[must_use]
pub const fn infra_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
