//! Environment variable parsing and env-to-config merging.
//!
//! Env parsing is strict: a variable that is present but empty or
//! unparseable fails fast instead of being ignored.

use crate::schema::{CatcherConfig, EchoMode, ValidatedCatcherConfig};
use log_catcher_domain::LogLevel;
use log_catcher_shared::{ErrorCode, ErrorEnvelope};
use std::collections::BTreeMap;

/// Env var: capture calls into the catcher.
pub const ENV_CAPTURE_ENABLED: &str = "LOG_CATCHER_CAPTURE_ENABLED";
/// Env var: echo destination (`none`, `stderr`, `json`, `tracing`).
pub const ENV_ECHO_MODE: &str = "LOG_CATCHER_ECHO_MODE";
/// Env var: echo severity.
pub const ENV_ECHO_LEVEL: &str = "LOG_CATCHER_ECHO_LEVEL";
/// Env var: event name for the JSON echo.
pub const ENV_ECHO_EVENT: &str = "LOG_CATCHER_ECHO_EVENT";

const ALL_ENV_VARS: [&str; 4] = [
    ENV_CAPTURE_ENABLED,
    ENV_ECHO_MODE,
    ENV_ECHO_LEVEL,
    ENV_ECHO_EVENT,
];

/// Parsed env overrides. `None` leaves the config value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatcherEnv {
    /// Override for `capture.enabled`.
    pub capture_enabled: Option<bool>,
    /// Override for `echo.mode`.
    pub echo_mode: Option<EchoMode>,
    /// Override for `echo.level`.
    pub echo_level: Option<LogLevel>,
    /// Override for `echo.event`.
    pub echo_event: Option<Box<str>>,
}

impl CatcherEnv {
    /// Parse env overrides from a key/value map (useful for tests and fixtures).
    pub fn from_map(map: &BTreeMap<String, String>) -> Result<Self, EnvParseError> {
        Ok(Self {
            capture_enabled: parse_optional_bool(map, ENV_CAPTURE_ENABLED)?,
            echo_mode: parse_optional_enum(map, ENV_ECHO_MODE, EchoMode::parse)?,
            echo_level: parse_optional_enum(map, ENV_ECHO_LEVEL, LogLevel::parse)?,
            echo_event: parse_optional_trimmed_string(map, ENV_ECHO_EVENT)?,
        })
    }

    /// Parse env overrides from the process environment.
    pub fn from_std_env() -> Result<Self, EnvParseError> {
        let mut map = BTreeMap::new();
        for name in ALL_ENV_VARS {
            if let Some(value) = std::env::var_os(name) {
                map.insert(name.to_owned(), value.to_string_lossy().into_owned());
            }
        }
        Self::from_map(&map)
    }

    /// True when no override is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.capture_enabled.is_none()
            && self.echo_mode.is_none()
            && self.echo_level.is_none()
            && self.echo_event.is_none()
    }
}

/// Apply env overrides on top of `config`, then validate and normalize.
pub fn apply_env_overrides(
    mut config: CatcherConfig,
    env: &CatcherEnv,
) -> Result<ValidatedCatcherConfig, ErrorEnvelope> {
    if let Some(enabled) = env.capture_enabled {
        config.capture.enabled = enabled;
    }
    if let Some(mode) = env.echo_mode {
        config.echo.mode = mode;
    }
    if let Some(level) = env.echo_level {
        config.echo.level = level;
    }
    if let Some(event) = &env.echo_event {
        config.echo.event = event.clone();
    }

    config.validate_and_normalize().map_err(ErrorEnvelope::from)
}

fn parse_optional_trimmed_string(
    map: &BTreeMap<String, String>,
    var: &'static str,
) -> Result<Option<Box<str>>, EnvParseError> {
    let Some(raw) = map.get(var) else {
        return Ok(None);
    };

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(EnvParseError::EmptyValue { var });
    }

    Ok(Some(trimmed.to_owned().into_boxed_str()))
}

fn parse_optional_bool(
    map: &BTreeMap<String, String>,
    var: &'static str,
) -> Result<Option<bool>, EnvParseError> {
    let Some(raw) = map.get(var) else {
        return Ok(None);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(EnvParseError::EmptyValue { var });
    }

    match trimmed.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(Some(true)),
        "false" | "0" | "no" | "off" => Ok(Some(false)),
        _ => Err(EnvParseError::InvalidBool {
            var,
            value: raw.clone(),
        }),
    }
}

fn parse_optional_enum<T>(
    map: &BTreeMap<String, String>,
    var: &'static str,
    parse: fn(&str) -> Option<T>,
) -> Result<Option<T>, EnvParseError> {
    let Some(raw) = map.get(var) else {
        return Ok(None);
    };
    if raw.trim().is_empty() {
        return Err(EnvParseError::EmptyValue { var });
    }

    parse(raw).map(Some).ok_or_else(|| EnvParseError::InvalidEnum {
        var,
        value: raw.clone(),
    })
}

/// Validation failures when parsing env variables.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnvParseError {
    /// An env var was present but empty after trimming.
    #[error("{var} must be non-empty")]
    EmptyValue {
        /// Env var name.
        var: &'static str,
    },
    /// Boolean env var had an invalid value.
    #[error("{var} must be a boolean")]
    InvalidBool {
        /// Env var name.
        var: &'static str,
        /// Raw input value.
        value: String,
    },
    /// Enum env var had an invalid value.
    #[error("{var} has an unsupported value")]
    InvalidEnum {
        /// Env var name.
        var: &'static str,
        /// Raw input value.
        value: String,
    },
}

impl EnvParseError {
    fn error_code(&self) -> ErrorCode {
        match self {
            Self::EmptyValue { .. } => ErrorCode::new("config", "empty_env_var"),
            Self::InvalidBool { .. } => ErrorCode::new("config", "invalid_env_bool"),
            Self::InvalidEnum { .. } => ErrorCode::new("config", "invalid_env_enum"),
        }
    }
}

impl From<EnvParseError> for ErrorEnvelope {
    fn from(error: EnvParseError) -> Self {
        let code = error.error_code();
        let message = error.to_string();
        let envelope = Self::expected(code, message);

        match error {
            EnvParseError::EmptyValue { var } => envelope.with_metadata("env_var", var),
            EnvParseError::InvalidBool { var, value } | EnvParseError::InvalidEnum { var, value } => {
                envelope
                    .with_metadata("env_var", var)
                    .with_metadata("value", value)
            },
        }
    }
}
