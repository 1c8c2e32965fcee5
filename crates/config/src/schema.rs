//! Recorder configuration schema.
//!
//! The schema decides two things: whether calls are captured into a catcher,
//! and whether (and how) they are echoed to real log output.

use log_catcher_domain::LogLevel;
use log_catcher_shared::{ErrorCode, ErrorEnvelope};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported config schema version.
pub const CURRENT_CONFIG_VERSION: u32 = 1;

/// Default event name attached to echoed JSON lines.
pub const DEFAULT_ECHO_EVENT: &str = "log.captured";

const ECHO_EVENT_MAX_CHARS: usize = 128;

/// Top-level recorder configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct CatcherConfig {
    /// Schema version for forward-compatible migrations.
    pub version: u32,
    /// Capture settings.
    pub capture: CaptureConfig,
    /// Echo settings.
    pub echo: EchoConfig,
}

impl Default for CatcherConfig {
    fn default() -> Self {
        Self {
            version: CURRENT_CONFIG_VERSION,
            capture: CaptureConfig::default(),
            echo: EchoConfig::default(),
        }
    }
}

impl CatcherConfig {
    /// Validate and normalize the config.
    pub fn validate_and_normalize(mut self) -> Result<ValidatedCatcherConfig, ConfigSchemaError> {
        if self.version != CURRENT_CONFIG_VERSION {
            return Err(ConfigSchemaError::UnsupportedVersion {
                found: self.version,
                supported: CURRENT_CONFIG_VERSION,
            });
        }

        self.echo.normalize();
        self.echo.validate()?;
        Ok(ValidatedCatcherConfig { raw: self })
    }
}

/// Validated config wrapper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedCatcherConfig {
    raw: CatcherConfig,
}

impl ValidatedCatcherConfig {
    /// Borrow the raw config.
    #[must_use]
    pub const fn as_ref(&self) -> &CatcherConfig {
        &self.raw
    }

    /// Consume the wrapper and return the raw config.
    #[must_use]
    pub fn into_inner(self) -> CatcherConfig {
        self.raw
    }
}

impl Default for ValidatedCatcherConfig {
    fn default() -> Self {
        Self {
            raw: CatcherConfig::default(),
        }
    }
}

impl AsRef<CatcherConfig> for ValidatedCatcherConfig {
    fn as_ref(&self) -> &CatcherConfig {
        &self.raw
    }
}

impl std::ops::Deref for ValidatedCatcherConfig {
    type Target = CatcherConfig;

    fn deref(&self) -> &Self::Target {
        &self.raw
    }
}

/// Capture settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct CaptureConfig {
    /// Record calls into the catcher.
    pub enabled: bool,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Where echoed calls go.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EchoMode {
    /// No echo; captured calls produce no output.
    #[default]
    None,
    /// Plain full string on stderr.
    Stderr,
    /// One JSON object per line on stderr.
    Json,
    /// A `tracing` event.
    Tracing,
}

impl EchoMode {
    /// Stable lowercase label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Stderr => "stderr",
            Self::Json => "json",
            Self::Tracing => "tracing",
        }
    }

    /// Parse a label, case-insensitively.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "none" | "off" => Some(Self::None),
            "stderr" => Some(Self::Stderr),
            "json" => Some(Self::Json),
            "tracing" => Some(Self::Tracing),
            _ => None,
        }
    }
}

impl fmt::Display for EchoMode {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Echo settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct EchoConfig {
    /// Echo destination.
    pub mode: EchoMode,
    /// Severity attached to echoed calls.
    pub level: LogLevel,
    /// Event name used by the JSON echo.
    pub event: Box<str>,
}

impl Default for EchoConfig {
    fn default() -> Self {
        Self {
            mode: EchoMode::None,
            level: LogLevel::Info,
            event: DEFAULT_ECHO_EVENT.into(),
        }
    }
}

impl EchoConfig {
    fn normalize(&mut self) {
        let trimmed = self.event.trim();
        if trimmed.len() != self.event.len() {
            self.event = trimmed.into();
        }
    }

    fn validate(&self) -> Result<(), ConfigSchemaError> {
        if self.event.is_empty() {
            return Err(ConfigSchemaError::EmptyField {
                section: "echo",
                field: "event",
            });
        }
        let len = self.event.chars().count();
        if len > ECHO_EVENT_MAX_CHARS {
            return Err(ConfigSchemaError::FieldTooLong {
                section: "echo",
                field: "event",
                len,
                max: ECHO_EVENT_MAX_CHARS,
            });
        }
        Ok(())
    }
}

/// Schema validation failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigSchemaError {
    /// The config version is not supported by this crate.
    #[error("unsupported config version {found} (supported: {supported})")]
    UnsupportedVersion {
        /// Version found in the config.
        found: u32,
        /// Version supported by this crate.
        supported: u32,
    },
    /// A required string field was empty after trimming.
    #[error("{section}.{field} must be non-empty")]
    EmptyField {
        /// Schema section (e.g. `echo`).
        section: &'static str,
        /// Field name in the config file.
        field: &'static str,
    },
    /// A string field exceeds its length limit.
    #[error("{section}.{field} is too long ({len} chars, max {max})")]
    FieldTooLong {
        /// Schema section.
        section: &'static str,
        /// Field name in the config file.
        field: &'static str,
        /// Length found.
        len: usize,
        /// Maximum allowed.
        max: usize,
    },
}

impl From<ConfigSchemaError> for ErrorEnvelope {
    fn from(error: ConfigSchemaError) -> Self {
        let message = error.to_string();
        match error {
            ConfigSchemaError::UnsupportedVersion { found, supported } => Self::expected(
                ErrorCode::new("config", "unsupported_version"),
                message,
            )
            .with_metadata("found", found.to_string())
            .with_metadata("supported", supported.to_string()),
            ConfigSchemaError::EmptyField { section, field } => {
                Self::expected(ErrorCode::new("config", "empty_field"), message)
                    .with_metadata("field", format!("{section}.{field}"))
            },
            ConfigSchemaError::FieldTooLong {
                section,
                field,
                len,
                max,
            } => Self::expected(ErrorCode::new("config", "field_too_long"), message)
                .with_metadata("field", format!("{section}.{field}"))
                .with_metadata("len", len.to_string())
                .with_metadata("max", max.to_string()),
        }
    }
}

/// Parse a config from a JSON string, applying validation and normalization.
pub fn parse_catcher_config_json(input: &str) -> Result<ValidatedCatcherConfig, ErrorEnvelope> {
    let config: CatcherConfig = serde_json::from_str(input).map_err(|error| {
        ErrorEnvelope::expected(
            ErrorCode::new("config", "invalid_json"),
            format!("invalid config JSON: {error}"),
        )
    })?;

    config.validate_and_normalize().map_err(Into::into)
}

/// Parse a config from a TOML string, applying validation and normalization.
pub fn parse_catcher_config_toml(input: &str) -> Result<ValidatedCatcherConfig, ErrorEnvelope> {
    let config: CatcherConfig = toml::from_str(input).map_err(|error| {
        ErrorEnvelope::expected(
            ErrorCode::new("config", "invalid_toml"),
            format!("invalid config TOML: {error}"),
        )
    })?;

    config.validate_and_normalize().map_err(Into::into)
}
