//! Config loading helpers (env + file).
//!
//! The loader is responsible for deterministic merge order and surfacing
//! user-facing errors as typed `ErrorEnvelope`s.

use crate::{CatcherConfig, CatcherEnv, ValidatedCatcherConfig, apply_env_overrides};
use log_catcher_shared::{ErrorCode, ErrorEnvelope};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Json,
    Toml,
}

/// Load the config from sources using a deterministic precedence order.
///
/// Precedence (highest wins):
/// - env overrides (`CatcherEnv`)
/// - config JSON (file content)
/// - defaults (`CatcherConfig::default()`)
pub fn load_catcher_config_from_sources(
    config_json: Option<&str>,
    env: &CatcherEnv,
) -> Result<ValidatedCatcherConfig, ErrorEnvelope> {
    let config = match config_json {
        None => CatcherConfig::default(),
        Some(input) => parse_config_unvalidated(input, ConfigFormat::Json)?,
    };

    // env is applied last and also validates/normalizes the resulting config.
    apply_env_overrides(config, env)
}

/// Load the config from an optional file path (`.json` or `.toml`).
pub fn load_catcher_config_from_path(
    config_path: Option<&Path>,
    env: &CatcherEnv,
) -> Result<ValidatedCatcherConfig, ErrorEnvelope> {
    let config = match config_path {
        None => CatcherConfig::default(),
        Some(path) => {
            let format = detect_config_format(path)?;
            let config_text = read_config_file(path)?;
            parse_config_unvalidated(&config_text, format)?
        },
    };

    apply_env_overrides(config, env)
}

/// Load the config from std env and an optional file path.
pub fn load_catcher_config_std_env(
    config_path: Option<&Path>,
) -> Result<ValidatedCatcherConfig, ErrorEnvelope> {
    let env = CatcherEnv::from_std_env().map_err(ErrorEnvelope::from)?;
    load_catcher_config_from_path(config_path, &env)
}

/// Serialize the config as deterministic pretty JSON (with trailing newline).
pub fn to_pretty_json(config: &CatcherConfig) -> Result<String, ErrorEnvelope> {
    let mut output = serde_json::to_string_pretty(config).map_err(|error| {
        ErrorEnvelope::unexpected(
            ErrorCode::internal(),
            format!("failed to serialize config: {error}"),
        )
    })?;
    output.push('\n');
    Ok(output)
}

/// Serialize the config as deterministic pretty TOML (with trailing newline).
pub fn to_pretty_toml(config: &CatcherConfig) -> Result<String, ErrorEnvelope> {
    let mut output = toml::to_string_pretty(config).map_err(|error| {
        ErrorEnvelope::unexpected(
            ErrorCode::new("config", "serialize_toml"),
            format!("failed to serialize config TOML: {error}"),
        )
    })?;
    if !output.ends_with('\n') {
        output.push('\n');
    }
    Ok(output)
}

fn parse_config_unvalidated(
    input: &str,
    format: ConfigFormat,
) -> Result<CatcherConfig, ErrorEnvelope> {
    match format {
        ConfigFormat::Json => serde_json::from_str(input).map_err(|error| {
            ErrorEnvelope::expected(
                ErrorCode::new("config", "invalid_json"),
                format!("invalid config JSON: {error}"),
            )
            .with_metadata("source", "config")
        }),
        ConfigFormat::Toml => toml::from_str(input).map_err(|error| {
            ErrorEnvelope::expected(
                ErrorCode::new("config", "invalid_toml"),
                format!("invalid config TOML: {error}"),
            )
            .with_metadata("source", "config")
        }),
    }
}

fn read_config_file(path: &Path) -> Result<String, ErrorEnvelope> {
    std::fs::read_to_string(path).map_err(|error| {
        let code = match error.kind() {
            std::io::ErrorKind::NotFound => ErrorCode::new("config", "config_file_not_found"),
            std::io::ErrorKind::PermissionDenied => {
                ErrorCode::new("config", "config_file_permission_denied")
            },
            _ => ErrorCode::new("config", "config_file_io"),
        };

        ErrorEnvelope::expected(code, format!("failed to read config file: {error}"))
            .with_metadata("path", path.to_string_lossy().to_string())
    })
}

fn detect_config_format(path: &Path) -> Result<ConfigFormat, ErrorEnvelope> {
    let ext = path
        .extension()
        .and_then(|value| value.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        None | Some("json") => Ok(ConfigFormat::Json),
        Some("toml") => Ok(ConfigFormat::Toml),
        Some(other) => Err(ErrorEnvelope::expected(
            ErrorCode::new("config", "unsupported_format"),
            "unsupported config format; use .json or .toml",
        )
        .with_metadata("extension", other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EchoMode;
    use log_catcher_domain::LogLevel;

    #[test]
    fn env_wins_over_config_json() -> Result<(), ErrorEnvelope> {
        let env = CatcherEnv {
            echo_mode: Some(EchoMode::Stderr),
            ..CatcherEnv::default()
        };
        let config = load_catcher_config_from_sources(
            Some(r#"{"echo":{"mode":"json","level":"error"}}"#),
            &env,
        )?;

        assert_eq!(config.echo.mode, EchoMode::Stderr);
        assert_eq!(config.echo.level, LogLevel::Error);
        Ok(())
    }

    #[test]
    fn missing_sources_yield_defaults() -> Result<(), ErrorEnvelope> {
        let config = load_catcher_config_from_sources(None, &CatcherEnv::default())?;
        assert_eq!(config.into_inner(), CatcherConfig::default());
        Ok(())
    }

    #[test]
    fn unsupported_extension_is_rejected_before_reading() {
        let error =
            load_catcher_config_from_path(Some(Path::new("catcher.yaml")), &CatcherEnv::default())
                .err();
        let Some(error) = error else {
            panic!("yaml should be rejected");
        };
        assert_eq!(error.code, ErrorCode::new("config", "unsupported_format"));
        assert_eq!(
            error.metadata.get("extension").map(String::as_str),
            Some("yaml")
        );
    }

    #[test]
    fn missing_file_reports_not_found() {
        let error = load_catcher_config_from_path(
            Some(Path::new("/nonexistent/log-catcher/config.toml")),
            &CatcherEnv::default(),
        )
        .err();
        assert_eq!(
            error.map(|error| error.code),
            Some(ErrorCode::new("config", "config_file_not_found"))
        );
    }

    #[test]
    fn pretty_outputs_parse_back() -> Result<(), ErrorEnvelope> {
        let mut config = CatcherConfig::default();
        config.echo.mode = EchoMode::Json;
        config.echo.level = LogLevel::Debug;

        let json = to_pretty_json(&config)?;
        assert!(json.ends_with('\n'));
        assert_eq!(crate::parse_catcher_config_json(&json)?.into_inner(), config);

        let toml_text = to_pretty_toml(&config)?;
        assert!(toml_text.ends_with('\n'));
        assert_eq!(crate::parse_catcher_config_toml(&toml_text)?.into_inner(), config);
        Ok(())
    }
}
