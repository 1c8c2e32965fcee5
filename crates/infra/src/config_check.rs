//! Effective config rendering.

use crate::InfraResult;
use log_catcher_config::{CatcherEnv, load_catcher_config_from_path, to_pretty_json};
use log_catcher_shared::ErrorEnvelope;
use std::collections::BTreeMap;
use std::path::Path;

/// Load and validate the effective config, returning deterministic pretty JSON.
pub fn load_effective_config_json(
    env: &BTreeMap<String, String>,
    config_path: Option<&Path>,
) -> InfraResult<String> {
    let env = CatcherEnv::from_map(env).map_err(ErrorEnvelope::from)?;
    let config = load_catcher_config_from_path(config_path, &env)?;
    to_pretty_json(&config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use log_catcher_config::{ENV_ECHO_LEVEL, parse_catcher_config_json};
    use log_catcher_domain::LogLevel;

    #[test]
    fn effective_config_reflects_env() -> InfraResult<()> {
        let env = BTreeMap::from([(ENV_ECHO_LEVEL.to_string(), "debug".to_string())]);
        let json = load_effective_config_json(&env, None)?;
        let config = parse_catcher_config_json(&json)?;
        assert_eq!(config.echo.level, LogLevel::Debug);
        Ok(())
    }
}
