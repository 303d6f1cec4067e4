//! Configuration loading.
//!
//! Precedence, lowest to highest: built-in defaults, TOML file,
//! environment variables. CLI flags are applied by the binary on top of
//! the loaded config. The environment names match the original deployment
//! (`RPC_URL`, `LOYALTY_CONTRACT_ADDRESS`, `TELEGRAM_TOKEN`,
//! `TELEGRAM_CHAT_ID`); the wallet key (`PRIVATE_KEY`) is deliberately
//! not part of the config and is read by the wallet module.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::ClaimerConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid configuration: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Load configuration from an optional TOML file, overlay the
/// environment, and validate the result.
pub fn load(path: Option<&Path>) -> Result<ClaimerConfig, ConfigError> {
    let mut config = match path {
        Some(path) => toml::from_str(&fs::read_to_string(path)?)?,
        None => ClaimerConfig::default(),
    };

    apply_env_overrides(&mut config, |key| std::env::var(key).ok());

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Overlay operator-facing environment variables onto a config.
///
/// Takes the lookup as a closure so tests do not have to mutate the
/// process environment.
fn apply_env_overrides(config: &mut ClaimerConfig, get: impl Fn(&str) -> Option<String>) {
    if let Some(url) = get("RPC_URL") {
        config.chain.rpc_url = url;
    }
    if let Some(address) = get("LOYALTY_CONTRACT_ADDRESS") {
        config.contract.address = address;
    }
    if let Some(token) = get("TELEGRAM_TOKEN") {
        config.telegram.bot_token = Some(token);
    }
    if let Some(chat_id) = get("TELEGRAM_CHAT_ID") {
        config.telegram.chat_id = Some(chat_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const CONTRACT: &str = "0x4D97DCd97eC945f40cF65F87097ACe5EA0476045";

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn env_overrides_file_values() {
        let mut config: ClaimerConfig = toml::from_str(
            r#"
            [chain]
            rpc_url = "https://rpc.from-file.example"
            "#,
        )
        .unwrap();

        let vars = env(&[
            ("RPC_URL", "https://rpc.from-env.example"),
            ("LOYALTY_CONTRACT_ADDRESS", CONTRACT),
        ]);
        apply_env_overrides(&mut config, |key| vars.get(key).cloned());

        assert_eq!(config.chain.rpc_url, "https://rpc.from-env.example");
        assert_eq!(config.contract.address, CONTRACT);
    }

    #[test]
    fn env_sets_telegram_channel() {
        let mut config = ClaimerConfig::default();
        let vars = env(&[("TELEGRAM_TOKEN", "123:abc"), ("TELEGRAM_CHAT_ID", "42")]);
        apply_env_overrides(&mut config, |key| vars.get(key).cloned());

        assert!(config.telegram.is_configured());
        assert_eq!(config.telegram.chat_id.as_deref(), Some("42"));
    }

    #[test]
    fn missing_env_leaves_defaults() {
        let mut config = ClaimerConfig::default();
        apply_env_overrides(&mut config, |_| None);

        assert_eq!(config.chain.rpc_url, "https://rpc.talus.network");
        assert!(!config.telegram.is_configured());
    }

    #[test]
    fn validation_errors_surface_through_loader_error() {
        let config = ClaimerConfig::default();
        let err = validate_config(&config)
            .map_err(ConfigError::Validation)
            .unwrap_err();
        assert!(err.to_string().contains("placeholder"));
    }
}
