//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (attempts >= 1, gas limit > 0)
//! - Catch the placeholder contract address before any RPC traffic
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: ClaimerConfig → Result<(), Vec<ValidationError>>
//! - Runs before the config is accepted into the system

use alloy::primitives::Address;
use thiserror::Error;
use url::Url;

use crate::config::schema::{ClaimerConfig, PLACEHOLDER_CONTRACT_ADDRESS};

/// A single semantic configuration error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("retry.attempts must be at least 1")]
    NoAttempts,

    #[error("chain.gas_limit must be greater than zero")]
    ZeroGasLimit,

    #[error("chain.rpc_url is not a valid URL: {0}")]
    BadRpcUrl(String),

    #[error("contract.address is not a valid address: {0}")]
    BadContractAddress(String),

    #[error(
        "contract.address is still the placeholder; set LOYALTY_CONTRACT_ADDRESS \
         to the deployed loyalty contract"
    )]
    PlaceholderContractAddress,

    #[error("telegram configuration is incomplete: both bot_token and chat_id are required")]
    PartialTelegram,
}

/// Validate a configuration, collecting every violation.
pub fn validate_config(config: &ClaimerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.retry.attempts == 0 {
        errors.push(ValidationError::NoAttempts);
    }

    if config.chain.gas_limit == 0 {
        errors.push(ValidationError::ZeroGasLimit);
    }

    if Url::parse(&config.chain.rpc_url).is_err() {
        errors.push(ValidationError::BadRpcUrl(config.chain.rpc_url.clone()));
    }

    if config.contract.address == PLACEHOLDER_CONTRACT_ADDRESS {
        errors.push(ValidationError::PlaceholderContractAddress);
    } else if config.contract.address.parse::<Address>().is_err() {
        errors.push(ValidationError::BadContractAddress(
            config.contract.address.clone(),
        ));
    }

    // Exactly one of the two Telegram fields set is a misconfiguration,
    // not a disabled channel. Fail fast rather than claim unnotified.
    if (config.telegram.bot_token.is_some()) != (config.telegram.chat_id.is_some()) {
        errors.push(ValidationError::PartialTelegram);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> ClaimerConfig {
        let mut config = ClaimerConfig::default();
        config.contract.address = "0x4D97DCd97eC945f40cF65F87097ACe5EA0476045".to_string();
        config
    }

    #[test]
    fn accepts_valid_config() {
        assert!(validate_config(&valid_config()).is_ok());
    }

    #[test]
    fn rejects_placeholder_contract_address() {
        let config = ClaimerConfig::default();
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.contains(&ValidationError::PlaceholderContractAddress));
    }

    #[test]
    fn rejects_zero_attempts_and_gas() {
        let mut config = valid_config();
        config.retry.attempts = 0;
        config.chain.gas_limit = 0;

        let errors = validate_config(&config).unwrap_err();
        assert!(errors.contains(&ValidationError::NoAttempts));
        assert!(errors.contains(&ValidationError::ZeroGasLimit));
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn rejects_malformed_contract_address() {
        let mut config = valid_config();
        config.contract.address = "not-an-address".to_string();

        let errors = validate_config(&config).unwrap_err();
        assert!(matches!(
            errors.as_slice(),
            [ValidationError::BadContractAddress(_)]
        ));
    }

    #[test]
    fn rejects_partial_telegram_config() {
        let mut config = valid_config();
        config.telegram.bot_token = Some("123:abc".to_string());

        let errors = validate_config(&config).unwrap_err();
        assert!(errors.contains(&ValidationError::PartialTelegram));

        config.telegram.chat_id = Some("42".to_string());
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn collects_all_errors() {
        let mut config = ClaimerConfig::default();
        config.retry.attempts = 0;
        config.chain.rpc_url = "not a url".to_string();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
