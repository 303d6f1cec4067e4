//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files,
//! and every field has a default so a minimal (or empty) config works.
//! Secrets are never part of the schema: the wallet private key is read
//! from the environment only (see [`crate::blockchain::wallet`]).

use serde::{Deserialize, Serialize};

/// The placeholder loyalty contract address shipped as a default.
/// The operator must override it before the bot can do useful work.
pub const PLACEHOLDER_CONTRACT_ADDRESS: &str = "0x0000000000000000000000000000000000000123";

/// Root configuration for the claimer.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ClaimerConfig {
    /// Chain endpoint and transaction parameters.
    pub chain: ChainConfig,

    /// Loyalty contract settings.
    pub contract: ContractConfig,

    /// Retry policy for the claim loop.
    pub retry: RetryConfig,

    /// Telegram notification settings.
    pub telegram: TelegramConfig,

    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Chain endpoint configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ChainConfig {
    /// JSON-RPC endpoint URL.
    pub rpc_url: String,

    /// Timeout for individual RPC requests, in seconds.
    pub rpc_timeout_secs: u64,

    /// Maximum time to wait for a transaction receipt, in seconds.
    pub receipt_timeout_secs: u64,

    /// Fixed gas limit for the claim transaction.
    pub gas_limit: u64,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            rpc_url: "https://rpc.talus.network".to_string(),
            rpc_timeout_secs: 10,
            receipt_timeout_secs: 120,
            gas_limit: 200_000,
        }
    }
}

/// Loyalty contract configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ContractConfig {
    /// Address of the loyalty contract exposing `claimDailyReward`.
    pub address: String,

    /// Base URL of the block explorer, used in success notifications.
    pub explorer_url: String,
}

impl Default for ContractConfig {
    fn default() -> Self {
        Self {
            address: PLACEHOLDER_CONTRACT_ADDRESS.to_string(),
            explorer_url: "https://explorer.talus.network".to_string(),
        }
    }
}

/// Retry policy for the claim loop.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Maximum number of claim attempts.
    pub attempts: u32,

    /// Delay between attempts, in seconds.
    pub delay_secs: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            attempts: 3,
            delay_secs: 10,
        }
    }
}

/// Telegram notification configuration.
///
/// Notifications are live only when both fields are set; otherwise the
/// notifier is a logged no-op and the claim proceeds unaffected.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct TelegramConfig {
    /// Bot API token.
    pub bot_token: Option<String>,

    /// Chat identifier of the operator channel.
    pub chat_id: Option<String>,
}

impl TelegramConfig {
    /// True when both the token and the chat id are configured.
    pub fn is_configured(&self) -> bool {
        self.bot_token.is_some() && self.chat_id.is_some()
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log file path; log lines go both here and to stdout.
    pub file: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: "talus_claimer.log".to_string(),
        }
    }
}
