//! Talus Daily Reward Claimer
//!
//! An unattended bot that claims the daily loyalty reward from a contract
//! on the Talus network, with bounded retries and Telegram notifications.
//!
//! # Data Flow
//! ```text
//! Environment / config file
//!     → config (schema, env overlay, validation)
//!     → blockchain::Wallet (key loading, address derivation)
//!     → blockchain::RpcChainClient (RPC connection, probed at startup)
//!     → claimer::RewardClaimer (build/submit/confirm loop, retries)
//!     → notify (Telegram status messages, best-effort)
//! ```
//!
//! One claim per process run. There is no scheduler, no persistence and
//! no concurrency; the only suspension points are the receipt wait and
//! the inter-retry delay.

pub mod blockchain;
pub mod claimer;
pub mod config;
pub mod notify;
pub mod observability;
pub mod runner;

pub use claimer::{ClaimOutcome, RewardClaimer};
pub use config::ClaimerConfig;
