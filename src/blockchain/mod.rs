//! Blockchain integration subsystem.
//!
//! # Data Flow
//! ```text
//! Environment (PRIVATE_KEY) → wallet.rs (key loading, address)
//! ChainConfig (RPC URL)     → client.rs (connection probe, RPC calls)
//! ContractConfig            → contract.rs (claim calldata, explorer links)
//! ```
//!
//! # Security Constraints
//! - Private keys ONLY from environment variables
//! - Never log private keys or sensitive data
//! - All RPC calls have configurable timeouts

pub mod client;
pub mod contract;
pub mod types;
pub mod wallet;

pub use client::{ChainClient, RpcChainClient};
pub use contract::LoyaltyContract;
pub use types::{ChainError, ChainResult, ClaimReceipt};
pub use wallet::Wallet;
