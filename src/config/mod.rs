//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! defaults
//!     → optional TOML file (loader.rs, parse & deserialize)
//!     → environment overlay (RPC_URL, LOYALTY_CONTRACT_ADDRESS, ...)
//!     → validation.rs (semantic checks)
//!     → ClaimerConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; one run, one config
//! - All fields have defaults to allow minimal configs
//! - Secrets (the wallet key) never enter the schema

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load, ConfigError};
pub use schema::{
    ChainConfig, ClaimerConfig, ContractConfig, LoggingConfig, RetryConfig, TelegramConfig,
};
pub use validation::{validate_config, ValidationError};
