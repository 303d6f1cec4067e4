//! Chain-specific types and error definitions.

use alloy::primitives::TxHash;
use thiserror::Error;

/// Errors that can occur during blockchain operations.
#[derive(Debug, Error)]
pub enum ChainError {
    /// The RPC endpoint was unreachable at construction. Fatal, never retried.
    #[error("failed to connect to RPC endpoint {url}: {reason}")]
    Connection { url: String, reason: String },

    /// RPC request failed.
    #[error("RPC error: {0}")]
    Rpc(String),

    /// RPC request timed out.
    #[error("RPC timeout after {0} seconds")]
    Timeout(u64),

    /// No receipt appeared within the confirmation window.
    #[error("no transaction receipt after {0} seconds")]
    ReceiptTimeout(u64),

    /// The contract's own logic rejected the claim (e.g. already claimed
    /// today). Terminal for the run, never retried.
    #[error("claim rejected by contract: {0}")]
    Rejected(String),

    /// Invalid private key format or derivation error.
    #[error("wallet error: {0}")]
    Wallet(String),
}

impl ChainError {
    /// True for the one failure class that must not be retried.
    pub fn is_terminal(&self) -> bool {
        matches!(self, ChainError::Rejected(_))
    }
}

/// Result type for blockchain operations.
pub type ChainResult<T> = Result<T, ChainError>;

/// Confirmation record for a mined claim transaction. Read once: the
/// claimer inspects `success` and discards it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimReceipt {
    /// Hash of the mined transaction.
    pub tx_hash: TxHash,
    /// Block the transaction landed in.
    pub block_number: u64,
    /// On-chain execution status.
    pub success: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_rejection_is_terminal() {
        assert!(ChainError::Rejected("already claimed".into()).is_terminal());
        assert!(!ChainError::Rpc("connection reset".into()).is_terminal());
        assert!(!ChainError::ReceiptTimeout(120).is_terminal());
        assert!(!ChainError::Timeout(10).is_terminal());
    }

    #[test]
    fn error_display() {
        let err = ChainError::ReceiptTimeout(120);
        assert_eq!(err.to_string(), "no transaction receipt after 120 seconds");

        let err = ChainError::Connection {
            url: "https://rpc.talus.network".to_string(),
            reason: "dns failure".to_string(),
        };
        assert!(err.to_string().contains("rpc.talus.network"));
    }
}
