//! The reward claim loop.
//!
//! One run performs up to `retry.attempts` claim attempts against the
//! loyalty contract, sleeping `retry.delay_secs` between failed attempts.
//! Outcomes are classified three ways:
//!
//! - success: the receipt reports success; terminal
//! - contract rejection: the contract's own logic refused the claim
//!   (e.g. already claimed today); terminal, never retried
//! - transient failure: anything else (RPC errors, timeouts, a mined but
//!   reverted transaction); retried until attempts are exhausted
//!
//! Nonce and gas price are re-read from the chain on every attempt, so a
//! retry can never reuse a stale nonce.

use std::sync::Arc;
use std::time::Duration;

use alloy::network::TransactionBuilder;
use alloy::primitives::{Address, TxHash};
use alloy::rpc::types::TransactionRequest;

use crate::blockchain::types::{ChainError, ChainResult, ClaimReceipt};
use crate::blockchain::{ChainClient, LoyaltyContract};
use crate::config::{ChainConfig, RetryConfig};
use crate::notify::Notifier;

/// Final outcome of a claim run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClaimOutcome {
    /// The reward was credited.
    Claimed { tx_hash: TxHash },
    /// The contract refused the claim; retrying would not help.
    Rejected { reason: String },
    /// Every attempt failed transiently.
    Exhausted { attempts: u32, last_error: String },
}

impl ClaimOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ClaimOutcome::Claimed { .. })
    }
}

/// Orchestrates claim attempts against the loyalty contract.
pub struct RewardClaimer {
    chain: Arc<dyn ChainClient>,
    notifier: Arc<dyn Notifier>,
    wallet_address: Address,
    contract: LoyaltyContract,
    attempts: u32,
    delay: Duration,
    gas_limit: u64,
    receipt_timeout: Duration,
}

impl RewardClaimer {
    pub fn new(
        chain: Arc<dyn ChainClient>,
        notifier: Arc<dyn Notifier>,
        wallet_address: Address,
        contract: LoyaltyContract,
        chain_config: &ChainConfig,
        retry: RetryConfig,
    ) -> Self {
        Self {
            chain,
            notifier,
            wallet_address,
            contract,
            attempts: retry.attempts.max(1),
            delay: Duration::from_secs(retry.delay_secs),
            gas_limit: chain_config.gas_limit,
            receipt_timeout: Duration::from_secs(chain_config.receipt_timeout_secs),
        }
    }

    /// Claim the daily reward, retrying transient failures.
    ///
    /// Sends exactly one outcome notification per run.
    pub async fn claim_daily_reward(&self) -> ClaimOutcome {
        let mut last_error = String::new();

        for attempt in 1..=self.attempts {
            tracing::info!(attempt, max_attempts = self.attempts, "claim attempt");

            match self.attempt_claim().await {
                Ok(receipt) if receipt.success => {
                    tracing::info!(
                        tx_hash = %receipt.tx_hash,
                        block_number = receipt.block_number,
                        "daily reward claimed"
                    );
                    self.notifier
                        .notify(&format!(
                            "✅ Daily reward claimed!\nWallet: {}\nTransaction: {}",
                            self.wallet_address,
                            self.contract.explorer_tx_url(receipt.tx_hash)
                        ))
                        .await;
                    return ClaimOutcome::Claimed {
                        tx_hash: receipt.tx_hash,
                    };
                }
                Ok(receipt) => {
                    // Mined but reverted: handled like any other transient
                    // failure and retried.
                    last_error = format!("transaction {} reverted on-chain", receipt.tx_hash);
                    tracing::error!(
                        tx_hash = %receipt.tx_hash,
                        attempt,
                        "claim transaction reverted"
                    );
                }
                Err(ChainError::Rejected(reason)) => {
                    tracing::error!(reason = %reason, "claim rejected by the loyalty contract");
                    self.notifier
                        .notify(&format!("❌ Claim rejected by the contract: {}", reason))
                        .await;
                    return ClaimOutcome::Rejected { reason };
                }
                Err(e) => {
                    last_error = e.to_string();
                    tracing::error!(
                        error = %e,
                        attempt,
                        max_attempts = self.attempts,
                        "claim attempt failed"
                    );
                }
            }

            if attempt < self.attempts {
                tokio::time::sleep(self.delay).await;
            }
        }

        self.notifier
            .notify(&format!(
                "❌ Failed to claim the daily reward after {} attempts.\nLast error: {}",
                self.attempts, last_error
            ))
            .await;

        ClaimOutcome::Exhausted {
            attempts: self.attempts,
            last_error,
        }
    }

    /// One claim attempt: read nonce and gas price, build, submit, confirm.
    async fn attempt_claim(&self) -> ChainResult<ClaimReceipt> {
        let nonce = self.chain.nonce(self.wallet_address).await?;
        let gas_price = self.chain.gas_price().await?;

        let tx = TransactionRequest::default()
            .with_from(self.wallet_address)
            .with_to(self.contract.address())
            .with_input(self.contract.claim_calldata(self.wallet_address))
            .with_nonce(nonce)
            .with_gas_price(gas_price)
            .with_gas_limit(self.gas_limit);

        let tx_hash = self.chain.submit(tx).await?;

        self.chain
            .wait_for_receipt(tx_hash, self.receipt_timeout)
            .await
    }
}
