//! Run orchestration.
//!
//! # Responsibilities
//! - Resolve the wallet identity and connect to the chain
//! - Announce the run to the operator, invoke the claimer once
//! - Log the final outcome
//! - On any error escaping the run, send a critical-failure notification
//!   before propagating
//!
//! # Design Decisions
//! - Fail fast: wallet and RPC connection errors abort before the loop
//! - The notifier is built first so even early failures can be announced

use std::sync::Arc;

use crate::blockchain::{ChainError, LoyaltyContract, RpcChainClient, Wallet};
use crate::claimer::{ClaimOutcome, RewardClaimer};
use crate::config::ClaimerConfig;
use crate::notify;

/// Execute one claim run with the given configuration.
pub async fn run(config: ClaimerConfig) -> Result<(), ChainError> {
    let notifier = notify::from_config(&config.telegram);

    match run_inner(&config, notifier.clone()).await {
        Ok(outcome) => {
            match outcome {
                ClaimOutcome::Claimed { tx_hash } => {
                    tracing::info!(tx_hash = %tx_hash, "claim run finished successfully");
                }
                ClaimOutcome::Rejected { reason } => {
                    tracing::error!(reason = %reason, "claim run finished: contract rejection");
                }
                ClaimOutcome::Exhausted {
                    attempts,
                    last_error,
                } => {
                    tracing::error!(
                        attempts,
                        last_error = %last_error,
                        "claim run finished: retries exhausted"
                    );
                }
            }
            Ok(())
        }
        Err(e) => {
            tracing::error!(error = %e, "critical claimer failure");
            notifier
                .notify(&format!("🚨 Critical claimer failure: {}", e))
                .await;
            Err(e)
        }
    }
}

async fn run_inner(
    config: &ClaimerConfig,
    notifier: Arc<dyn notify::Notifier>,
) -> Result<ClaimOutcome, ChainError> {
    let wallet = Wallet::from_env()?;
    let wallet_address = wallet.address();
    tracing::info!(wallet = %wallet_address, "starting claim run");

    let chain = RpcChainClient::connect(&config.chain, &wallet).await?;
    let contract = LoyaltyContract::from_config(&config.contract)?;

    notifier
        .notify(&format!(
            "🚀 Talus claimer started\nWallet: {}",
            wallet_address
        ))
        .await;

    let claimer = RewardClaimer::new(
        Arc::new(chain),
        notifier,
        wallet_address,
        contract,
        &config.chain,
        config.retry,
    );

    Ok(claimer.claim_daily_reward().await)
}
