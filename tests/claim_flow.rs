//! End-to-end claim flow through the public API, with a fake chain.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use alloy::primitives::{address, Address, TxHash};
use alloy::rpc::types::TransactionRequest;
use async_trait::async_trait;

use talus_claimer::blockchain::{ChainClient, ChainError, ChainResult, ClaimReceipt, LoyaltyContract};
use talus_claimer::claimer::{ClaimOutcome, RewardClaimer};
use talus_claimer::config::{ChainConfig, RetryConfig};
use talus_claimer::notify::{DisabledNotifier, Notifier};

const WALLET: Address = address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266");
const CONTRACT: Address = address!("4D97DCd97eC945f40cF65F87097ACe5EA0476045");

/// Chain that fails a fixed number of submissions before succeeding.
struct FlakyChain {
    failures_before_success: u32,
    submissions: AtomicU32,
}

#[async_trait]
impl ChainClient for FlakyChain {
    async fn nonce(&self, _address: Address) -> ChainResult<u64> {
        Ok(0)
    }

    async fn gas_price(&self) -> ChainResult<u128> {
        Ok(25_000_000_000)
    }

    async fn submit(&self, _tx: TransactionRequest) -> ChainResult<TxHash> {
        let n = self.submissions.fetch_add(1, Ordering::SeqCst);
        if n < self.failures_before_success {
            Err(ChainError::Rpc("backend unavailable".into()))
        } else {
            Ok(TxHash::ZERO)
        }
    }

    async fn wait_for_receipt(
        &self,
        tx_hash: TxHash,
        _wait_timeout: Duration,
    ) -> ChainResult<ClaimReceipt> {
        Ok(ClaimReceipt {
            tx_hash,
            block_number: 42,
            success: true,
        })
    }
}

struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, text: &str) {
        self.messages.lock().unwrap().push(text.to_string());
    }
}

fn test_contract() -> LoyaltyContract {
    LoyaltyContract::new(CONTRACT, "https://explorer.talus.network")
}

#[tokio::test]
async fn recovers_from_transient_failures_within_budget() {
    let chain = Arc::new(FlakyChain {
        failures_before_success: 2,
        submissions: AtomicU32::new(0),
    });
    let notifier = Arc::new(RecordingNotifier {
        messages: Mutex::new(Vec::new()),
    });

    let claimer = RewardClaimer::new(
        chain.clone(),
        notifier.clone(),
        WALLET,
        test_contract(),
        &ChainConfig::default(),
        RetryConfig {
            attempts: 3,
            delay_secs: 0,
        },
    );

    let outcome = claimer.claim_daily_reward().await;

    assert!(outcome.is_success());
    assert_eq!(chain.submissions.load(Ordering::SeqCst), 3);

    let messages = notifier.messages.lock().unwrap();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].contains(&WALLET.to_string()));
}

#[tokio::test]
async fn gives_up_when_budget_is_too_small() {
    let chain = Arc::new(FlakyChain {
        failures_before_success: 5,
        submissions: AtomicU32::new(0),
    });
    let notifier = Arc::new(RecordingNotifier {
        messages: Mutex::new(Vec::new()),
    });

    let claimer = RewardClaimer::new(
        chain.clone(),
        notifier.clone(),
        WALLET,
        test_contract(),
        &ChainConfig::default(),
        RetryConfig {
            attempts: 2,
            delay_secs: 0,
        },
    );

    let outcome = claimer.claim_daily_reward().await;

    assert!(matches!(
        outcome,
        ClaimOutcome::Exhausted { attempts: 2, .. }
    ));
    assert_eq!(chain.submissions.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn outcome_is_unaffected_by_a_disabled_notifier() {
    let chain = Arc::new(FlakyChain {
        failures_before_success: 0,
        submissions: AtomicU32::new(0),
    });

    let claimer = RewardClaimer::new(
        chain.clone(),
        Arc::new(DisabledNotifier),
        WALLET,
        test_contract(),
        &ChainConfig::default(),
        RetryConfig {
            attempts: 3,
            delay_secs: 0,
        },
    );

    let outcome = claimer.claim_daily_reward().await;
    assert!(outcome.is_success());
    assert_eq!(chain.submissions.load(Ordering::SeqCst), 1);
}
