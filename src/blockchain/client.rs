//! Chain client boundary.
//!
//! # Responsibilities
//! - Define the narrow RPC surface the claimer consumes
//! - Connect to the JSON-RPC endpoint and probe it at construction
//! - Query nonce and gas price, broadcast the signed claim, poll receipts
//! - Bound every RPC call with a timeout
//!
//! The claimer depends on the [`ChainClient`] trait, not on the alloy
//! implementation, so the retry loop is testable without a network.

use std::sync::Arc;
use std::time::Duration;

use alloy::network::EthereumWallet;
use alloy::primitives::{Address, TxHash};
use alloy::providers::{Provider, ProviderBuilder};
use alloy::rpc::types::TransactionRequest;
use async_trait::async_trait;
use tokio::time::{interval, timeout};

use crate::blockchain::types::{ChainError, ChainResult, ClaimReceipt};
use crate::blockchain::wallet::Wallet;
use crate::config::ChainConfig;

/// Interval between receipt polls while waiting for confirmation.
const RECEIPT_POLL_INTERVAL: Duration = Duration::from_secs(2);

/// The RPC surface consumed by the reward claimer.
#[async_trait]
pub trait ChainClient: Send + Sync {
    /// Current transaction count (next nonce) for an address.
    async fn nonce(&self, address: Address) -> ChainResult<u64>;

    /// Current gas price in wei.
    async fn gas_price(&self) -> ChainResult<u128>;

    /// Sign and broadcast a transaction, returning its hash.
    async fn submit(&self, tx: TransactionRequest) -> ChainResult<TxHash>;

    /// Block until a receipt is available or the timeout elapses.
    async fn wait_for_receipt(
        &self,
        tx_hash: TxHash,
        wait_timeout: Duration,
    ) -> ChainResult<ClaimReceipt>;
}

/// Alloy-backed [`ChainClient`] over HTTP JSON-RPC.
///
/// The provider carries the wallet, so `submit` signs locally and
/// broadcasts the raw transaction.
#[derive(Clone)]
pub struct RpcChainClient {
    provider: Arc<dyn Provider + Send + Sync>,
    rpc_url: String,
    rpc_timeout: Duration,
}

impl RpcChainClient {
    /// Connect to the configured endpoint and verify it is reachable.
    ///
    /// An unreachable endpoint is fatal: the probe failure surfaces as
    /// [`ChainError::Connection`] and the run never enters the claim loop.
    pub async fn connect(config: &ChainConfig, wallet: &Wallet) -> ChainResult<Self> {
        let rpc_timeout = Duration::from_secs(config.rpc_timeout_secs);

        let url: url::Url = config.rpc_url.parse().map_err(|e| ChainError::Connection {
            url: config.rpc_url.clone(),
            reason: format!("invalid RPC URL: {}", e),
        })?;

        let provider = ProviderBuilder::new()
            .wallet(EthereumWallet::from(wallet.signer().clone()))
            .connect_http(url);

        let client = Self {
            provider: Arc::new(provider),
            rpc_url: config.rpc_url.clone(),
            rpc_timeout,
        };

        // Connectivity probe, the moral equivalent of w3.is_connected().
        let chain_id = match timeout(rpc_timeout, client.provider.get_chain_id()).await {
            Ok(Ok(id)) => id,
            Ok(Err(e)) => {
                return Err(ChainError::Connection {
                    url: client.rpc_url,
                    reason: e.to_string(),
                })
            }
            Err(_) => {
                return Err(ChainError::Connection {
                    url: client.rpc_url,
                    reason: format!("no response within {} seconds", rpc_timeout.as_secs()),
                })
            }
        };

        tracing::info!(
            rpc_url = %client.rpc_url,
            chain_id = chain_id,
            "connected to RPC endpoint"
        );

        Ok(client)
    }
}

/// Distinguish a contract-level revert reported by the node from an
/// ordinary transport failure.
fn classify_submit_error(message: String) -> ChainError {
    let lowered = message.to_lowercase();
    if lowered.contains("revert") {
        ChainError::Rejected(message)
    } else {
        ChainError::Rpc(format!("failed to send transaction: {}", message))
    }
}

#[async_trait]
impl ChainClient for RpcChainClient {
    async fn nonce(&self, address: Address) -> ChainResult<u64> {
        match timeout(self.rpc_timeout, self.provider.get_transaction_count(address)).await {
            Ok(Ok(nonce)) => Ok(nonce),
            Ok(Err(e)) => Err(ChainError::Rpc(format!("failed to get nonce: {}", e))),
            Err(_) => Err(ChainError::Timeout(self.rpc_timeout.as_secs())),
        }
    }

    async fn gas_price(&self) -> ChainResult<u128> {
        match timeout(self.rpc_timeout, self.provider.get_gas_price()).await {
            Ok(Ok(price)) => Ok(price),
            Ok(Err(e)) => Err(ChainError::Rpc(format!("failed to get gas price: {}", e))),
            Err(_) => Err(ChainError::Timeout(self.rpc_timeout.as_secs())),
        }
    }

    async fn submit(&self, tx: TransactionRequest) -> ChainResult<TxHash> {
        let pending = match timeout(self.rpc_timeout, self.provider.send_transaction(tx)).await {
            Ok(Ok(pending)) => pending,
            Ok(Err(e)) => return Err(classify_submit_error(e.to_string())),
            Err(_) => return Err(ChainError::Timeout(self.rpc_timeout.as_secs())),
        };

        let tx_hash = *pending.tx_hash();
        tracing::info!(tx_hash = %tx_hash, "claim transaction broadcast");
        Ok(tx_hash)
    }

    async fn wait_for_receipt(
        &self,
        tx_hash: TxHash,
        wait_timeout: Duration,
    ) -> ChainResult<ClaimReceipt> {
        let result = timeout(wait_timeout, async {
            let mut ticker = interval(RECEIPT_POLL_INTERVAL);

            loop {
                ticker.tick().await;

                match self.provider.get_transaction_receipt(tx_hash).await {
                    Ok(Some(receipt)) => {
                        return Ok(ClaimReceipt {
                            tx_hash,
                            block_number: receipt.block_number.unwrap_or_default(),
                            success: receipt.status(),
                        });
                    }
                    Ok(None) => {
                        tracing::debug!(tx_hash = %tx_hash, "transaction pending");
                    }
                    Err(e) => {
                        return Err(ChainError::Rpc(format!("failed to get receipt: {}", e)));
                    }
                }
            }
        })
        .await;

        match result {
            Ok(receipt) => receipt,
            Err(_) => Err(ChainError::ReceiptTimeout(wait_timeout.as_secs())),
        }
    }
}

impl std::fmt::Debug for RpcChainClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RpcChainClient")
            .field("rpc_url", &self.rpc_url)
            .field("rpc_timeout", &self.rpc_timeout)
            .finish()
    }
}
