//! Loyalty contract binding.
//!
//! The contract surface consumed by the bot is a single non-payable
//! function taking the caller's wallet address and returning nothing.

use alloy::primitives::{Address, Bytes, TxHash};
use alloy::sol;
use alloy::sol_types::SolCall;

use crate::config::ContractConfig;

use super::types::{ChainError, ChainResult};

sol! {
    interface ILoyaltyProgram {
        function claimDailyReward(address user) external;
    }
}

/// Handle to the deployed loyalty contract.
#[derive(Debug, Clone)]
pub struct LoyaltyContract {
    address: Address,
    explorer_url: String,
}

impl LoyaltyContract {
    pub fn new(address: Address, explorer_url: impl Into<String>) -> Self {
        Self {
            address,
            explorer_url: explorer_url.into(),
        }
    }

    /// Parse the configured contract address. Validation has already
    /// checked it, so a failure here means the config was bypassed.
    pub fn from_config(config: &ContractConfig) -> ChainResult<Self> {
        let address: Address = config
            .address
            .parse()
            .map_err(|e| ChainError::Rpc(format!("invalid contract address: {}", e)))?;
        Ok(Self::new(address, config.explorer_url.clone()))
    }

    pub fn address(&self) -> Address {
        self.address
    }

    /// ABI-encoded calldata for `claimDailyReward(user)`.
    pub fn claim_calldata(&self, user: Address) -> Bytes {
        ILoyaltyProgram::claimDailyRewardCall { user }
            .abi_encode()
            .into()
    }

    /// Explorer link for a submitted transaction, used in notifications.
    pub fn explorer_tx_url(&self, tx_hash: TxHash) -> String {
        format!("{}/tx/{}", self.explorer_url.trim_end_matches('/'), tx_hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::address;

    const WALLET: Address = address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266");

    fn contract() -> LoyaltyContract {
        LoyaltyContract::new(
            address!("4D97DCd97eC945f40cF65F87097ACe5EA0476045"),
            "https://explorer.talus.network",
        )
    }

    #[test]
    fn calldata_carries_selector_and_user() {
        let calldata = contract().claim_calldata(WALLET);

        // 4-byte selector + one ABI word
        assert_eq!(calldata.len(), 36);
        assert_eq!(
            &calldata[..4],
            ILoyaltyProgram::claimDailyRewardCall::SELECTOR
        );
        // The address occupies the low 20 bytes of the padded word.
        assert_eq!(&calldata[16..36], WALLET.as_slice());
    }

    #[test]
    fn explorer_url_is_well_formed() {
        let hash: TxHash = "0x88df016429689c079f3b2f6ad39fa052532c56795b733da78a91ebe6a713944b"
            .parse()
            .unwrap();
        assert_eq!(
            contract().explorer_tx_url(hash),
            format!("https://explorer.talus.network/tx/{}", hash)
        );
    }

    #[test]
    fn trailing_slash_in_explorer_base_is_tolerated() {
        let contract = LoyaltyContract::new(
            address!("4D97DCd97eC945f40cF65F87097ACe5EA0476045"),
            "https://explorer.talus.network/",
        );
        let hash = TxHash::ZERO;
        assert!(!contract.explorer_tx_url(hash).contains("//tx"));
    }

    #[test]
    fn from_config_rejects_garbage() {
        let config = ContractConfig {
            address: "nope".to_string(),
            explorer_url: "https://explorer.talus.network".to_string(),
        };
        assert!(LoyaltyContract::from_config(&config).is_err());
    }
}
