#[cfg(test)]
use mockall::automock;
use {
    async_trait::async_trait,
    ethers_core::types::{
        Address,
        H256,
        U256,
    },
    std::fmt::Debug,
};

/// A contract call that reverted. A revert is a final answer ("this data is
/// unavailable"), not a transient transport failure, and is never retried.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reverted;

pub type TryCall<T> = Result<T, Reverted>;

/// Raw per-token bid-share configuration as read from the exchange contract.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BidSharesRead {
    pub creator:    U256,
    pub owner:      U256,
    pub prev_owner: U256,
}

/// Read-only calls against deployed contracts. Every method reports a revert
/// as `Err(Reverted)` rather than panicking; callers branch before touching
/// the value.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ChainReader: Debug + Send + Sync + 'static {
    async fn erc20_name(&self, currency: Address) -> TryCall<String>;
    /// Fixed-width variant of `name()` exposed by older token contracts.
    async fn erc20_name_bytes32(&self, currency: Address) -> TryCall<[u8; 32]>;
    async fn erc20_symbol(&self, currency: Address) -> TryCall<String>;
    /// Fixed-width variant of `symbol()` exposed by older token contracts.
    async fn erc20_symbol_bytes32(&self, currency: Address) -> TryCall<[u8; 32]>;
    async fn erc20_decimals(&self, currency: Address) -> TryCall<u32>;

    /// Exchange contract paired with a space contract.
    async fn space_exchange_contract(&self, space_contract: Address) -> TryCall<Address>;
    async fn bid_shares_for_token(
        &self,
        exchange: Address,
        token_id: U256,
    ) -> TryCall<BidSharesRead>;

    async fn token_uri(&self, space_contract: Address, token_id: U256) -> TryCall<String>;
    async fn token_metadata_uri(&self, space_contract: Address, token_id: U256)
        -> TryCall<String>;
    async fn token_content_hash(&self, space_contract: Address, token_id: U256) -> TryCall<H256>;
    async fn token_metadata_hash(&self, space_contract: Address, token_id: U256)
        -> TryCall<H256>;
    async fn token_land_details(
        &self,
        space_contract: Address,
        token_id: U256,
    ) -> TryCall<Vec<U256>>;
    async fn token_pin_record(&self, space_contract: Address, token_id: U256) -> TryCall<String>;
}

/// Chain reader for replaying decoded logs without an RPC endpoint: every
/// read reverts, so resolvers fall back to their documented defaults.
#[derive(Clone, Copy, Debug, Default)]
pub struct OfflineChainReader;

#[async_trait]
impl ChainReader for OfflineChainReader {
    async fn erc20_name(&self, _currency: Address) -> TryCall<String> {
        Err(Reverted)
    }

    async fn erc20_name_bytes32(&self, _currency: Address) -> TryCall<[u8; 32]> {
        Err(Reverted)
    }

    async fn erc20_symbol(&self, _currency: Address) -> TryCall<String> {
        Err(Reverted)
    }

    async fn erc20_symbol_bytes32(&self, _currency: Address) -> TryCall<[u8; 32]> {
        Err(Reverted)
    }

    async fn erc20_decimals(&self, _currency: Address) -> TryCall<u32> {
        Err(Reverted)
    }

    async fn space_exchange_contract(&self, _space_contract: Address) -> TryCall<Address> {
        Err(Reverted)
    }

    async fn bid_shares_for_token(
        &self,
        _exchange: Address,
        _token_id: U256,
    ) -> TryCall<BidSharesRead> {
        Err(Reverted)
    }

    async fn token_uri(&self, _space_contract: Address, _token_id: U256) -> TryCall<String> {
        Err(Reverted)
    }

    async fn token_metadata_uri(
        &self,
        _space_contract: Address,
        _token_id: U256,
    ) -> TryCall<String> {
        Err(Reverted)
    }

    async fn token_content_hash(
        &self,
        _space_contract: Address,
        _token_id: U256,
    ) -> TryCall<H256> {
        Err(Reverted)
    }

    async fn token_metadata_hash(
        &self,
        _space_contract: Address,
        _token_id: U256,
    ) -> TryCall<H256> {
        Err(Reverted)
    }

    async fn token_land_details(
        &self,
        _space_contract: Address,
        _token_id: U256,
    ) -> TryCall<Vec<U256>> {
        Err(Reverted)
    }

    async fn token_pin_record(&self, _space_contract: Address, _token_id: U256) -> TryCall<String> {
        Err(Reverted)
    }
}
