use {
    ethers_core::types::{
        Address,
        H256,
        U256,
    },
    serde::Serialize,
};

pub type UserId = String;
pub type CurrencyId = String;
pub type SpaceId = String;
pub type ListingId = String;
pub type BidId = String;

/// Lowercase hex entity id for an address, `0x`-prefixed and unabbreviated.
pub fn address_id(address: &Address) -> String {
    format!("{:#x}", address)
}

pub fn tx_hash_id(tx_hash: &H256) -> String {
    format!("{:#x}", tx_hash)
}

/// Composite id `<parentId>-<txHash>-<logIndex>` for records created once per
/// log. Deterministic across replays of the same chain history.
pub fn record_id(parent: &str, tx_hash: &H256, log_index: U256) -> String {
    format!("{}-{:#x}-{}", parent, tx_hash, log_index)
}

/// Composite key `<tokenContract>-<tokenId>` joining a listing to its asset.
pub fn token_key(token_contract: &str, token_id: U256) -> String {
    format!("{}-{}", token_contract, token_id)
}

/// A chain address, created lazily on first reference and never deleted.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct User {
    pub id:               UserId,
    /// Operators this user has approved via ApprovalForAll.
    pub authorized_users: Vec<UserId>,
}

impl User {
    pub fn new(id: UserId) -> Self {
        Self {
            id,
            authorized_users: Vec::new(),
        }
    }
}
