use {
    crate::kernel::entities::{
        SpaceId,
        UserId,
    },
    ethers_core::types::{
        H256,
        U256,
    },
    serde::Serialize,
    strum::Display,
};

/// A tokenized asset, keyed by token id. Mutated by the pass-through
/// transfer/approval/URI handlers; referenced (optionally) by listings.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Space {
    pub id:                     SpaceId,
    pub transaction_hash:       H256,
    pub owner:                  UserId,
    pub creator:                UserId,
    pub prev_owner:             UserId,
    pub approved:               Option<UserId>,
    pub content_uri:            String,
    pub content_hash:           H256,
    pub metadata_uri:           String,
    pub metadata_hash:          H256,
    /// Each share is `None` when the bid-share read reverted at mint time:
    /// unknown, not zero.
    pub creator_bid_share:      Option<U256>,
    pub owner_bid_share:        Option<U256>,
    pub prev_owner_bid_share:   Option<U256>,
    pub lands:                  Vec<U256>,
    pub pin:                    String,
    pub created_at_timestamp:   U256,
    pub created_at_block_number: U256,
    pub burned_at_timestamp:    Option<U256>,
    pub burned_at_block_number: Option<U256>,
}

/// Fee/royalty split configuration for a token, as resolved at mint time.
/// All fields absent when the exchange read reverted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BidShares {
    pub creator:    Option<U256>,
    pub owner:      Option<U256>,
    pub prev_owner: Option<U256>,
}

/// Pass-through record of one ERC-721 transfer.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Transfer {
    pub id:                      String,
    pub transaction_hash:        H256,
    pub space:                   SpaceId,
    pub from:                    UserId,
    pub to:                      UserId,
    pub created_at_timestamp:    U256,
    pub created_at_block_number: U256,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Display)]
pub enum UriUpdateKind {
    Content,
    Metadata,
}

/// Pass-through record of one tokenURI / tokenMetadataURI change.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct UriUpdate {
    pub id:                      String,
    pub transaction_hash:        H256,
    pub space:                   SpaceId,
    pub kind:                    UriUpdateKind,
    pub from:                    String,
    pub to:                      String,
    pub updater:                 UserId,
    pub owner:                   UserId,
    pub created_at_timestamp:    U256,
    pub created_at_block_number: U256,
}
