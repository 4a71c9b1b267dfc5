use {
    ethers_core::types::{
        Address,
        H256,
        U256,
    },
    serde::{
        Deserialize,
        Serialize,
    },
};

/// Envelope carried by every decoded log: the emitting contract plus the
/// chain-level identifiers used to build composite record ids and to stamp
/// time/ordering fields. The host runtime guarantees delivery in ascending
/// (block, transaction, log) order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EventMeta {
    pub address:          Address,
    pub transaction_hash: H256,
    pub log_index:        U256,
    pub block_timestamp:  U256,
    pub block_number:     U256,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ListingCreated {
    pub listing_id:                  U256,
    pub token_id:                    U256,
    pub token_contract:              Address,
    pub token_owner:                 Address,
    pub intermediary:                Address,
    pub starts_at:                   U256,
    pub duration:                    U256,
    pub list_price:                  U256,
    pub list_type:                   u8,
    pub intermediary_fee_percentage: u8,
    pub list_currency:               Address,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ListingApprovalUpdated {
    pub listing_id: U256,
    pub approved:   bool,
}

/// Drop variant of the approval event: additionally reveals the corrected
/// start time of the listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ListingDropApprovalUpdated {
    pub listing_id: U256,
    pub approved:   bool,
    pub starts_at:  U256,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ListingListPriceUpdated {
    pub listing_id: U256,
    pub list_price: U256,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ListingBid {
    pub listing_id: U256,
    pub sender:     Address,
    pub value:      U256,
    pub first_bid:  bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ListingDurationExtended {
    pub listing_id: U256,
    pub duration:   U256,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ListingEnded {
    pub listing_id: U256,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ListingCanceled {
    pub listing_id: U256,
}

/// ERC-721 transfer on the space contract. A transfer from the zero address
/// is a mint, a transfer to it a burn.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpaceTransfer {
    pub from:     Address,
    pub to:       Address,
    pub token_id: U256,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpaceApproval {
    pub owner:    Address,
    pub approved: Address,
    pub token_id: U256,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpaceApprovalForAll {
    pub owner:    Address,
    pub operator: Address,
    pub approved: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TokenUriUpdated {
    pub token_id: U256,
    pub owner:    Address,
    pub uri:      String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TokenMetadataUriUpdated {
    pub token_id: U256,
    pub owner:    Address,
    pub uri:      String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "params", rename_all = "snake_case")]
pub enum ChainEvent {
    ListingCreated(ListingCreated),
    ListingApprovalUpdated(ListingApprovalUpdated),
    ListingDropApprovalUpdated(ListingDropApprovalUpdated),
    ListingListPriceUpdated(ListingListPriceUpdated),
    ListingBid(ListingBid),
    ListingDurationExtended(ListingDurationExtended),
    ListingEnded(ListingEnded),
    ListingCanceled(ListingCanceled),
    SpaceTransfer(SpaceTransfer),
    SpaceApproval(SpaceApproval),
    SpaceApprovalForAll(SpaceApprovalForAll),
    TokenUriUpdated(TokenUriUpdated),
    TokenMetadataUriUpdated(TokenMetadataUriUpdated),
}

impl ChainEvent {
    /// Short name used in dispatch logging.
    pub fn name(&self) -> &'static str {
        match self {
            ChainEvent::ListingCreated(_) => "ListingCreated",
            ChainEvent::ListingApprovalUpdated(_) => "ListingApprovalUpdated",
            ChainEvent::ListingDropApprovalUpdated(_) => "ListingDropApprovalUpdated",
            ChainEvent::ListingListPriceUpdated(_) => "ListingListPriceUpdated",
            ChainEvent::ListingBid(_) => "ListingBid",
            ChainEvent::ListingDurationExtended(_) => "ListingDurationExtended",
            ChainEvent::ListingEnded(_) => "ListingEnded",
            ChainEvent::ListingCanceled(_) => "ListingCanceled",
            ChainEvent::SpaceTransfer(_) => "SpaceTransfer",
            ChainEvent::SpaceApproval(_) => "SpaceApproval",
            ChainEvent::SpaceApprovalForAll(_) => "SpaceApprovalForAll",
            ChainEvent::TokenUriUpdated(_) => "TokenUriUpdated",
            ChainEvent::TokenMetadataUriUpdated(_) => "TokenMetadataUriUpdated",
        }
    }
}

/// One line of the decoded-event replay stream.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    pub meta:  EventMeta,
    #[serde(flatten)]
    pub event: ChainEvent,
}
