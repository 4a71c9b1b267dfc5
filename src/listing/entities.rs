use {
    crate::kernel::{
        entities::{
            BidId,
            CurrencyId,
            ListingId,
            SpaceId,
            UserId,
        },
        events::EventMeta,
    },
    ethers_core::types::{
        H256,
        U256,
    },
    serde::Serialize,
    strum::Display,
};

/// Lifecycle of a reserve listing. Transitions are monotonic: `Pending` to
/// `Active` on approval, then to exactly one of the terminal states.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Display)]
pub enum ListingStatus {
    Pending,
    Active,
    Finished,
    Canceled,
}

impl ListingStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, ListingStatus::Finished | ListingStatus::Canceled)
    }
}

/// Why a bid record exists: the single standing bid of a listing, a bid that
/// was outbid and refunded, or the winning bid of a finished auction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Display)]
pub enum BidType {
    Active,
    Refunded,
    Final,
}

/// A time-bounded reserve auction over one tokenized asset, keyed by the
/// auction id assigned by the source contract. Never deleted.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ReserveListing {
    pub id:                          ListingId,
    pub transaction_hash:            H256,
    pub token_id:                    U256,
    pub token_contract:              String,
    /// Composite `tokenContract-tokenId` key joining this listing to its
    /// asset across contracts.
    pub token:                       String,
    /// Absent when the asset record did not exist at creation time, e.g.
    /// for cross-contract auctions. Not an error.
    pub space:                       Option<SpaceId>,
    pub approved:                    bool,
    pub starts_at:                   U256,
    pub duration:                    U256,
    pub expected_end_timestamp:      Option<U256>,
    /// Zero exactly until the first bid; set at most once.
    pub first_bid_time:              U256,
    pub approved_timestamp:          Option<U256>,
    pub approved_block_number:       Option<U256>,
    pub list_price:                  U256,
    pub list_type:                   u8,
    pub intermediary_fee_percentage: u8,
    pub token_owner:                 UserId,
    pub intermediary:                UserId,
    pub list_currency:               CurrencyId,
    pub status:                      ListingStatus,
    /// Either null or the id of exactly one live active-bid record. Left
    /// stale by bid archival until the next placement or finalization
    /// overwrites it.
    pub current_bid:                 Option<BidId>,
    pub finalized_at_timestamp:      Option<U256>,
    pub finalized_at_block_number:   Option<U256>,
    pub created_at_timestamp:        U256,
    pub created_at_block_number:     U256,
}

impl ReserveListing {
    /// Stamp the first bid time and derive the expected end of the auction.
    pub fn set_first_bid_time(&mut self, time: U256) {
        self.first_bid_time = time;
        self.expected_end_timestamp = Some(self.duration + time);
    }

    /// Overwrite the duration and recompute the expected end from the first
    /// bid time.
    pub fn extend_duration(&mut self, duration: U256) {
        self.duration = duration;
        self.expected_end_timestamp = Some(self.first_bid_time + duration);
    }

    /// Terminal transition shared by the ended and canceled paths.
    pub fn finalize(&mut self, meta: &EventMeta, canceled: bool) {
        self.finalized_at_timestamp = Some(meta.block_timestamp);
        self.finalized_at_block_number = Some(meta.block_number);
        self.status = if canceled {
            ListingStatus::Canceled
        } else {
            ListingStatus::Finished
        };
    }
}

/// The single standing bid of a listing, keyed `listingId-txHash-logIndex`.
/// Converted to an inactive record and removed whenever superseded.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ReserveListingBid {
    pub id:                      BidId,
    pub transaction_hash:        H256,
    pub reserve_listing:         ListingId,
    pub amount:                  U256,
    pub bidder:                  UserId,
    pub bid_type:                BidType,
    pub created_at_timestamp:    U256,
    pub created_at_block_number: U256,
}

/// Append-only archive record of a superseded or winning bid. Never mutated
/// once written.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct InactiveReserveListingBid {
    pub id:                           BidId,
    pub transaction_hash:             H256,
    pub reserve_listing:              ListingId,
    pub amount:                       U256,
    pub bidder:                       UserId,
    pub bid_type:                     BidType,
    pub created_at_timestamp:         U256,
    pub created_at_block_number:      U256,
    pub bid_inactivated_at_timestamp: U256,
    pub bid_inactivated_at_block_number: U256,
}

impl InactiveReserveListingBid {
    /// Archive an active bid under the same id, tagged `Final` for the
    /// auction winner and `Refunded` for a superseded bid.
    pub fn from_active(active: &ReserveListingBid, winning: bool, meta: &EventMeta) -> Self {
        Self {
            id: active.id.clone(),
            transaction_hash: active.transaction_hash,
            reserve_listing: active.reserve_listing.clone(),
            amount: active.amount,
            bidder: active.bidder.clone(),
            bid_type: if winning {
                BidType::Final
            } else {
                BidType::Refunded
            },
            created_at_timestamp: active.created_at_timestamp,
            created_at_block_number: active.created_at_block_number,
            bid_inactivated_at_timestamp: meta.block_timestamp,
            bid_inactivated_at_block_number: meta.block_number,
        }
    }
}
