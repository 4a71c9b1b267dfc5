use {
    super::Service,
    crate::{
        kernel::{
            entities::{
                record_id,
                BidId,
                UserId,
            },
            error::HandlerError,
            events::EventMeta,
        },
        listing::entities::{
            BidType,
            ReserveListing,
            ReserveListingBid,
        },
    },
    ethers_core::types::U256,
};

impl Service {
    /// Create the new active bid for a listing and repoint `current_bid` at
    /// it. Callers must already have archived any previous active bid; this
    /// is the only place a bid record is ever created.
    pub(super) async fn place_bid(
        &self,
        listing: &mut ReserveListing,
        amount: U256,
        bidder: UserId,
        meta: &EventMeta,
    ) -> Result<BidId, HandlerError> {
        let bid = ReserveListingBid {
            id: record_id(&listing.id, &meta.transaction_hash, meta.log_index),
            transaction_hash: meta.transaction_hash,
            reserve_listing: listing.id.clone(),
            amount,
            bidder,
            bid_type: BidType::Active,
            created_at_timestamp: meta.block_timestamp,
            created_at_block_number: meta.block_number,
        };
        tracing::info!(bid = bid.id, amount = %amount, "Placing active bid");
        self.store.save_bid(&bid).await?;

        listing.current_bid = Some(bid.id.clone());
        self.store.save_listing(listing).await?;
        Ok(bid.id)
    }
}
