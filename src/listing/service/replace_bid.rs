use {
    super::Service,
    crate::{
        kernel::{
            error::HandlerError,
            events::EventMeta,
        },
        listing::entities::{
            InactiveReserveListingBid,
            ReserveListing,
        },
    },
};

impl Service {
    /// Archive the listing's current active bid as an inactive record
    /// (`Final` when it won the auction, `Refunded` when it was superseded)
    /// and remove it from the active set. An active bid must exist; callers
    /// check `current_bid` first. The listing's `current_bid` pointer is
    /// deliberately left stale for the caller to overwrite.
    pub(super) async fn replace_bid(
        &self,
        listing: &ReserveListing,
        meta: &EventMeta,
        winning: bool,
    ) -> Result<(), HandlerError> {
        let bid_id = listing
            .current_bid
            .as_ref()
            .ok_or_else(|| HandlerError::MissingActiveBid(listing.id.clone()))?;
        let active = self
            .store
            .get_bid(bid_id)
            .await?
            .ok_or_else(|| HandlerError::MissingActiveBid(listing.id.clone()))?;

        let inactive = InactiveReserveListingBid::from_active(&active, winning, meta);
        tracing::info!(
            bid = inactive.id,
            bid_type = %inactive.bid_type,
            "Archiving active bid"
        );
        self.store.save_inactive_bid(&inactive).await?;
        self.store.remove_bid(&active.id).await?;
        Ok(())
    }
}
