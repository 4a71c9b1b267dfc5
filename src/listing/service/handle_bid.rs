use {
    super::Service,
    crate::kernel::{
        entities::address_id,
        error::HandlerError,
        events::{
            EventMeta,
            ListingBid,
        },
        store::find_or_create_user,
    },
};

impl Service {
    /// Place a bid. The first bid stamps `first_bid_time` and derives the
    /// expected end of the auction; every later bid first archives the
    /// standing bid as refunded. Exactly one active bid exists afterwards.
    #[tracing::instrument(skip_all, fields(listing_id = %event.listing_id, amount = %event.value))]
    pub async fn handle_bid(&self, event: &ListingBid, meta: &EventMeta) -> Result<(), HandlerError> {
        let mut listing = self.load_listing(&event.listing_id.to_string()).await?;

        if event.first_bid {
            listing.set_first_bid_time(meta.block_timestamp);
            self.store.save_listing(&listing).await?;
        } else {
            self.replace_bid(&listing, meta, false).await?;
        }

        let bidder = find_or_create_user(self.store.as_ref(), &address_id(&event.sender)).await?;
        self.place_bid(&mut listing, event.value, bidder.id, meta)
            .await?;
        Ok(())
    }
}
