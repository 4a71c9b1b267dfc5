use {
    super::Service,
    crate::kernel::{
        error::HandlerError,
        events::{
            EventMeta,
            ListingEnded,
        },
    },
};

impl Service {
    /// Finalize an auction that ran to completion: the last active bid is
    /// the economic winner and is archived as `Final` before the listing
    /// transitions to `Finished`. An end event without any prior bid is an
    /// upstream ordering anomaly; the listing is still finalized. A listing
    /// that is already terminal is never finalized again.
    #[tracing::instrument(skip_all, fields(listing_id = %event.listing_id))]
    pub async fn handle_ended(
        &self,
        event: &ListingEnded,
        meta: &EventMeta,
    ) -> Result<(), HandlerError> {
        let mut listing = self.load_listing(&event.listing_id.to_string()).await?;
        if listing.status.is_terminal() {
            return Err(HandlerError::AlreadyFinalized(listing.id));
        }

        if listing.current_bid.is_some() {
            self.replace_bid(&listing, meta, true).await?;
        } else {
            tracing::warn!(listing = listing.id, "Listing ended without any bid");
        }

        listing.finalize(meta, false);
        self.store.save_listing(&listing).await?;
        Ok(())
    }
}
