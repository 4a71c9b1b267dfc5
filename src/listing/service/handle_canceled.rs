use {
    super::Service,
    crate::kernel::{
        error::HandlerError,
        events::{
            EventMeta,
            ListingCanceled,
        },
    },
};

impl Service {
    /// Cancel a listing. Any standing bid is archived as `Refunded` first;
    /// a never-bid-on listing has no archival step. Finalization stamps are
    /// identical to the ended path, with the `Canceled` status literal. A
    /// listing that is already terminal is never finalized again.
    #[tracing::instrument(skip_all, fields(listing_id = %event.listing_id))]
    pub async fn handle_canceled(
        &self,
        event: &ListingCanceled,
        meta: &EventMeta,
    ) -> Result<(), HandlerError> {
        let mut listing = self.load_listing(&event.listing_id.to_string()).await?;
        if listing.status.is_terminal() {
            return Err(HandlerError::AlreadyFinalized(listing.id));
        }

        if listing.current_bid.is_some() {
            self.replace_bid(&listing, meta, false).await?;
        }

        listing.finalize(meta, true);
        self.store.save_listing(&listing).await?;
        Ok(())
    }
}
