use {
    super::Service,
    crate::kernel::{
        error::HandlerError,
        events::{
            EventMeta,
            ListingDurationExtended,
        },
    },
};

impl Service {
    /// Overwrite the duration and recompute the expected end timestamp from
    /// the first bid time.
    #[tracing::instrument(skip_all, fields(listing_id = %event.listing_id))]
    pub async fn handle_duration_extended(
        &self,
        event: &ListingDurationExtended,
        _meta: &EventMeta,
    ) -> Result<(), HandlerError> {
        let mut listing = self.load_listing(&event.listing_id.to_string()).await?;
        listing.extend_duration(event.duration);
        self.store.save_listing(&listing).await?;
        Ok(())
    }
}
