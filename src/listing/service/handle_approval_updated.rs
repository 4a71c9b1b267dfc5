use {
    super::Service,
    crate::{
        kernel::{
            error::HandlerError,
            events::{
                EventMeta,
                ListingApprovalUpdated,
                ListingDropApprovalUpdated,
            },
        },
        listing::entities::ListingStatus,
    },
    ethers_core::types::U256,
};

impl Service {
    #[tracing::instrument(skip_all, fields(listing_id = %event.listing_id))]
    pub async fn handle_approval_updated(
        &self,
        event: &ListingApprovalUpdated,
        meta: &EventMeta,
    ) -> Result<(), HandlerError> {
        self.apply_approval(&event.listing_id.to_string(), event.approved, None, meta)
            .await
    }

    /// Drop variant: identical to a plain approval update, but the event
    /// also reveals the corrected start time of the listing.
    #[tracing::instrument(skip_all, fields(listing_id = %event.listing_id))]
    pub async fn handle_drop_approval_updated(
        &self,
        event: &ListingDropApprovalUpdated,
        meta: &EventMeta,
    ) -> Result<(), HandlerError> {
        self.apply_approval(
            &event.listing_id.to_string(),
            event.approved,
            Some(event.starts_at),
            meta,
        )
        .await
    }

    async fn apply_approval(
        &self,
        listing_id: &str,
        approved: bool,
        starts_at: Option<U256>,
        meta: &EventMeta,
    ) -> Result<(), HandlerError> {
        let mut listing = self.load_listing(&listing_id.to_string()).await?;

        listing.approved = approved;
        // Terminal states never regress, whatever arrives late.
        if !listing.status.is_terminal() {
            listing.status = ListingStatus::Active;
        }
        listing.approved_timestamp = Some(meta.block_timestamp);
        listing.approved_block_number = Some(meta.block_number);
        if let Some(starts_at) = starts_at {
            listing.starts_at = starts_at;
        }

        self.store.save_listing(&listing).await?;
        Ok(())
    }
}
