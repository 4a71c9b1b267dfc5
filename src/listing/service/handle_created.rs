use {
    super::Service,
    crate::{
        kernel::{
            entities::{
                address_id,
                token_key,
            },
            error::HandlerError,
            events::{
                EventMeta,
                ListingCreated,
            },
            store::find_or_create_user,
        },
        listing::entities::{
            ListingStatus,
            ReserveListing,
        },
    },
    ethers_core::types::U256,
};

impl Service {
    /// Instantiate a listing in `Pending` with no approval, no bids and a
    /// resolved list currency. The referenced space may not exist yet
    /// (cross-contract auctions); the listing then simply carries no space
    /// reference.
    #[tracing::instrument(skip_all, fields(listing_id = %event.listing_id))]
    pub async fn handle_created(
        &self,
        event: &ListingCreated,
        meta: &EventMeta,
    ) -> Result<(), HandlerError> {
        let token_owner =
            find_or_create_user(self.store.as_ref(), &address_id(&event.token_owner)).await?;
        let intermediary =
            find_or_create_user(self.store.as_ref(), &address_id(&event.intermediary)).await?;
        let space = self.store.get_space(&event.token_id.to_string()).await?;
        let list_currency = self.currency.resolve_currency(event.list_currency).await?;

        let token_contract = address_id(&event.token_contract);
        let listing = ReserveListing {
            id: event.listing_id.to_string(),
            transaction_hash: meta.transaction_hash,
            token_id: event.token_id,
            token: token_key(&token_contract, event.token_id),
            token_contract,
            space: space.map(|space| space.id),
            approved: false,
            starts_at: event.starts_at,
            duration: event.duration,
            expected_end_timestamp: None,
            first_bid_time: U256::zero(),
            approved_timestamp: None,
            approved_block_number: None,
            list_price: event.list_price,
            list_type: event.list_type,
            intermediary_fee_percentage: event.intermediary_fee_percentage,
            token_owner: token_owner.id,
            intermediary: intermediary.id,
            list_currency: list_currency.id,
            status: ListingStatus::Pending,
            current_bid: None,
            finalized_at_timestamp: None,
            finalized_at_block_number: None,
            created_at_timestamp: meta.block_timestamp,
            created_at_block_number: meta.block_number,
        };
        self.store.save_listing(&listing).await?;
        tracing::info!(token = listing.token, "Created reserve listing");
        Ok(())
    }
}
