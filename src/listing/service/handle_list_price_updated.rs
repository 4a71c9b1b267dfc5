use {
    super::Service,
    crate::kernel::{
        error::HandlerError,
        events::{
            EventMeta,
            ListingListPriceUpdated,
        },
    },
};

impl Service {
    /// Overwrite the list price. No status change.
    #[tracing::instrument(skip_all, fields(listing_id = %event.listing_id))]
    pub async fn handle_list_price_updated(
        &self,
        event: &ListingListPriceUpdated,
        _meta: &EventMeta,
    ) -> Result<(), HandlerError> {
        let mut listing = self.load_listing(&event.listing_id.to_string()).await?;
        listing.list_price = event.list_price;
        self.store.save_listing(&listing).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::{
            kernel::store::Database,
            listing::service::tests::{
                created_listing,
                harness,
                meta_at,
            },
        },
        ethers_core::types::U256,
    };

    #[tokio::test]
    async fn price_update_changes_only_the_list_price() {
        let (service, store) = harness();
        created_listing(&service, U256::from(86_400)).await;
        let before = store.get_listing("1").await.unwrap().unwrap();

        let event = ListingListPriceUpdated {
            listing_id: U256::from(1),
            list_price: U256::from(250),
        };
        service
            .handle_list_price_updated(&event, &meta_at(2_000, 20, 0))
            .await
            .unwrap();

        let after = store.get_listing("1").await.unwrap().unwrap();
        assert_eq!(after.list_price, U256::from(250));

        let mut expected = before;
        expected.list_price = U256::from(250);
        assert_eq!(after, expected);
    }
}
