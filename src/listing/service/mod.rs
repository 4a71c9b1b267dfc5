use {
    crate::{
        currency,
        kernel::{
            entities::ListingId,
            error::HandlerError,
            store::Database,
        },
        listing::entities::ReserveListing,
    },
    std::sync::Arc,
};

pub mod handle_approval_updated;
pub mod handle_bid;
pub mod handle_canceled;
pub mod handle_created;
pub mod handle_duration_extended;
pub mod handle_ended;
pub mod handle_list_price_updated;

mod place_bid;
mod replace_bid;

pub struct ServiceInner {
    store:    Arc<dyn Database>,
    currency: currency::service::Service,
}

/// The reserve-listing lifecycle manager and bid ledger. One handler per
/// contract event; every handler loads the listing first and treats an
/// absent record as a typed no-op failure for that event only.
#[derive(Clone)]
pub struct Service(Arc<ServiceInner>);

impl std::ops::Deref for Service {
    type Target = ServiceInner;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Service {
    pub fn new(store: Arc<dyn Database>, currency: currency::service::Service) -> Self {
        Self(Arc::new(ServiceInner { store, currency }))
    }
}

impl ServiceInner {
    async fn load_listing(&self, id: &ListingId) -> Result<ReserveListing, HandlerError> {
        self.store
            .get_listing(id)
            .await?
            .ok_or_else(|| HandlerError::MissingListing(id.clone()))
    }
}
