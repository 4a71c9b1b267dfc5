use {
    crate::kernel::{
        chain::ChainReader,
        store::Database,
    },
    std::sync::Arc,
};

pub mod handle_approval;
pub mod handle_approval_for_all;
pub mod handle_transfer;
pub mod handle_uri_updated;
pub mod resolve_bid_shares;

pub struct ServiceInner {
    store: Arc<dyn Database>,
    chain: Arc<dyn ChainReader>,
}

/// Handlers for the space (asset) contract events plus the bid-share
/// resolver used at mint time.
#[derive(Clone)]
pub struct Service(Arc<ServiceInner>);

impl std::ops::Deref for Service {
    type Target = ServiceInner;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Service {
    pub fn new(store: Arc<dyn Database>, chain: Arc<dyn ChainReader>) -> Self {
        Self(Arc::new(ServiceInner { store, chain }))
    }
}
