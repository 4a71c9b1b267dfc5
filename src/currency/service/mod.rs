use {
    crate::kernel::{
        chain::ChainReader,
        store::Database,
    },
    std::sync::Arc,
};

pub mod resolve_currency;

pub struct ServiceInner {
    store: Arc<dyn Database>,
    chain: Arc<dyn ChainReader>,
}

/// Metadata resolver: finds-or-creates Currency records, reading
/// name/symbol/decimals from the chain with fixed-width fallbacks.
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
