#[cfg(test)]
use mockall::automock;
use {
    crate::{
        currency::entities::Currency,
        kernel::entities::User,
        listing::entities::{
            InactiveReserveListingBid,
            ReserveListing,
            ReserveListingBid,
        },
        space::entities::{
            Space,
            Transfer,
            UriUpdate,
        },
    },
    async_trait::async_trait,
    serde::Serialize,
    std::{
        collections::HashMap,
        fmt::Debug,
    },
    tokio::sync::RwLock,
};

/// Keyed load/save/remove over typed records. `save` is a full-record upsert
/// and the last write for a given key wins; there are no transactions across
/// records. The host's sequential dispatch is the only concurrency control.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Database: Debug + Send + Sync + 'static {
    async fn get_user(&self, id: &str) -> anyhow::Result<Option<User>>;
    async fn save_user(&self, user: &User) -> anyhow::Result<()>;

    async fn get_currency(&self, id: &str) -> anyhow::Result<Option<Currency>>;
    async fn save_currency(&self, currency: &Currency) -> anyhow::Result<()>;

    async fn get_space(&self, id: &str) -> anyhow::Result<Option<Space>>;
    async fn save_space(&self, space: &Space) -> anyhow::Result<()>;

    async fn get_listing(&self, id: &str) -> anyhow::Result<Option<ReserveListing>>;
    async fn save_listing(&self, listing: &ReserveListing) -> anyhow::Result<()>;

    async fn get_bid(&self, id: &str) -> anyhow::Result<Option<ReserveListingBid>>;
    async fn save_bid(&self, bid: &ReserveListingBid) -> anyhow::Result<()>;
    async fn remove_bid(&self, id: &str) -> anyhow::Result<()>;

    async fn get_inactive_bid(&self, id: &str)
        -> anyhow::Result<Option<InactiveReserveListingBid>>;
    async fn save_inactive_bid(&self, bid: &InactiveReserveListingBid) -> anyhow::Result<()>;

    async fn save_transfer(&self, transfer: &Transfer) -> anyhow::Result<()>;
    async fn save_uri_update(&self, update: &UriUpdate) -> anyhow::Result<()>;
}

/// Load the user for `id`, creating and persisting an empty record on first
/// reference. Users are never deleted.
pub async fn find_or_create_user(store: &dyn Database, id: &str) -> anyhow::Result<User> {
    if let Some(user) = store.get_user(id).await? {
        return Ok(user);
    }
    let user = User::new(id.to_string());
    store.save_user(&user).await?;
    Ok(user)
}

/// In-memory entity store backing the replay driver and the tests.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    users:         RwLock<HashMap<String, User>>,
    currencies:    RwLock<HashMap<String, Currency>>,
    spaces:        RwLock<HashMap<String, Space>>,
    listings:      RwLock<HashMap<String, ReserveListing>>,
    bids:          RwLock<HashMap<String, ReserveListingBid>>,
    inactive_bids: RwLock<HashMap<String, InactiveReserveListingBid>>,
    transfers:     RwLock<HashMap<String, Transfer>>,
    uri_updates:   RwLock<HashMap<String, UriUpdate>>,
}

#[async_trait]
impl Database for InMemoryStore {
    async fn get_user(&self, id: &str) -> anyhow::Result<Option<User>> {
        Ok(self.users.read().await.get(id).cloned())
    }

    async fn save_user(&self, user: &User) -> anyhow::Result<()> {
        self.users
            .write()
            .await
            .insert(user.id.clone(), user.clone());
        Ok(())
    }

    async fn get_currency(&self, id: &str) -> anyhow::Result<Option<Currency>> {
        Ok(self.currencies.read().await.get(id).cloned())
    }

    async fn save_currency(&self, currency: &Currency) -> anyhow::Result<()> {
        self.currencies
            .write()
            .await
            .insert(currency.id.clone(), currency.clone());
        Ok(())
    }

    async fn get_space(&self, id: &str) -> anyhow::Result<Option<Space>> {
        Ok(self.spaces.read().await.get(id).cloned())
    }

    async fn save_space(&self, space: &Space) -> anyhow::Result<()> {
        self.spaces
            .write()
            .await
            .insert(space.id.clone(), space.clone());
        Ok(())
    }

    async fn get_listing(&self, id: &str) -> anyhow::Result<Option<ReserveListing>> {
        Ok(self.listings.read().await.get(id).cloned())
    }

    async fn save_listing(&self, listing: &ReserveListing) -> anyhow::Result<()> {
        self.listings
            .write()
            .await
            .insert(listing.id.clone(), listing.clone());
        Ok(())
    }

    async fn get_bid(&self, id: &str) -> anyhow::Result<Option<ReserveListingBid>> {
        Ok(self.bids.read().await.get(id).cloned())
    }

    async fn save_bid(&self, bid: &ReserveListingBid) -> anyhow::Result<()> {
        self.bids.write().await.insert(bid.id.clone(), bid.clone());
        Ok(())
    }

    async fn remove_bid(&self, id: &str) -> anyhow::Result<()> {
        self.bids.write().await.remove(id);
        Ok(())
    }

    async fn get_inactive_bid(
        &self,
        id: &str,
    ) -> anyhow::Result<Option<InactiveReserveListingBid>> {
        Ok(self.inactive_bids.read().await.get(id).cloned())
    }

    async fn save_inactive_bid(&self, bid: &InactiveReserveListingBid) -> anyhow::Result<()> {
        self.inactive_bids
            .write()
            .await
            .insert(bid.id.clone(), bid.clone());
        Ok(())
    }

    async fn save_transfer(&self, transfer: &Transfer) -> anyhow::Result<()> {
        self.transfers
            .write()
            .await
            .insert(transfer.id.clone(), transfer.clone());
        Ok(())
    }

    async fn save_uri_update(&self, update: &UriUpdate) -> anyhow::Result<()> {
        self.uri_updates
            .write()
            .await
            .insert(update.id.clone(), update.clone());
        Ok(())
    }
}

/// Serializable view of everything the store holds, for the `--dump` flag.
#[derive(Debug, Serialize)]
pub struct StoreSnapshot {
    pub users:         Vec<User>,
    pub currencies:    Vec<Currency>,
    pub spaces:        Vec<Space>,
    pub listings:      Vec<ReserveListing>,
    pub bids:          Vec<ReserveListingBid>,
    pub inactive_bids: Vec<InactiveReserveListingBid>,
    pub transfers:     Vec<Transfer>,
    pub uri_updates:   Vec<UriUpdate>,
}

impl InMemoryStore {
    pub async fn active_bids(&self) -> Vec<ReserveListingBid> {
        self.bids.read().await.values().cloned().collect()
    }

    pub async fn inactive_bids(&self) -> Vec<InactiveReserveListingBid> {
        self.inactive_bids.read().await.values().cloned().collect()
    }

    pub async fn snapshot(&self) -> StoreSnapshot {
        let mut snapshot = StoreSnapshot {
            users:         self.users.read().await.values().cloned().collect(),
            currencies:    self.currencies.read().await.values().cloned().collect(),
            spaces:        self.spaces.read().await.values().cloned().collect(),
            listings:      self.listings.read().await.values().cloned().collect(),
            bids:          self.active_bids().await,
            inactive_bids: self.inactive_bids().await,
            transfers:     self.transfers.read().await.values().cloned().collect(),
            uri_updates:   self.uri_updates.read().await.values().cloned().collect(),
        };
        snapshot.users.sort_by(|a, b| a.id.cmp(&b.id));
        snapshot.currencies.sort_by(|a, b| a.id.cmp(&b.id));
        snapshot.spaces.sort_by(|a, b| a.id.cmp(&b.id));
        snapshot.listings.sort_by(|a, b| a.id.cmp(&b.id));
        snapshot.bids.sort_by(|a, b| a.id.cmp(&b.id));
        snapshot.inactive_bids.sort_by(|a, b| a.id.cmp(&b.id));
        snapshot.transfers.sort_by(|a, b| a.id.cmp(&b.id));
        snapshot.uri_updates.sort_by(|a, b| a.id.cmp(&b.id));
        snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn save_is_a_full_overwrite() {
        let store = InMemoryStore::default();
        let mut user = User::new("0xabc".to_string());
        user.authorized_users.push("0xdef".to_string());
        store.save_user(&user).await.unwrap();

        user.authorized_users.clear();
        store.save_user(&user).await.unwrap();

        let loaded = store.get_user("0xabc").await.unwrap().unwrap();
        assert!(loaded.authorized_users.is_empty());
    }

    #[tokio::test]
    async fn find_or_create_user_is_idempotent() {
        let store = InMemoryStore::default();
        let first = find_or_create_user(&store, "0xabc").await.unwrap();
        let second = find_or_create_user(&store, "0xabc").await.unwrap();
        assert_eq!(first, second);
        assert_eq!(store.snapshot().await.users.len(), 1);
    }
}
