use {
    crate::{
        currency,
        kernel::{
            chain::ChainReader,
            error::HandlerError,
            events::{
                ChainEvent,
                EventRecord,
            },
            store::Database,
        },
        listing,
        space::{
            self,
            entities::UriUpdateKind,
        },
    },
    std::sync::Arc,
};

/// Totals for one replay run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReplayStats {
    pub applied: u64,
    pub failed:  u64,
}

/// Ties the per-contract services together and dispatches decoded events to
/// them, one at a time, in the order the host runtime delivers them.
pub struct Indexer {
    listing: listing::service::Service,
    space:   space::service::Service,
}

impl Indexer {
    pub fn new(store: Arc<dyn Database>, chain: Arc<dyn ChainReader>) -> Self {
        let currency = currency::service::Service::new(store.clone(), chain.clone());
        Self {
            listing: listing::service::Service::new(store.clone(), currency),
            space:   space::service::Service::new(store, chain),
        }
    }

    /// Apply one decoded event. A failure is scoped to the entity the event
    /// touches and surfaces as an error result; it never poisons the
    /// services for subsequent events.
    #[tracing::instrument(
        skip_all,
        fields(event = record.event.name(), block = %record.meta.block_number)
    )]
    pub async fn apply(&self, record: &EventRecord) -> Result<(), HandlerError> {
        let meta = &record.meta;
        match &record.event {
            ChainEvent::ListingCreated(event) => self.listing.handle_created(event, meta).await,
            ChainEvent::ListingApprovalUpdated(event) => {
                self.listing.handle_approval_updated(event, meta).await
            }
            ChainEvent::ListingDropApprovalUpdated(event) => {
                self.listing.handle_drop_approval_updated(event, meta).await
            }
            ChainEvent::ListingListPriceUpdated(event) => {
                self.listing.handle_list_price_updated(event, meta).await
            }
            ChainEvent::ListingBid(event) => self.listing.handle_bid(event, meta).await,
            ChainEvent::ListingDurationExtended(event) => {
                self.listing.handle_duration_extended(event, meta).await
            }
            ChainEvent::ListingEnded(event) => self.listing.handle_ended(event, meta).await,
            ChainEvent::ListingCanceled(event) => self.listing.handle_canceled(event, meta).await,
            ChainEvent::SpaceTransfer(event) => self.space.handle_transfer(event, meta).await,
            ChainEvent::SpaceApproval(event) => self.space.handle_approval(event, meta).await,
            ChainEvent::SpaceApprovalForAll(event) => {
                self.space.handle_approval_for_all(event, meta).await
            }
            ChainEvent::TokenUriUpdated(event) => {
                self.space
                    .handle_uri_updated(
                        UriUpdateKind::Content,
                        event.token_id,
                        event.owner,
                        &event.uri,
                        meta,
                    )
                    .await
            }
            ChainEvent::TokenMetadataUriUpdated(event) => {
                self.space
                    .handle_uri_updated(
                        UriUpdateKind::Metadata,
                        event.token_id,
                        event.owner,
                        &event.uri,
                        meta,
                    )
                    .await
            }
        }
    }

    /// Replay a stream of decoded events in delivery order. Handler failures
    /// are logged and counted; the stream itself always runs to the end.
    pub async fn run(&self, records: impl IntoIterator<Item = EventRecord>) -> ReplayStats {
        let mut stats = ReplayStats::default();
        for record in records {
            match self.apply(&record).await {
                Ok(()) => stats.applied += 1,
                Err(error) => {
                    stats.failed += 1;
                    tracing::error!(
                        event = record.event.name(),
                        block = %record.meta.block_number,
                        %error,
                        "Event handler failed"
                    );
                }
            }
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::{
            kernel::{
                chain::MockChainReader,
                entities::address_id,
                events::{
                    EventMeta,
                    ListingApprovalUpdated,
                    ListingBid,
                    ListingCanceled,
                    ListingCreated,
                    ListingEnded,
                },
                store::InMemoryStore,
            },
            listing::entities::{
                BidType,
                ListingStatus,
            },
        },
        ethers_core::types::{
            Address,
            H256,
            U256,
        },
        std::sync::Arc,
    };

    fn record(event: ChainEvent, timestamp: u64, block: u64) -> EventRecord {
        EventRecord {
            meta: EventMeta {
                address:          Address::repeat_byte(0xFE),
                transaction_hash: H256::repeat_byte(block as u8),
                log_index:        U256::zero(),
                block_timestamp:  U256::from(timestamp),
                block_number:     U256::from(block),
            },
            event,
        }
    }

    fn created(listing_id: u64) -> ChainEvent {
        ChainEvent::ListingCreated(ListingCreated {
            listing_id: U256::from(listing_id),
            token_id: U256::from(42),
            token_contract: Address::repeat_byte(0xAA),
            token_owner: Address::repeat_byte(0xB0),
            intermediary: Address::repeat_byte(0xB1),
            starts_at: U256::from(500),
            duration: U256::from(86_400),
            list_price: U256::from(100),
            list_type: 1,
            intermediary_fee_percentage: 5,
            list_currency: Address::zero(),
        })
    }

    fn approved(listing_id: u64) -> ChainEvent {
        ChainEvent::ListingApprovalUpdated(ListingApprovalUpdated {
            listing_id: U256::from(listing_id),
            approved:   true,
        })
    }

    fn bid(listing_id: u64, bidder: Address, amount: u64, first_bid: bool) -> ChainEvent {
        ChainEvent::ListingBid(ListingBid {
            listing_id: U256::from(listing_id),
            sender: bidder,
            value: U256::from(amount),
            first_bid,
        })
    }

    fn harness() -> (Indexer, Arc<InMemoryStore>) {
        let store = Arc::new(InMemoryStore::default());
        (
            Indexer::new(store.clone(), Arc::new(MockChainReader::new())),
            store,
        )
    }

    #[tokio::test]
    async fn creation_projects_a_pending_listing_with_native_currency() {
        let (indexer, store) = harness();

        let stats = indexer.run([record(created(1), 1_000, 10)]).await;
        assert_eq!(stats, ReplayStats { applied: 1, failed: 0 });

        let listing = store.get_listing("1").await.unwrap().unwrap();
        assert_eq!(listing.status, ListingStatus::Pending);
        assert!(!listing.approved);
        assert_eq!(listing.first_bid_time, U256::zero());
        assert_eq!(
            listing.token,
            format!("{}-42", address_id(&Address::repeat_byte(0xAA)))
        );

        let currency = store
            .get_currency(&listing.list_currency)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(currency.symbol, "ETH");
        assert_eq!(currency.decimals, Some(18));
    }

    #[tokio::test]
    async fn full_lifecycle_keeps_one_active_bid_and_archives_the_rest() {
        let (indexer, store) = harness();
        let first_bidder = Address::repeat_byte(0xB2);
        let second_bidder = Address::repeat_byte(0xB3);

        let history = [
            record(created(1), 1_000, 10),
            record(approved(1), 1_500, 15),
            record(bid(1, first_bidder, 50, true), 2_000, 20),
            record(bid(1, second_bidder, 75, false), 3_000, 30),
            record(ChainEvent::ListingEnded(ListingEnded {
                listing_id: U256::from(1),
            }), 4_000, 40),
        ];
        let stats = indexer.run(history).await;
        assert_eq!(stats, ReplayStats { applied: 5, failed: 0 });

        let listing = store.get_listing("1").await.unwrap().unwrap();
        assert_eq!(listing.status, ListingStatus::Finished);
        assert_eq!(listing.first_bid_time, U256::from(2_000));
        assert_eq!(listing.expected_end_timestamp, Some(U256::from(88_400)));
        assert_eq!(listing.finalized_at_timestamp, Some(U256::from(4_000)));

        // The archive holds both bids exactly once; the active set is empty.
        assert!(store.active_bids().await.is_empty());
        let mut archived = store.inactive_bids().await;
        archived.sort_by_key(|bid| bid.amount);
        assert_eq!(archived.len(), 2);
        assert_eq!(archived[0].bid_type, BidType::Refunded);
        assert_eq!(archived[0].bidder, address_id(&first_bidder));
        assert_eq!(archived[1].bid_type, BidType::Final);
        assert_eq!(archived[1].bidder, address_id(&second_bidder));
    }

    #[tokio::test]
    async fn cancel_without_bids_finalizes_without_archival() {
        let (indexer, store) = harness();

        let history = [
            record(created(7), 1_000, 10),
            record(ChainEvent::ListingCanceled(ListingCanceled {
                listing_id: U256::from(7),
            }), 2_000, 20),
        ];
        let stats = indexer.run(history).await;
        assert_eq!(stats.failed, 0);

        let listing = store.get_listing("7").await.unwrap().unwrap();
        assert_eq!(listing.status, ListingStatus::Canceled);
        assert_eq!(listing.finalized_at_timestamp, Some(U256::from(2_000)));
        assert!(store.inactive_bids().await.is_empty());
    }

    #[tokio::test]
    async fn a_failing_event_does_not_halt_the_stream() {
        let (indexer, store) = harness();

        let history = [
            // Bid on a listing that was never created: logged and skipped.
            record(bid(9, Address::repeat_byte(0xB2), 50, true), 900, 9),
            record(created(1), 1_000, 10),
            record(approved(1), 1_500, 15),
        ];
        let stats = indexer.run(history).await;
        assert_eq!(stats, ReplayStats { applied: 2, failed: 1 });

        let listing = store.get_listing("1").await.unwrap().unwrap();
        assert_eq!(listing.status, ListingStatus::Active);
        assert!(store.get_listing("9").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn status_never_regresses_from_a_terminal_state() {
        let (indexer, store) = harness();

        let history = [
            record(created(1), 1_000, 10),
            record(approved(1), 1_500, 15),
            record(ChainEvent::ListingCanceled(ListingCanceled {
                listing_id: U256::from(1),
            }), 2_000, 20),
            // Late approval after cancelation must not reactivate.
            record(approved(1), 2_500, 25),
        ];
        indexer.run(history).await;

        let listing = store.get_listing("1").await.unwrap().unwrap();
        assert_eq!(listing.status, ListingStatus::Canceled);
    }

    #[tokio::test]
    async fn ended_after_cancelation_does_not_flip_the_terminal_status() {
        let (indexer, store) = harness();

        let history = [
            record(created(1), 1_000, 10),
            record(approved(1), 1_500, 15),
            record(ChainEvent::ListingCanceled(ListingCanceled {
                listing_id: U256::from(1),
            }), 2_000, 20),
            // A late end event for the canceled listing: rejected, not a
            // second finalization.
            record(ChainEvent::ListingEnded(ListingEnded {
                listing_id: U256::from(1),
            }), 3_000, 30),
        ];
        let stats = indexer.run(history).await;
        assert_eq!(stats, ReplayStats { applied: 3, failed: 1 });

        let listing = store.get_listing("1").await.unwrap().unwrap();
        assert_eq!(listing.status, ListingStatus::Canceled);
        assert_eq!(listing.finalized_at_timestamp, Some(U256::from(2_000)));
    }
}
