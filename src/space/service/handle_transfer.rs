use {
    super::Service,
    crate::{
        kernel::{
            entities::{
                address_id,
                record_id,
            },
            error::HandlerError,
            events::{
                EventMeta,
                SpaceTransfer,
            },
            store::find_or_create_user,
        },
        space::entities::{
            Space,
            Transfer,
        },
    },
    ethers_core::types::Address,
};

impl Service {
    /// Transfers on the space contract: a transfer from the zero address
    /// mints the space, one to the zero address burns it, anything else
    /// moves ownership and clears the approval delegate.
    #[tracing::instrument(skip_all, fields(token_id = %event.token_id))]
    pub async fn handle_transfer(
        &self,
        event: &SpaceTransfer,
        meta: &EventMeta,
    ) -> Result<(), HandlerError> {
        let from_user = find_or_create_user(self.store.as_ref(), &address_id(&event.from)).await?;
        let to_user = find_or_create_user(self.store.as_ref(), &address_id(&event.to)).await?;

        if event.from.is_zero() {
            return self.handle_mint(event, meta).await;
        }

        let token_id = event.token_id.to_string();
        let mut space = self
            .store
            .get_space(&token_id)
            .await?
            .ok_or_else(|| HandlerError::MissingSpace(token_id.clone()))?;

        if event.to.is_zero() {
            space.prev_owner = address_id(&Address::zero());
            space.burned_at_timestamp = Some(meta.block_timestamp);
            space.burned_at_block_number = Some(meta.block_number);
        }

        space.owner = to_user.id.clone();
        space.approved = None;
        self.store.save_space(&space).await?;

        let transfer = Transfer {
            id: record_id(&token_id, &meta.transaction_hash, meta.log_index),
            transaction_hash: meta.transaction_hash,
            space: space.id,
            from: from_user.id,
            to: to_user.id,
            created_at_timestamp: meta.block_timestamp,
            created_at_block_number: meta.block_number,
        };
        self.store.save_transfer(&transfer).await?;
        Ok(())
    }

    /// Mint path: reads the token's URIs, hashes, land details and pin
    /// record off the emitting contract, resolves its bid shares, and
    /// creates the Space with creator/owner/prevOwner all set to the minter.
    async fn handle_mint(
        &self,
        event: &SpaceTransfer,
        meta: &EventMeta,
    ) -> Result<(), HandlerError> {
        let creator = find_or_create_user(self.store.as_ref(), &address_id(&event.to)).await?;
        let zero_user =
            find_or_create_user(self.store.as_ref(), &address_id(&Address::zero())).await?;

        let contract = meta.address;
        let token_id = event.token_id;

        let content_uri = self
            .chain
            .token_uri(contract, token_id)
            .await
            .map_err(|_| HandlerError::RevertedRead("tokenURI"))?;
        let metadata_uri = self
            .chain
            .token_metadata_uri(contract, token_id)
            .await
            .map_err(|_| HandlerError::RevertedRead("tokenMetadataURI"))?;
        let content_hash = self
            .chain
            .token_content_hash(contract, token_id)
            .await
            .map_err(|_| HandlerError::RevertedRead("tokenContentHashes"))?;
        let metadata_hash = self
            .chain
            .token_metadata_hash(contract, token_id)
            .await
            .map_err(|_| HandlerError::RevertedRead("tokenMetadataHashes"))?;
        let lands = self
            .chain
            .token_land_details(contract, token_id)
            .await
            .map_err(|_| HandlerError::RevertedRead("tokenLandDetails"))?;
        let pin = self
            .chain
            .token_pin_record(contract, token_id)
            .await
            .map_err(|_| HandlerError::RevertedRead("tokenPinRecord"))?;

        let bid_shares = self.resolve_bid_shares(token_id, contract).await?;

        let space = Space {
            id: token_id.to_string(),
            transaction_hash: meta.transaction_hash,
            owner: creator.id.clone(),
            creator: creator.id.clone(),
            prev_owner: creator.id.clone(),
            approved: None,
            content_uri,
            content_hash,
            metadata_uri,
            metadata_hash,
            creator_bid_share: bid_shares.creator,
            owner_bid_share: bid_shares.owner,
            prev_owner_bid_share: bid_shares.prev_owner,
            lands,
            pin,
            created_at_timestamp: meta.block_timestamp,
            created_at_block_number: meta.block_number,
            burned_at_timestamp: None,
            burned_at_block_number: None,
        };
        self.store.save_space(&space).await?;
        tracing::info!(space = space.id, owner = space.owner, "Minted space");

        let transfer = Transfer {
            id: record_id(&space.id, &meta.transaction_hash, meta.log_index),
            transaction_hash: meta.transaction_hash,
            space: space.id,
            from: zero_user.id,
            to: creator.id,
            created_at_timestamp: meta.block_timestamp,
            created_at_block_number: meta.block_number,
        };
        self.store.save_transfer(&transfer).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::kernel::{
            chain::{
                BidSharesRead,
                MockChainReader,
            },
            store::{
                Database,
                InMemoryStore,
            },
        },
        ethers_core::types::{
            H256,
            U256,
        },
        std::sync::Arc,
    };

    fn meta(contract: Address) -> EventMeta {
        EventMeta {
            address:          contract,
            transaction_hash: H256::repeat_byte(0x11),
            log_index:        U256::zero(),
            block_timestamp:  U256::from(1_000),
            block_number:     U256::from(10),
        }
    }

    fn minting_chain() -> MockChainReader {
        let mut chain = MockChainReader::new();
        chain
            .expect_token_uri()
            .returning(|_, _| Ok("ipfs://content".to_string()));
        chain
            .expect_token_metadata_uri()
            .returning(|_, _| Ok("ipfs://metadata".to_string()));
        chain
            .expect_token_content_hash()
            .returning(|_, _| Ok(H256::repeat_byte(0x01)));
        chain
            .expect_token_metadata_hash()
            .returning(|_, _| Ok(H256::repeat_byte(0x02)));
        chain
            .expect_token_land_details()
            .returning(|_, _| Ok(vec![U256::from(7)]));
        chain
            .expect_token_pin_record()
            .returning(|_, _| Ok("pin".to_string()));
        chain
            .expect_space_exchange_contract()
            .returning(|_| Ok(Address::repeat_byte(0xEE)));
        chain.expect_bid_shares_for_token().returning(|_, _| {
            Ok(BidSharesRead {
                creator:    U256::from(10),
                owner:      U256::from(85),
                prev_owner: U256::from(5),
            })
        });
        chain
    }

    #[tokio::test]
    async fn mint_creates_space_owned_by_minter() {
        let store = Arc::new(InMemoryStore::default());
        let service = Service::new(store.clone(), Arc::new(minting_chain()));
        let minter = Address::repeat_byte(0xBB);

        let event = SpaceTransfer {
            from:     Address::zero(),
            to:       minter,
            token_id: U256::from(42),
        };
        service
            .handle_transfer(&event, &meta(Address::repeat_byte(0xAA)))
            .await
            .unwrap();

        let space = store.get_space("42").await.unwrap().unwrap();
        assert_eq!(space.owner, address_id(&minter));
        assert_eq!(space.creator, address_id(&minter));
        assert_eq!(space.prev_owner, address_id(&minter));
        assert_eq!(space.creator_bid_share, Some(U256::from(10)));
        assert_eq!(space.content_uri, "ipfs://content");
    }

    #[tokio::test]
    async fn transfer_moves_ownership_and_clears_approval() {
        let store = Arc::new(InMemoryStore::default());
        let service = Service::new(store.clone(), Arc::new(minting_chain()));
        let minter = Address::repeat_byte(0xBB);
        let buyer = Address::repeat_byte(0xCC);
        let contract = Address::repeat_byte(0xAA);

        let mint = SpaceTransfer {
            from:     Address::zero(),
            to:       minter,
            token_id: U256::from(42),
        };
        service.handle_transfer(&mint, &meta(contract)).await.unwrap();

        let mut minted = store.get_space("42").await.unwrap().unwrap();
        minted.approved = Some(address_id(&buyer));
        store.save_space(&minted).await.unwrap();

        let transfer = SpaceTransfer {
            from:     minter,
            to:       buyer,
            token_id: U256::from(42),
        };
        service
            .handle_transfer(&transfer, &meta(contract))
            .await
            .unwrap();

        let space = store.get_space("42").await.unwrap().unwrap();
        assert_eq!(space.owner, address_id(&buyer));
        assert_eq!(space.prev_owner, address_id(&minter));
        assert_eq!(space.approved, None);
    }

    #[tokio::test]
    async fn burn_stamps_the_space() {
        let store = Arc::new(InMemoryStore::default());
        let service = Service::new(store.clone(), Arc::new(minting_chain()));
        let minter = Address::repeat_byte(0xBB);
        let contract = Address::repeat_byte(0xAA);

        let mint = SpaceTransfer {
            from:     Address::zero(),
            to:       minter,
            token_id: U256::from(42),
        };
        service.handle_transfer(&mint, &meta(contract)).await.unwrap();

        let burn = SpaceTransfer {
            from:     minter,
            to:       Address::zero(),
            token_id: U256::from(42),
        };
        service.handle_transfer(&burn, &meta(contract)).await.unwrap();

        let space = store.get_space("42").await.unwrap().unwrap();
        assert_eq!(space.burned_at_timestamp, Some(U256::from(1_000)));
        assert_eq!(space.prev_owner, address_id(&Address::zero()));
    }

    #[tokio::test]
    async fn transfer_of_unknown_space_is_a_clean_no_op() {
        let store = Arc::new(InMemoryStore::default());
        let service = Service::new(store.clone(), Arc::new(MockChainReader::new()));

        let event = SpaceTransfer {
            from:     Address::repeat_byte(0xBB),
            to:       Address::repeat_byte(0xCC),
            token_id: U256::from(99),
        };
        let result = service
            .handle_transfer(&event, &meta(Address::repeat_byte(0xAA)))
            .await;
        assert!(matches!(result, Err(HandlerError::MissingSpace(_))));
    }
}
