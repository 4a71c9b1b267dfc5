use {
    super::Service,
    crate::kernel::{
        entities::address_id,
        error::HandlerError,
        events::{
            EventMeta,
            SpaceApprovalForAll,
        },
        store::find_or_create_user,
    },
};

impl Service {
    /// Maintain the owner's operator set. Revoking an operator that was
    /// never granted (or when the set is empty) is a no-op.
    #[tracing::instrument(skip_all, fields(owner = %address_id(&event.owner)))]
    pub async fn handle_approval_for_all(
        &self,
        event: &SpaceApprovalForAll,
        _meta: &EventMeta,
    ) -> Result<(), HandlerError> {
        let mut owner = find_or_create_user(self.store.as_ref(), &address_id(&event.owner)).await?;
        let operator =
            find_or_create_user(self.store.as_ref(), &address_id(&event.operator)).await?;

        if event.approved {
            if !owner.authorized_users.contains(&operator.id) {
                owner.authorized_users.push(operator.id);
            }
        } else {
            owner.authorized_users.retain(|id| *id != operator.id);
        }

        self.store.save_user(&owner).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::kernel::{
            chain::MockChainReader,
            store::{
                Database,
                InMemoryStore,
            },
        },
        ethers_core::types::{
            Address,
            H256,
            U256,
        },
        std::sync::Arc,
    };

    fn meta() -> EventMeta {
        EventMeta {
            address:          Address::repeat_byte(0xAA),
            transaction_hash: H256::repeat_byte(0x11),
            log_index:        U256::zero(),
            block_timestamp:  U256::from(1_000),
            block_number:     U256::from(10),
        }
    }

    #[tokio::test]
    async fn grant_and_revoke_operator() {
        let store = Arc::new(InMemoryStore::default());
        let service = Service::new(store.clone(), Arc::new(MockChainReader::new()));
        let owner = Address::repeat_byte(0xBB);
        let operator = Address::repeat_byte(0xCC);

        let grant = SpaceApprovalForAll {
            owner,
            operator,
            approved: true,
        };
        service.handle_approval_for_all(&grant, &meta()).await.unwrap();
        let user = store.get_user(&address_id(&owner)).await.unwrap().unwrap();
        assert_eq!(user.authorized_users, vec![address_id(&operator)]);

        let revoke = SpaceApprovalForAll {
            owner,
            operator,
            approved: false,
        };
        service
            .handle_approval_for_all(&revoke, &meta())
            .await
            .unwrap();
        let user = store.get_user(&address_id(&owner)).await.unwrap().unwrap();
        assert!(user.authorized_users.is_empty());
    }

    #[tokio::test]
    async fn revoking_an_unknown_operator_changes_nothing() {
        let store = Arc::new(InMemoryStore::default());
        let service = Service::new(store.clone(), Arc::new(MockChainReader::new()));

        let revoke = SpaceApprovalForAll {
            owner:    Address::repeat_byte(0xBB),
            operator: Address::repeat_byte(0xCC),
            approved: false,
        };
        service
            .handle_approval_for_all(&revoke, &meta())
            .await
            .unwrap();
        let user = store
            .get_user(&address_id(&Address::repeat_byte(0xBB)))
            .await
            .unwrap()
            .unwrap();
        assert!(user.authorized_users.is_empty());
    }
}
