use {
    super::Service,
    crate::{
        kernel::{
            entities::{
                address_id,
                record_id,
            },
            error::HandlerError,
            events::EventMeta,
            store::find_or_create_user,
        },
        space::entities::{
            UriUpdate,
            UriUpdateKind,
        },
    },
    ethers_core::types::{
        Address,
        U256,
    },
};

impl Service {
    /// Record a content or metadata URI change and overwrite the URI on the
    /// space. One handler covers both events; only the kind differs.
    #[tracing::instrument(skip_all, fields(token_id = %token_id, kind = %kind))]
    pub async fn handle_uri_updated(
        &self,
        kind: UriUpdateKind,
        token_id: U256,
        owner: Address,
        uri: &str,
        meta: &EventMeta,
    ) -> Result<(), HandlerError> {
        let id = token_id.to_string();
        let mut space = self
            .store
            .get_space(&id)
            .await?
            .ok_or(HandlerError::MissingSpace(id))?;

        let updater = find_or_create_user(self.store.as_ref(), &address_id(&owner)).await?;
        let previous = match kind {
            UriUpdateKind::Content => space.content_uri.clone(),
            UriUpdateKind::Metadata => space.metadata_uri.clone(),
        };

        let update = UriUpdate {
            id: record_id(&space.id, &meta.transaction_hash, meta.log_index),
            transaction_hash: meta.transaction_hash,
            space: space.id.clone(),
            kind,
            from: previous,
            to: uri.to_string(),
            updater: updater.id,
            owner: space.owner.clone(),
            created_at_timestamp: meta.block_timestamp,
            created_at_block_number: meta.block_number,
        };
        self.store.save_uri_update(&update).await?;

        match kind {
            UriUpdateKind::Content => space.content_uri = uri.to_string(),
            UriUpdateKind::Metadata => space.metadata_uri = uri.to_string(),
        }
        self.store.save_space(&space).await?;
        Ok(())
    }
}
