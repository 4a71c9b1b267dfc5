use {
    super::Service,
    crate::kernel::{
        entities::address_id,
        error::HandlerError,
        events::{
            EventMeta,
            SpaceApproval,
        },
        store::find_or_create_user,
    },
};

impl Service {
    /// Set or clear the approval delegate on a space. Approving the zero
    /// address is how the contract signals a cleared approval.
    #[tracing::instrument(skip_all, fields(token_id = %event.token_id))]
    pub async fn handle_approval(
        &self,
        event: &SpaceApproval,
        _meta: &EventMeta,
    ) -> Result<(), HandlerError> {
        let token_id = event.token_id.to_string();
        let mut space = self
            .store
            .get_space(&token_id)
            .await?
            .ok_or(HandlerError::MissingSpace(token_id))?;

        if event.approved.is_zero() {
            space.approved = None;
        } else {
            let approved =
                find_or_create_user(self.store.as_ref(), &address_id(&event.approved)).await?;
            space.approved = Some(approved.id);
        }

        self.store.save_space(&space).await?;
        Ok(())
    }
}
