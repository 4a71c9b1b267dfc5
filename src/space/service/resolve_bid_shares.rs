use {
    super::Service,
    crate::{
        kernel::error::HandlerError,
        space::entities::BidShares,
    },
    ethers_core::types::{
        Address,
        U256,
    },
};

impl Service {
    /// Read the marketplace fee/royalty split for a token at mint time. The
    /// exchange address comes off the space contract; a reverted bid-share
    /// read yields all-absent shares, which callers must persist as unknown
    /// rather than zero.
    #[tracing::instrument(skip(self), fields(token_id = %token_id))]
    pub async fn resolve_bid_shares(
        &self,
        token_id: U256,
        space_contract: Address,
    ) -> Result<BidShares, HandlerError> {
        let exchange = self
            .chain
            .space_exchange_contract(space_contract)
            .await
            .map_err(|_| HandlerError::RevertedRead("spaceExchangeContract"))?;

        match self.chain.bid_shares_for_token(exchange, token_id).await {
            Ok(shares) => Ok(BidShares {
                creator:    Some(shares.creator),
                owner:      Some(shares.owner),
                prev_owner: Some(shares.prev_owner),
            }),
            Err(_) => {
                tracing::warn!("Bid-share read reverted, storing unknown shares");
                Ok(BidShares {
                    creator:    None,
                    owner:      None,
                    prev_owner: None,
                })
            }
        }
    }
}
