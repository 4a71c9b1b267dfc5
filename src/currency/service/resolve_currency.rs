use {
    super::Service,
    crate::{
        currency::entities::Currency,
        kernel::{
            chain::Reverted,
            entities::address_id,
            error::HandlerError,
        },
    },
    ethers_core::types::{
        Address,
        U256,
    },
};

const UNKNOWN: &str = "unknown";

/// Marker some broken token contracts return from the bytes32 name/symbol
/// variants instead of reverting: 31 zero bytes with a trailing 1.
fn is_null_eth_value(raw: &[u8; 32]) -> bool {
    raw[31] == 1 && raw[..31].iter().all(|b| *b == 0)
}

/// Decode a fixed-width bytes32 name/symbol as NUL-padded text. `None` when
/// the contract returned the null marker.
fn decode_bytes32(raw: &[u8; 32]) -> Option<String> {
    if is_null_eth_value(raw) {
        return None;
    }
    let end = raw.iter().position(|b| *b == 0).unwrap_or(raw.len());
    Some(String::from_utf8_lossy(&raw[..end]).into_owned())
}

impl Service {
    /// Find-or-create the Currency record for `address`. A cached record is
    /// returned without any chain read; the zero address is the chain's
    /// native currency and is synthesized without reads either. The record
    /// is persisted before returning, so subsequent calls are cache hits.
    #[tracing::instrument(skip(self), fields(currency = %address_id(&address)))]
    pub async fn resolve_currency(&self, address: Address) -> Result<Currency, HandlerError> {
        let id = address_id(&address);
        if let Some(currency) = self.store.get_currency(&id).await? {
            return Ok(currency);
        }

        let currency = if address.is_zero() {
            Currency {
                id,
                name: "Ethereum".to_string(),
                symbol: "ETH".to_string(),
                decimals: Some(18),
                liquidity: U256::zero(),
            }
        } else {
            Currency {
                id,
                name: self.fetch_name(address).await,
                symbol: self.fetch_symbol(address).await,
                decimals: self.fetch_decimals(address).await,
                liquidity: U256::zero(),
            }
        };

        tracing::info!(
            name = currency.name,
            symbol = currency.symbol,
            decimals = ?currency.decimals,
            "Resolved new currency"
        );
        self.store.save_currency(&currency).await?;
        Ok(currency)
    }

    async fn fetch_name(&self, address: Address) -> String {
        match self.chain.erc20_name(address).await {
            Ok(name) => name,
            Err(Reverted) => match self.chain.erc20_name_bytes32(address).await {
                Ok(raw) => decode_bytes32(&raw).unwrap_or_else(|| UNKNOWN.to_string()),
                Err(Reverted) => UNKNOWN.to_string(),
            },
        }
    }

    async fn fetch_symbol(&self, address: Address) -> String {
        match self.chain.erc20_symbol(address).await {
            Ok(symbol) => symbol,
            Err(Reverted) => match self.chain.erc20_symbol_bytes32(address).await {
                Ok(raw) => decode_bytes32(&raw).unwrap_or_else(|| UNKNOWN.to_string()),
                Err(Reverted) => UNKNOWN.to_string(),
            },
        }
    }

    /// `decimals()` has no fixed-width fallback; a revert is stored as an
    /// explicit unknown precision.
    async fn fetch_decimals(&self, address: Address) -> Option<u32> {
        self.chain.erc20_decimals(address).await.ok()
    }
}
