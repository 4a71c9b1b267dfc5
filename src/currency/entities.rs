use {
    crate::kernel::entities::CurrencyId,
    ethers_core::types::U256,
    serde::Serialize,
};

/// A currency a listing can be priced in, keyed by token contract address.
/// Resolved once from the chain and cached; immutable afterwards except for
/// the liquidity counter.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Currency {
    pub id:        CurrencyId,
    pub name:      String,
    pub symbol:    String,
    /// `None` when the decimals() read reverted: unknown precision, not zero.
    pub decimals:  Option<u32>,
    pub liquidity: U256,
}
