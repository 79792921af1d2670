//! Chain access — the read-only seam between the views and the market contract.
//!
//! - [`ChainReader`] — resolves a market id to its raw on-chain record
//! - [`RawMarketInfo`] — the positional 12-tuple `getMarketInfo` returns
//! - [`abi`] — the contract binding used to encode calls and decode returns
//! - [`rpc`] — a JSON-RPC `eth_call` implementation (feature `http`)

pub mod abi;
#[cfg(feature = "http")]
pub mod retry;
#[cfg(feature = "http")]
pub mod rpc;

use crate::error::ChainError;
use crate::shared::MarketId;
use alloy_primitives::{Address, U256};
use async_trait::async_trait;

/// Raw `getMarketInfo` result, in contract order:
///
/// | pos | field |
/// |---|---|
/// | 0 | question |
/// | 1 | image url |
/// | 2 | resolution time |
/// | 3 | resolved |
/// | 4 | outcome |
/// | 5 | yes price |
/// | 6 | no price |
/// | 7 | yes shares |
/// | 8 | no shares |
/// | 9 | creator |
/// | 10 | yes token |
/// | 11 | no token |
pub type RawMarketInfo = (
    String,
    String,
    U256,
    bool,
    bool,
    U256,
    U256,
    U256,
    U256,
    Address,
    Address,
    Address,
);

/// Read-only access to market records on chain.
#[async_trait]
pub trait ChainReader: Send + Sync {
    async fn get_market_info(&self, market_id: &MarketId) -> Result<RawMarketInfo, ChainError>;
}
