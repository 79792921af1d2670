//! Contract binding for the market view function.

use super::RawMarketInfo;
use crate::error::ChainError;
use crate::shared::MarketId;
use alloy_sol_types::{sol, SolCall, SolValue};

sol! {
    function getMarketInfo(uint256 marketId) external view returns (
        string question,
        string imageUrl,
        uint256 resolutionTime,
        bool resolved,
        bool outcome,
        uint256 yesPrice,
        uint256 noPrice,
        uint256 yesShares,
        uint256 noShares,
        address creator,
        address yesToken,
        address noToken
    );
}

/// ABI-encodes a `getMarketInfo(marketId)` call (selector + argument).
pub fn encode_get_market_info(market_id: &MarketId) -> Vec<u8> {
    getMarketInfoCall {
        marketId: market_id.as_u256(),
    }
    .abi_encode()
}

/// Decodes `getMarketInfo` return data into the positional tuple.
pub fn decode_market_info(data: &[u8]) -> Result<RawMarketInfo, ChainError> {
    if data.is_empty() {
        return Err(ChainError::Decode("empty return data".to_string()));
    }
    <RawMarketInfo as SolValue>::abi_decode_params(data)
        .map_err(|e| ChainError::Decode(e.to_string()))
}
