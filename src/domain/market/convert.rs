//! Conversion: RawMarketInfo → DisplayMarketState.

use super::DisplayMarketState;
use crate::chain::RawMarketInfo;

impl From<RawMarketInfo> for DisplayMarketState {
    fn from(source: RawMarketInfo) -> Self {
        let (
            question,
            image_url,
            resolution_time,
            resolved,
            outcome,
            yes_price,
            no_price,
            yes_shares,
            no_shares,
            creator,
            yes_token,
            no_token,
        ) = source;

        Self {
            question,
            image_url,
            resolution_time: resolution_time.to_string(),
            resolved,
            outcome,
            yes_price: yes_price.to_string(),
            no_price: no_price.to_string(),
            yes_shares: yes_shares.to_string(),
            no_shares: no_shares.to_string(),
            creator: creator.to_string(),
            yes_token: yes_token.to_string(),
            no_token: no_token.to_string(),
        }
    }
}
