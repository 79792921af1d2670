//! Shared newtypes and utilities used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize as the
//! plain text a route parameter or JSON payload carries, so they can be used
//! directly in view types without conversion overhead.

pub mod fmt;

use crate::error::ViewError;
use alloy_primitives::U256;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

// ─── MarketId ────────────────────────────────────────────────────────────────

/// On-chain market identifier (the `uint256` key of `getMarketInfo`).
///
/// Parses from the route parameter text, either decimal (`"42"`) or
/// `0x`-prefixed hex (`"0x2a"`). Displays and serializes as decimal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarketId(U256);

impl MarketId {
    pub fn new(id: u64) -> Self {
        Self(U256::from(id))
    }

    pub fn as_u256(&self) -> U256 {
        self.0
    }
}

impl std::fmt::Display for MarketId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for MarketId {
    fn from(id: u64) -> Self {
        Self::new(id)
    }
}

impl From<U256> for MarketId {
    fn from(id: U256) -> Self {
        Self(id)
    }
}

impl FromStr for MarketId {
    type Err = ViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ViewError::Validation("Missing market id".to_string()));
        }
        let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
            Some(hex) => U256::from_str_radix(hex, 16),
            None => U256::from_str_radix(s, 10),
        };
        parsed
            .map(MarketId)
            .map_err(|e| ViewError::Validation(format!("Invalid market id {s:?}: {e}")))
    }
}

impl Serialize for MarketId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for MarketId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        MarketId::from_str(&s).map_err(serde::de::Error::custom)
    }
}
