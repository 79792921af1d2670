//! Network constants.

/// Default JSON-RPC endpoint (Sepolia public node).
pub const DEFAULT_RPC_URL: &str = "https://ethereum-sepolia-rpc.publicnode.com";

/// Chain id of the network the markets are deployed on.
pub const SEPOLIA_CHAIN_ID: u64 = 11_155_111;

/// Human-readable network name shown in the landing badge.
pub const NETWORK_NAME: &str = "Sepolia Network";

/// Symbol of the collateral token prices are quoted in.
pub const COLLATERAL_SYMBOL: &str = "META";

/// Decimals of the collateral token.
pub const COLLATERAL_DECIMALS: u32 = 18;
