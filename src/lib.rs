//! # Market View
//!
//! Presentation core for an EVM binary prediction market: projects on-chain
//! market records into display state and shapes trade samples into chart
//! series. Supports both native and WASM targets.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Core** — Newtypes, display formatting, domain models (always available, WASM-safe)
//! 2. **Chain** — `ChainReader` seam, `getMarketInfo` ABI, JSON-RPC reader with retry policies
//! 3. **Projection** — `MarketStateProjector`, which keeps the latest market display state
//! 4. **Rendering** — `PriceSeriesRenderer` over a once-registered chart runtime
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use market_view::prelude::*;
//!
//! let reader = RpcChainReader::builder(contract)
//!     .rpc_url("https://ethereum-sepolia-rpc.publicnode.com")
//!     .build()?;
//!
//! let projector = MarketStateProjector::new();
//! let market_id: MarketId = "1".parse()?;
//! projector.project(Some(&market_id), Some(&reader as &dyn ChainReader)).await;
//! let panel = MarketPanel::from(&projector.current().await);
//!
//! let renderer = PriceSeriesRenderer::new(init_chart_runtime());
//! let view = renderer.render(&[PricePoint::new("12:00:01", 0.55)]);
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes and display formatting helpers.
pub mod shared;

/// Domain modules (vertical slices): market, price history, landing page.
pub mod domain;

/// Crate error types.
pub mod error;

/// Network constants.
pub mod network;

// ── Layer 2: Chain ───────────────────────────────────────────────────────────

/// Chain access: reader trait, contract ABI, JSON-RPC reader.
pub mod chain;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes + formatting
    pub use crate::shared::fmt::{
        format_address, format_resolution_time, format_resolution_time_with_unit, TimestampUnit,
    };
    pub use crate::shared::MarketId;

    // Domain types — market
    pub use crate::domain::market::panel::{AddressField, Clipboard, MarketPanel};
    pub use crate::domain::market::projector::{MarketStateProjector, Projection};
    pub use crate::domain::market::{DisplayMarketState, MarketStatus, OutcomeSide};

    // Domain types — price history
    pub use crate::domain::price_history::{
        init_chart_runtime, ChartConfig, ChartSeries, ChartView, PricePoint, PriceSeriesRenderer,
    };

    // Domain types — landing
    pub use crate::domain::landing::LandingPage;

    // Chain
    pub use crate::chain::{ChainReader, RawMarketInfo};
    #[cfg(feature = "http")]
    pub use crate::chain::retry::{RetryConfig, RetryPolicy};
    #[cfg(feature = "http")]
    pub use crate::chain::rpc::{RpcChainReader, RpcChainReaderBuilder};

    // Errors
    pub use crate::error::{ChainError, HttpError, ViewError};

    // Network
    pub use crate::network::{DEFAULT_RPC_URL, NETWORK_NAME, SEPOLIA_CHAIN_ID};
}
