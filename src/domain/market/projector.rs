//! Market state projector — fetch a market record and hold its display state.
//!
//! The projector owns exactly one [`DisplayMarketState`]. Each call to
//! [`MarketStateProjector::project`] takes a sequence number before the chain
//! read; when the read completes, the result is applied only if no newer
//! projection was issued in the meantime. Failed reads are logged and leave the
//! held state untouched.

use super::DisplayMarketState;
use crate::chain::ChainReader;
use crate::shared::MarketId;

use async_lock::RwLock;
use std::sync::Arc;

/// Result of a projection attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Projection {
    /// Market id or chain reader missing; nothing was fetched.
    Skipped,
    /// Inputs are the same as the last [`MarketStateProjector::sync`]; nothing was fetched.
    Unchanged,
    /// The held state was replaced with this value.
    Updated(DisplayMarketState),
    /// The read failed; the held state was kept.
    Failed,
    /// A newer projection was issued while this one was in flight; its result was dropped.
    Superseded,
}

/// Inputs of the last `sync`. The reader is held so its allocation cannot be
/// reused by a different reader while it is being compared against.
struct SyncInputs {
    market_id: Option<MarketId>,
    reader: Option<Arc<dyn ChainReader>>,
}

impl SyncInputs {
    fn matches(
        &self,
        market_id: Option<&MarketId>,
        reader: Option<&Arc<dyn ChainReader>>,
    ) -> bool {
        let same_reader = match (&self.reader, reader) {
            (Some(held), Some(next)) => Arc::ptr_eq(held, next),
            (None, None) => true,
            _ => false,
        };
        self.market_id.as_ref() == market_id && same_reader
    }
}

#[derive(Default)]
struct ProjectorState {
    display: DisplayMarketState,
    /// Sequence number of the most recently issued fetch.
    issued: u64,
    target: Option<MarketId>,
    last_inputs: Option<SyncInputs>,
}

impl std::fmt::Debug for ProjectorState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProjectorState")
            .field("display", &self.display)
            .field("issued", &self.issued)
            .field("target", &self.target)
            .field("synced", &self.last_inputs.is_some())
            .finish()
    }
}

/// Holds the display state of the market currently being viewed.
///
/// Cheap to clone; clones share the same state.
#[derive(Debug, Clone, Default)]
pub struct MarketStateProjector {
    inner: Arc<RwLock<ProjectorState>>,
}

impl MarketStateProjector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the held display state.
    pub async fn current(&self) -> DisplayMarketState {
        self.inner.read().await.display.clone()
    }

    /// Market id of the most recently issued fetch.
    pub async fn target(&self) -> Option<MarketId> {
        self.inner.read().await.target
    }

    /// Fetches `market_id` through `reader` and replaces the held state.
    ///
    /// Never returns an error: failures are logged and reported as
    /// [`Projection::Failed`] with the previous state retained.
    pub async fn project(
        &self,
        market_id: Option<&MarketId>,
        reader: Option<&dyn ChainReader>,
    ) -> Projection {
        let (Some(market_id), Some(reader)) = (market_id, reader) else {
            tracing::trace!("Skipping market projection: missing market id or chain reader");
            return Projection::Skipped;
        };

        let seq = {
            let mut state = self.inner.write().await;
            state.issued += 1;
            state.target = Some(*market_id);
            state.issued
        };

        let raw = match reader.get_market_info(market_id).await {
            Ok(raw) => raw,
            Err(e) => {
                tracing::error!(market_id = %market_id, seq, "Error fetching market info: {}", e);
                return Projection::Failed;
            }
        };
        let display = DisplayMarketState::from(raw);

        let mut state = self.inner.write().await;
        if state.issued != seq {
            tracing::debug!(
                market_id = %market_id,
                seq,
                latest = state.issued,
                "Discarding superseded market info"
            );
            return Projection::Superseded;
        }
        state.display = display.clone();
        Projection::Updated(display)
    }

    /// Projects only when the market id or the reader changed since the
    /// previous `sync` call. Readers are compared by `Arc` identity.
    pub async fn sync(
        &self,
        market_id: Option<&MarketId>,
        reader: Option<Arc<dyn ChainReader>>,
    ) -> Projection {
        {
            let mut state = self.inner.write().await;
            if let Some(last) = &state.last_inputs {
                if last.matches(market_id, reader.as_ref()) {
                    return Projection::Unchanged;
                }
            }
            state.last_inputs = Some(SyncInputs {
                market_id: market_id.copied(),
                reader: reader.clone(),
            });
        }
        self.project(market_id, reader.as_deref()).await
    }
}
