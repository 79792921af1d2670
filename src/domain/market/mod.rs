//! Market domain — display state, conversion, projection, panel view model.

mod convert;
pub mod panel;
pub mod projector;

use serde::{Deserialize, Serialize};

pub use panel::{AddressField, Clipboard, MarketPanel};
pub use projector::{MarketStateProjector, Projection};

// ─── Status ──────────────────────────────────────────────────────────────────

/// Market lifecycle status as shown in the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarketStatus {
    Active,
    Resolved,
}

impl MarketStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MarketStatus::Active => "Active",
            MarketStatus::Resolved => "Resolved",
        }
    }
}

impl std::fmt::Display for MarketStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the two tradable outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutcomeSide {
    Yes,
    No,
}

impl OutcomeSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutcomeSide::Yes => "Yes",
            OutcomeSide::No => "No",
        }
    }
}

// ─── DisplayMarketState ──────────────────────────────────────────────────────

/// Normalized, render-ready market record.
///
/// Every field is present: text fields default to empty, the four
/// price/share fields to `"0"`, flags to `false`. A fetch produces a whole new
/// value; nothing patches an existing one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayMarketState {
    pub question: String,
    pub image_url: String,
    /// Raw epoch text; unit is resolved at formatting time.
    pub resolution_time: String,
    pub resolved: bool,
    /// Winning side, `true` for yes. Only meaningful once `resolved`.
    pub outcome: bool,
    pub yes_price: String,
    pub no_price: String,
    pub yes_shares: String,
    pub no_shares: String,
    pub creator: String,
    pub yes_token: String,
    pub no_token: String,
}

impl Default for DisplayMarketState {
    fn default() -> Self {
        Self {
            question: String::new(),
            image_url: String::new(),
            resolution_time: String::new(),
            resolved: false,
            outcome: false,
            yes_price: "0".to_string(),
            no_price: "0".to_string(),
            yes_shares: "0".to_string(),
            no_shares: "0".to_string(),
            creator: String::new(),
            yes_token: String::new(),
            no_token: String::new(),
        }
    }
}

impl DisplayMarketState {
    pub fn status(&self) -> MarketStatus {
        if self.resolved {
            MarketStatus::Resolved
        } else {
            MarketStatus::Active
        }
    }

    /// The winning side, if the market has resolved.
    pub fn winning_side(&self) -> Option<OutcomeSide> {
        match (self.resolved, self.outcome) {
            (false, _) => None,
            (true, true) => Some(OutcomeSide::Yes),
            (true, false) => Some(OutcomeSide::No),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_absent_fields() {
        let state = DisplayMarketState::default();
        assert_eq!(state.question, "");
        assert_eq!(state.yes_price, "0");
        assert_eq!(state.no_shares, "0");
        assert!(!state.resolved);
        assert_eq!(state.status(), MarketStatus::Active);
        assert_eq!(state.winning_side(), None);
    }

    #[test]
    fn test_winning_side_only_when_resolved() {
        let mut state = DisplayMarketState {
            outcome: true,
            ..Default::default()
        };
        assert_eq!(state.winning_side(), None);
        state.resolved = true;
        assert_eq!(state.winning_side(), Some(OutcomeSide::Yes));
        state.outcome = false;
        assert_eq!(state.winning_side(), Some(OutcomeSide::No));
        assert_eq!(state.status().to_string(), "Resolved");
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(DisplayMarketState::default()).unwrap();
        assert_eq!(json["imageUrl"], "");
        assert_eq!(json["resolutionTime"], "");
        assert_eq!(json["yesShares"], "0");
        assert_eq!(json["noToken"], "");
    }
}
