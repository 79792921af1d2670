//! Market information panel — display-ready view of one market.

use super::{DisplayMarketState, MarketStatus, OutcomeSide};
use crate::network::{COLLATERAL_DECIMALS, COLLATERAL_SYMBOL};
use crate::shared::fmt::{decimal, format_address, format_resolution_time};
use serde::Serialize;

/// Fire-and-forget text copy (e.g. the browser clipboard).
pub trait Clipboard {
    fn copy_text(&self, text: &str);
}

/// An address row: full value for copying, shortened value for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddressField {
    pub label: &'static str,
    pub full: String,
    pub short: String,
}

impl AddressField {
    fn new(label: &'static str, full: &str) -> Self {
        Self {
            label,
            full: full.to_string(),
            short: format_address(full),
        }
    }

    /// Copies the full address.
    pub fn copy(&self, clipboard: &dyn Clipboard) {
        clipboard.copy_text(&self.full);
    }
}

/// Everything the information panel renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarketPanel {
    pub question: String,
    /// `None` when the market has no image.
    pub image_url: Option<String>,
    pub resolution_time: String,
    pub status: MarketStatus,
    pub winning_side: Option<OutcomeSide>,
    pub yes_price: String,
    pub no_price: String,
    pub price_unit: &'static str,
    pub yes_shares: String,
    pub no_shares: String,
    pub creator: AddressField,
    pub yes_token: AddressField,
    pub no_token: AddressField,
}

impl MarketPanel {
    /// Builds the panel with prices and shares as raw on-chain text.
    pub fn from_state(state: &DisplayMarketState) -> Self {
        Self {
            question: state.question.clone(),
            image_url: (!state.image_url.is_empty()).then(|| state.image_url.clone()),
            resolution_time: format_resolution_time(&state.resolution_time),
            status: state.status(),
            winning_side: state.winning_side(),
            yes_price: state.yes_price.clone(),
            no_price: state.no_price.clone(),
            price_unit: COLLATERAL_SYMBOL,
            yes_shares: state.yes_shares.clone(),
            no_shares: state.no_shares.clone(),
            creator: AddressField::new("Creator Address", &state.creator),
            yes_token: AddressField::new("Yes Token", &state.yes_token),
            no_token: AddressField::new("No Token", &state.no_token),
        }
    }

    /// Builds the panel with prices and shares scaled to token units.
    pub fn with_units(state: &DisplayMarketState, decimals: u32) -> Self {
        Self {
            yes_price: decimal::display_units(&state.yes_price, decimals),
            no_price: decimal::display_units(&state.no_price, decimals),
            yes_shares: decimal::display_units(&state.yes_shares, decimals),
            no_shares: decimal::display_units(&state.no_shares, decimals),
            ..Self::from_state(state)
        }
    }

    /// [`MarketPanel::with_units`] using the collateral token's decimals.
    pub fn with_collateral_units(state: &DisplayMarketState) -> Self {
        Self::with_units(state, COLLATERAL_DECIMALS)
    }

    pub fn status_label(&self) -> &'static str {
        self.status.as_str()
    }

    pub fn addresses(&self) -> [&AddressField; 3] {
        [&self.creator, &self.yes_token, &self.no_token]
    }
}

impl From<&DisplayMarketState> for MarketPanel {
    fn from(state: &DisplayMarketState) -> Self {
        Self::from_state(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingClipboard {
        copied: RefCell<Vec<String>>,
    }

    impl Clipboard for RecordingClipboard {
        fn copy_text(&self, text: &str) {
            self.copied.borrow_mut().push(text.to_string());
        }
    }

    fn state() -> DisplayMarketState {
        DisplayMarketState {
            question: "Will the merge ship in Q3?".to_string(),
            image_url: String::new(),
            resolution_time: "1700000000".to_string(),
            resolved: true,
            outcome: true,
            yes_price: "1500000000000000000".to_string(),
            no_price: "500000000000000000".to_string(),
            yes_shares: "1234600000000000000000".to_string(),
            no_shares: "0".to_string(),
            creator: "0x52908400098527886E0F7030069857D2E4169EE7".to_string(),
            yes_token: "0x8617E340B3D01FA5F11F306F4090FD50E238070D".to_string(),
            no_token: "0xde709f2102306220921060314715629080e2fb77".to_string(),
        }
    }

    #[test]
    fn test_panel_from_state() {
        let panel = MarketPanel::from_state(&state());
        assert_eq!(panel.image_url, None);
        assert_eq!(panel.resolution_time, "Nov 14, 2023, 10:13 PM");
        assert_eq!(panel.status_label(), "Resolved");
        assert_eq!(panel.winning_side, Some(OutcomeSide::Yes));
        assert_eq!(panel.yes_price, "1500000000000000000");
        assert_eq!(panel.price_unit, "META");
        assert_eq!(panel.creator.short, "0x5290...9EE7");
        assert_eq!(panel.no_token.short, "0xde70...fb77");
    }

    #[test]
    fn test_panel_with_units() {
        let panel = MarketPanel::with_collateral_units(&state());
        assert_eq!(panel.yes_price, "1.5");
        assert_eq!(panel.no_price, "0.5");
        assert_eq!(panel.yes_shares, "1,235");
        assert_eq!(panel.no_shares, "0");
        assert_eq!(panel.question, "Will the merge ship in Q3?");
    }

    #[test]
    fn test_default_state_panel() {
        let panel = MarketPanel::from(&DisplayMarketState::default());
        assert_eq!(panel.resolution_time, "");
        assert_eq!(panel.status_label(), "Active");
        assert_eq!(panel.creator.short, "");
        assert_eq!(panel.yes_price, "0");
    }

    #[test]
    fn test_image_shown_when_present() {
        let mut s = state();
        s.image_url = "https://example.com/q3.png".to_string();
        let panel = MarketPanel::from_state(&s);
        assert_eq!(panel.image_url.as_deref(), Some("https://example.com/q3.png"));
    }

    #[test]
    fn test_copy_uses_full_address() {
        let panel = MarketPanel::from_state(&state());
        let clipboard = RecordingClipboard::default();
        for field in panel.addresses() {
            field.copy(&clipboard);
        }
        let copied = clipboard.copied.borrow();
        assert_eq!(copied.len(), 3);
        assert_eq!(copied[0], "0x52908400098527886E0F7030069857D2E4169EE7");
        assert_eq!(copied[2], "0xde709f2102306220921060314715629080e2fb77");
    }
}
