//! Token-amount formatting.
//!
//! Prices and share counts come off-chain as raw integer text in base units
//! (`"1500000000000000000"` for 1.5 tokens with 18 decimals). These helpers
//! scale them with `rust_decimal` and render them for display.

use super::num::display_formatted_string;
use rust_decimal::prelude::*;

/// Scales raw integer text by `10^-decimals`.
///
/// Returns `None` for non-integer text, for values beyond `Decimal` range,
/// or when `decimals` exceeds the 28 fractional digits `Decimal` supports.
pub fn from_base_units(raw: &str, decimals: u32) -> Option<Decimal> {
    let raw = raw.trim();
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let mut value = Decimal::from_str(raw).ok()?;
    value.set_scale(decimals).ok()?;
    Some(value.normalize())
}

/// Formats a `Decimal` for display with magnitude-dependent precision.
pub fn display(value: &Decimal) -> String {
    let abs_value = value.abs();
    let places = if abs_value >= Decimal::ONE_HUNDRED {
        0
    } else if abs_value >= Decimal::ONE {
        2
    } else {
        6
    };
    display_formatted_string(&value.round_dp(places).to_string())
}

/// Formats raw base-unit text as a human amount, falling back to the raw text
/// when it cannot be scaled.
pub fn display_units(raw: &str, decimals: u32) -> String {
    match from_base_units(raw, decimals) {
        Some(value) => display(&value),
        None => raw.to_string(),
    }
}
