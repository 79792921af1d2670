//! Resolution-time formatting.
//!
//! Markets store their resolution time as an integer whose unit is not carried
//! alongside the value. [`TimestampUnit::infer`] applies the length heuristic
//! (≤10 digits is seconds, longer is milliseconds); callers that know the unit
//! should use [`format_resolution_time_with_unit`] instead.

use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Rendered when the timestamp text is not a representable integer.
pub const INVALID_DATE: &str = "Invalid Date";

/// `Nov 14, 2023, 10:13 PM`
const DISPLAY_FORMAT: &str = "%b %-d, %Y, %I:%M %p";

/// Longest text length still interpreted as epoch seconds.
const MAX_SECONDS_DIGITS: usize = 10;

/// Unit of an epoch timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimestampUnit {
    Seconds,
    Milliseconds,
}

impl TimestampUnit {
    /// Guesses the unit from the text length.
    pub fn infer(text: &str) -> Self {
        if text.len() <= MAX_SECONDS_DIGITS {
            Self::Seconds
        } else {
            Self::Milliseconds
        }
    }
}

/// Parses timestamp text into a UTC instant.
pub fn parse_resolution_time(text: &str, unit: TimestampUnit) -> Option<DateTime<Utc>> {
    let value: i64 = text.trim().parse().ok()?;
    let millis = match unit {
        TimestampUnit::Seconds => value.checked_mul(1000)?,
        TimestampUnit::Milliseconds => value,
    };
    DateTime::<Utc>::from_timestamp_millis(millis)
}

/// Formats a resolution time, inferring the unit, in UTC.
pub fn format_resolution_time(text: &str) -> String {
    format_resolution_time_with_unit(text, TimestampUnit::infer(text))
}

/// Formats a resolution time with a known unit, in UTC.
pub fn format_resolution_time_with_unit(text: &str, unit: TimestampUnit) -> String {
    render(text, unit, &Utc)
}

/// Formats a resolution time, inferring the unit, at a fixed UTC offset.
pub fn format_resolution_time_in(text: &str, offset: &FixedOffset) -> String {
    render(text, TimestampUnit::infer(text), offset)
}

fn render<Tz>(text: &str, unit: TimestampUnit, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    // Empty text is the unloaded default state, not epoch 0. Rendering it
    // as a 1970 date would show a bogus resolution time before the fetch.
    if text.is_empty() {
        return String::new();
    }
    match parse_resolution_time(text, unit) {
        Some(instant) => instant
            .with_timezone(tz)
            .format(DISPLAY_FORMAT)
            .to_string(),
        None => INVALID_DATE.to_string(),
    }
}
