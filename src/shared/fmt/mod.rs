//! Display formatting helpers.
//!
//! Pure, stateless functions shared by the market panel and any other view:
//! address shortening, resolution-time rendering, and token-amount display.

pub mod address;
pub mod decimal;
pub mod num;
pub mod time;

pub use address::format_address;
pub use time::{format_resolution_time, format_resolution_time_with_unit, TimestampUnit};
