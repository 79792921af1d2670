//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Display types consumed by the view layer
//! - `convert.rs` — `From` conversions from raw chain records
//! - further files for the slice's behavior (projection, rendering, config)

pub mod landing;
pub mod market;
pub mod price_history;
