//! Price history domain — trade samples, series shaping, chart runtime and options.

pub mod config;
pub mod runtime;
pub mod series;

use serde::{Deserialize, Serialize};

pub use config::ChartConfig;
pub use runtime::{init_chart_runtime, ChartRuntime};
pub use series::{render, ChartSeries, ChartView, PriceSeriesRenderer};

/// A single trade sample, supplied in time order by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Display label for the x-axis, used verbatim.
    pub time: String,
    pub price: f64,
}

impl PricePoint {
    pub fn new(time: impl Into<String>, price: f64) -> Self {
        Self {
            time: time.into(),
            price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_point_deserialize() {
        let json = r#"[{"time":"12:00:01","price":0.55},{"time":"12:00:07","price":0.6}]"#;
        let points: Vec<PricePoint> = serde_json::from_str(json).unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0], PricePoint::new("12:00:01", 0.55));
        assert_eq!(points[1].price, 0.6);
    }
}
