//! Price series shaping — trade samples to chart-ready series.
//!
//! One plotted point per sample, in input order. Labels and values are copied
//! verbatim: no sorting, de-duplication, resampling or unit conversion.

use super::config::ChartConfig;
use super::runtime::{ChartComponent, ChartRuntime};
use super::PricePoint;
use serde::Serialize;
use serde_json::json;

/// Shown instead of a chart until the first sample arrives.
pub const WAITING_MESSAGE: &str = "Waiting for trade data...";

/// Dataset label of the price line.
pub const SERIES_LABEL: &str = "Price";

/// A single line series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub label: &'static str,
    /// x-axis labels, one per sample.
    pub labels: Vec<String>,
    /// y values, one per sample.
    pub values: Vec<f64>,
}

impl ChartSeries {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false for a rendered series; an empty input renders
    /// [`ChartView::Waiting`] instead.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The most recent `(label, value)` pair.
    pub fn latest(&self) -> Option<(&str, f64)> {
        let label = self.labels.last()?;
        let value = self.values.last()?;
        Some((label.as_str(), *value))
    }

    /// Tooltip text for the point at `index`.
    pub fn tooltip_label(&self, index: usize, config: &ChartConfig) -> Option<String> {
        self.values
            .get(index)
            .map(|value| format!("{}{}", config.tooltip.label_prefix, value))
    }

    /// Chart-library payload: data plus the style options it is drawn with.
    pub fn to_chart_data(&self, config: &ChartConfig) -> serde_json::Value {
        let line = &config.line;
        let border_gradient: Vec<serde_json::Value> = config
            .gradient
            .stops()
            .iter()
            .map(|(offset, color)| json!({ "offset": offset, "color": color }))
            .collect();
        json!({
            "labels": self.labels,
            "datasets": [{
                "label": self.label,
                "data": self.values,
                "borderWidth": line.border_width,
                "borderGradient": border_gradient,
                "backgroundGradient": config.fill,
                "fill": line.fill,
                "tension": line.tension,
                "pointRadius": line.point_radius,
                "pointBackgroundColor": line.point_background,
                "pointBorderColor": config.gradient.mid,
                "pointHoverRadius": line.point_hover_radius,
                "pointHoverBackgroundColor": config.gradient.mid,
                "pointHoverBorderColor": line.point_background,
                "pointHoverBorderWidth": line.point_hover_border_width,
            }],
            "options": config,
        })
    }
}

/// What the price widget should display.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum ChartView {
    /// No samples yet.
    Waiting { message: &'static str },
    Series(ChartSeries),
}

impl ChartView {
    pub fn series(&self) -> Option<&ChartSeries> {
        match self {
            ChartView::Series(series) => Some(series),
            ChartView::Waiting { .. } => None,
        }
    }

    pub fn is_waiting(&self) -> bool {
        matches!(self, ChartView::Waiting { .. })
    }
}

/// Maps samples 1:1 onto a line series, or the waiting state when empty.
pub fn render(points: &[PricePoint]) -> ChartView {
    if points.is_empty() {
        return ChartView::Waiting {
            message: WAITING_MESSAGE,
        };
    }

    let (labels, values): (Vec<String>, Vec<f64>) = points
        .iter()
        .map(|p| (p.time.clone(), p.price))
        .unzip();

    ChartView::Series(ChartSeries {
        label: SERIES_LABEL,
        labels,
        values,
    })
}

/// Renders price history with a fixed chart configuration.
///
/// Construction requires the registered [`ChartRuntime`].
#[derive(Debug, Clone)]
pub struct PriceSeriesRenderer {
    runtime: &'static ChartRuntime,
    config: ChartConfig,
}

impl PriceSeriesRenderer {
    pub fn new(runtime: &'static ChartRuntime) -> Self {
        Self::with_config(runtime, ChartConfig::default())
    }

    pub fn with_config(runtime: &'static ChartRuntime, config: ChartConfig) -> Self {
        debug_assert!(runtime.is_registered(ChartComponent::LineElement));
        Self { runtime, config }
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn runtime(&self) -> &'static ChartRuntime {
        self.runtime
    }

    pub fn render(&self, points: &[PricePoint]) -> ChartView {
        render(points)
    }

    /// Chart payload for `points`, or `None` while waiting for data.
    pub fn chart_data(&self, points: &[PricePoint]) -> Option<serde_json::Value> {
        self.render(points)
            .series()
            .map(|series| series.to_chart_data(&self.config))
    }
}
