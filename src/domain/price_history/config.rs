//! Chart presentation options as plain configuration.
//!
//! Defaults reproduce the price-history widget: blue → purple → pink line
//! gradient, translucent blue fill, smoothed line, 750 ms ease-in-out-quart
//! animation and a "Price History" title. The data-shaping in
//! [`super::series`] never reads these values; they are passed through to
//! the chart library alongside the series.

use serde::{Serialize, Serializer};

// ─── Colors ──────────────────────────────────────────────────────────────────

/// An RGBA color, serialized as a CSS `rgba(...)` string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::new(255, 255, 255, 1.0);

    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    pub fn css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

impl Serialize for Rgba {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.css())
    }
}

/// Three-stop horizontal gradient for the line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GradientStops {
    pub start: Rgba,
    pub mid: Rgba,
    pub end: Rgba,
}

impl Default for GradientStops {
    fn default() -> Self {
        Self {
            start: Rgba::new(54, 162, 235, 1.0),
            mid: Rgba::new(153, 102, 255, 1.0),
            end: Rgba::new(255, 99, 132, 1.0),
        }
    }
}

impl GradientStops {
    /// `(offset, color)` pairs in gradient order.
    pub fn stops(&self) -> [(f64, Rgba); 3] {
        [(0.0, self.start), (0.5, self.mid), (1.0, self.end)]
    }
}

/// Vertical fill under the line, bottom to top.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FillGradient {
    pub bottom: Rgba,
    pub top: Rgba,
}

impl Default for FillGradient {
    fn default() -> Self {
        let blue = Rgba::new(54, 162, 235, 0.0);
        Self {
            bottom: blue,
            top: blue.with_alpha(0.2),
        }
    }
}

// ─── Animation ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Easing {
    Linear,
    EaseOut,
    EaseOutQuart,
    EaseInOutQuart,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationConfig {
    pub duration_ms: u32,
    pub easing: Easing,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration_ms: 750,
            easing: Easing::EaseInOutQuart,
        }
    }
}

// ─── Line, title, tooltip, axes ──────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineStyle {
    pub border_width: u32,
    /// Bezier smoothing, 0 draws straight segments.
    pub tension: f64,
    pub fill: bool,
    pub point_radius: u32,
    pub point_hover_radius: u32,
    pub point_background: Rgba,
    pub point_hover_border_width: u32,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            border_width: 2,
            tension: 0.4,
            fill: true,
            point_radius: 4,
            point_hover_radius: 6,
            point_background: Rgba::WHITE,
            point_hover_border_width: 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleConfig {
    pub display: bool,
    pub text: String,
    pub color: Rgba,
    pub font_size: u32,
    pub padding: u32,
}

impl Default for TitleConfig {
    fn default() -> Self {
        Self {
            display: true,
            text: "Price History".to_string(),
            color: Rgba::WHITE,
            font_size: 20,
            padding: 20,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipConfig {
    pub background: Rgba,
    pub padding: u32,
    pub display_colors: bool,
    /// Prepended to the raw value, e.g. `"Price: 0.42"`.
    pub label_prefix: String,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            background: Rgba::new(0, 0, 0, 0.8),
            padding: 12,
            display_colors: false,
            label_prefix: "Price: ".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisConfig {
    pub show_grid: bool,
    pub grid_color: Rgba,
    pub tick_color: Rgba,
    pub tick_font_size: u32,
    pub tick_rotation_deg: u32,
}

impl AxisConfig {
    /// Time labels: no grid, ticks slanted 45°.
    pub fn x_default() -> Self {
        Self {
            show_grid: false,
            grid_color: Rgba::new(255, 255, 255, 0.1),
            tick_color: Rgba::new(255, 255, 255, 0.8),
            tick_font_size: 12,
            tick_rotation_deg: 45,
        }
    }

    /// Price values: faint grid, flat ticks.
    pub fn y_default() -> Self {
        Self {
            show_grid: true,
            tick_rotation_deg: 0,
            ..Self::x_default()
        }
    }
}

// ─── ChartConfig ─────────────────────────────────────────────────────────────

/// Every recognized chart option.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfig {
    pub animation: AnimationConfig,
    pub gradient: GradientStops,
    pub fill: FillGradient,
    pub line: LineStyle,
    pub title: TitleConfig,
    pub tooltip: TooltipConfig,
    pub x_axis: AxisConfig,
    pub y_axis: AxisConfig,
    pub height_px: u32,
    pub show_legend: bool,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            animation: AnimationConfig::default(),
            gradient: GradientStops::default(),
            fill: FillGradient::default(),
            line: LineStyle::default(),
            title: TitleConfig::default(),
            tooltip: TooltipConfig::default(),
            x_axis: AxisConfig::x_default(),
            y_axis: AxisConfig::y_default(),
            height_px: 400,
            show_legend: false,
        }
    }
}
