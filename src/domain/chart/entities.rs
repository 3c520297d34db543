use serde::Serialize;

use super::value_objects::{ChartDimensions, Color, Rect};
use crate::domain::market_data::{Bar, CandleTone};

/// Stroke opacity of every gridline
pub const GRID_OPACITY: f64 = 0.1;
/// Fill opacity of volume bars
pub const VOLUME_OPACITY: f64 = 0.5;
/// Gap between the x-axis and the month labels
pub const MONTH_LABEL_OFFSET: f64 = 40.0;
/// Smallest height of a candle's hover area, for days with no range
pub const MIN_HIT_HEIGHT: f64 = 6.0;

/// Straight segment in chart coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Line {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke: Color,
    pub opacity: f64,
}

impl Line {
    pub fn vertical(x: f64, y1: f64, y2: f64, stroke: Color, opacity: f64) -> Self {
        Self { x1: x, y1, x2: x, y2, stroke, opacity }
    }

    pub fn horizontal(y: f64, x1: f64, x2: f64, stroke: Color, opacity: f64) -> Self {
        Self { x1, y1: y, x2, y2: y, stroke, opacity }
    }
}

/// Labelled axis tick; `position` is along the axis
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisTick {
    pub position: f64,
    pub label: String,
}

/// Stem and body for one bar
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandleGlyph {
    pub index: usize,
    pub bar: Bar,
    pub stem: Line,
    pub body: Rect,
    /// Pointer target over the full band from High to Low, never thinner than [`MIN_HIT_HEIGHT`]
    pub hit: Rect,
    pub tone: CandleTone,
    pub fill: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VolumeBar {
    pub index: usize,
    pub rect: Rect,
    pub fill: Color,
    pub opacity: f64,
}

/// Month caption below the x-axis, centered on `x`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthLabel {
    pub x: f64,
    pub y: f64,
    pub text: String,
}

/// Everything needed to paint one chart. Coordinates are relative to the
/// drawable area, i.e. already inside the margins.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartScene {
    pub dimensions: ChartDimensions,
    /// `[0.95 * min(Low), max(High)]` before nice rounding
    pub raw_price_domain: (f64, f64),
    pub price_domain: (f64, f64),
    pub bandwidth: f64,
    pub x_ticks: Vec<AxisTick>,
    pub y_ticks: Vec<AxisTick>,
    pub horizontal_grid: Vec<Line>,
    pub vertical_grid: Vec<Line>,
    pub candles: Vec<CandleGlyph>,
    pub volumes: Vec<VolumeBar>,
    pub month_labels: Vec<MonthLabel>,
}

impl ChartScene {
    pub fn candle_count(&self) -> usize {
        self.candles.len()
    }

    /// Body rectangle of candle `index` in canvas coordinates (margins added)
    pub fn glyph_rect(&self, index: usize) -> Option<Rect> {
        let margin = self.dimensions.margin;
        self.candles
            .get(index)
            .map(|glyph| glyph.body.translate(margin.left, margin.top))
    }
}
