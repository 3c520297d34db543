use serde::Serialize;

use super::value_objects::Rect;
use crate::domain::market_data::Bar;
use crate::time_utils::format_tooltip_date;

/// Width reserved for the tooltip box when it opens to the left
pub const TOOLTIP_WIDTH: f64 = 160.0;
/// Horizontal gap between glyph and tooltip
pub const TOOLTIP_GAP: f64 = 10.0;
/// How far above the glyph's top edge the tooltip starts
pub const TOOLTIP_RISE: f64 = 28.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TooltipSide {
    Left,
    Right,
}

/// Tooltip box origin in canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TooltipPlacement {
    pub left: f64,
    pub top: f64,
    pub side: TooltipSide,
}

impl TooltipPlacement {
    /// Opens away from the nearer edge: glyphs right of `midpoint_x` get a tooltip on their left.
    pub fn beside(glyph: Rect, midpoint_x: f64) -> Self {
        let (left, side) = if glyph.center_x() > midpoint_x {
            (glyph.x - TOOLTIP_GAP - TOOLTIP_WIDTH, TooltipSide::Left)
        } else {
            (glyph.right() + TOOLTIP_GAP, TooltipSide::Right)
        };
        Self { left, top: glyph.y - TOOLTIP_RISE, side }
    }
}

/// Text rows of the tooltip
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TooltipContent {
    pub date: String,
    pub open: String,
    pub high: String,
    pub low: String,
    pub close: String,
    pub volume: String,
}

impl TooltipContent {
    pub fn for_bar(bar: &Bar) -> Self {
        Self {
            date: format_tooltip_date(bar.date),
            open: format!("{:.2}", bar.open),
            high: format!("{:.2}", bar.high),
            low: format!("{:.2}", bar.low),
            close: format!("{:.2}", bar.close),
            volume: bar.volume.to_string(),
        }
    }

    pub fn rows(&self) -> [(&'static str, &str); 6] {
        [
            ("Date", self.date.as_str()),
            ("Open", self.open.as_str()),
            ("High", self.high.as_str()),
            ("Low", self.low.as_str()),
            ("Close", self.close.as_str()),
            ("Volume", self.volume.as_str()),
        ]
    }
}

/// The single tooltip of a chart; hidden means opacity 0, the last content stays.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TooltipState {
    pub visible: bool,
    pub placement: Option<TooltipPlacement>,
    pub content: Option<TooltipContent>,
}

impl TooltipState {
    pub fn show(&mut self, bar: &Bar, glyph: Rect, midpoint_x: f64) {
        self.placement = Some(TooltipPlacement::beside(glyph, midpoint_x));
        self.content = Some(TooltipContent::for_bar(bar));
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn opacity(&self) -> f64 {
        if self.visible { 1.0 } else { 0.0 }
    }
}
