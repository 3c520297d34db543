use serde::Serialize;
use strum::{AsRefStr, EnumString};

/// Value Object - outer margins around the drawable area
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

/// Value Object - chart canvas size and its margins
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartDimensions {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
}

impl Default for ChartDimensions {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 600.0,
            margin: Margin { top: 20.0, right: 30.0, bottom: 60.0, left: 40.0 },
        }
    }
}

impl ChartDimensions {
    /// Width available to bands
    pub fn inner_width(&self) -> f64 {
        self.width - self.margin.left - self.margin.right
    }

    /// Height available to prices and volume
    pub fn inner_height(&self) -> f64 {
        self.height - self.margin.top - self.margin.bottom
    }

    /// Horizontal midpoint of the whole canvas
    pub fn midpoint_x(&self) -> f64 {
        self.width / 2.0
    }
}

/// Value Object - axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        Self { x: self.x + dx, y: self.y + dy, ..*self }
    }
}

/// Value Object - opaque SVG color; opacity is a separate attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#rrggbb`
    pub fn to_css(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);
    /// CSS `green`
    pub const GREEN: Color = Color::rgb(0, 128, 0);
    /// CSS `grey`
    pub const GREY: Color = Color::rgb(128, 128, 128);
}

impl Serialize for Color {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_css())
    }
}

/// Value Object - how bars are bucketed for the month labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumString, AsRefStr)]
pub enum MonthGrouping {
    /// Calendar month of a specific year
    #[default]
    #[strum(serialize = "year-month")]
    YearMonth,
    /// Month number only; the same month in different years shares a label
    #[strum(serialize = "month")]
    MonthIndex,
}
