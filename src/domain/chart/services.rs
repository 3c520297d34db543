use chrono::Datelike;

use super::entities::{
    AxisTick, CandleGlyph, ChartScene, GRID_OPACITY, Line, MIN_HIT_HEIGHT, MONTH_LABEL_OFFSET,
    MonthLabel, VOLUME_OPACITY, VolumeBar,
};
use super::scale::{BandScale, LinearScale};
use super::value_objects::{ChartDimensions, Color, MonthGrouping, Rect};
use crate::domain::logging::LogComponent;
use crate::domain::market_data::{Bar, CandleTone, Series};
use crate::time_utils::{format_day_of_month, format_month_label, month_index};

/// Gap between bands as a fraction of the band step
pub const BAND_PADDING: f64 = 0.2;
/// The price axis starts this far below the lowest low
pub const PRICE_FLOOR_RATIO: f64 = 0.95;
/// Share of the drawable height given to volume bars
pub const VOLUME_HEIGHT_RATIO: f64 = 0.2;
/// Target number of y ticks
pub const Y_TICK_COUNT: usize = 10;
/// From this many bars on, only every `SPARSE_TICK_STEP`th bar gets an x label
pub const DENSE_SERIES_LEN: usize = 100;
pub const SPARSE_TICK_STEP: usize = 5;
/// Volume bars are this fraction of the band width
pub const VOLUME_WIDTH_RATIO: f64 = 0.8;

/// Month bucket key; `year` is `None` when grouping by month number only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthKey {
    pub year: Option<i32>,
    pub month0: u32,
}

impl MonthKey {
    pub fn of(bar: &Bar, grouping: MonthGrouping) -> Self {
        let year = match grouping {
            MonthGrouping::YearMonth => Some(bar.date.year()),
            MonthGrouping::MonthIndex => None,
        };
        Self { year, month0: month_index(bar.date) }
    }
}

/// Bars sharing a month key, in series order
#[derive(Debug, Clone, PartialEq)]
pub struct MonthGroup {
    pub key: MonthKey,
    pub indices: Vec<usize>,
}

impl MonthGroup {
    /// Structural middle of the group, not the chronological median
    pub fn middle_index(&self) -> usize {
        self.indices[self.indices.len() / 2]
    }

    pub fn first_index(&self) -> usize {
        self.indices[0]
    }
}

/// Groups in order of first appearance
pub fn group_by_month(bars: &[Bar], grouping: MonthGrouping) -> Vec<MonthGroup> {
    let mut groups: Vec<MonthGroup> = Vec::new();
    for (i, bar) in bars.iter().enumerate() {
        let key = MonthKey::of(bar, grouping);
        match groups.iter_mut().find(|g| g.key == key) {
            Some(group) => group.indices.push(i),
            None => groups.push(MonthGroup { key, indices: vec![i] }),
        }
    }
    groups
}

/// Indices of bars that carry an x-axis label
pub fn x_tick_indices(len: usize) -> impl Iterator<Item = usize> {
    let step = if len >= DENSE_SERIES_LEN { SPARSE_TICK_STEP } else { 1 };
    (0..len).step_by(step)
}

/// Gain/loss palette
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartPalette {
    pub gain: Color,
    pub loss: Color,
    pub stem: Color,
    pub grid: Color,
    pub volume: Color,
}

impl Default for ChartPalette {
    fn default() -> Self {
        Self {
            gain: Color::GREEN,
            loss: Color::RED,
            stem: Color::BLACK,
            grid: Color::BLACK,
            volume: Color::GREY,
        }
    }
}

impl ChartPalette {
    pub fn fill_for(&self, tone: CandleTone) -> Color {
        match tone {
            CandleTone::Gain => self.gain,
            CandleTone::Loss => self.loss,
        }
    }
}

/// Domain service turning a series into a scene
#[derive(Debug, Clone, Default)]
pub struct ChartRenderingService {
    pub dimensions: ChartDimensions,
    pub palette: ChartPalette,
    pub grouping: MonthGrouping,
}

impl ChartRenderingService {
    pub fn new(dimensions: ChartDimensions, grouping: MonthGrouping) -> Self {
        Self { dimensions, palette: ChartPalette::default(), grouping }
    }

    /// `None` for an empty series: nothing is drawn.
    pub fn build_scene(&self, series: &Series) -> Option<ChartScene> {
        let (min_low, max_high) = series.price_range()?;
        let bars = series.bars();
        let width = self.dimensions.inner_width();
        let height = self.dimensions.inner_height();

        let x = BandScale::new(bars.len(), (0.0, width), BAND_PADDING);
        let raw_price_domain = (min_low * PRICE_FLOOR_RATIO, max_high);
        let y = LinearScale::new(raw_price_domain, (height, 0.0)).nice(Y_TICK_COUNT);
        let max_volume = series.max_volume();
        let volume_top = height * (1.0 - VOLUME_HEIGHT_RATIO);
        let vy = LinearScale::new((0.0, max_volume as f64), (height, volume_top));
        let bandwidth = x.bandwidth();

        let y_values = y.ticks(Y_TICK_COUNT);
        let precision = y.tick_precision(Y_TICK_COUNT);
        let y_ticks = y_values
            .iter()
            .map(|&v| AxisTick { position: y.map(v), label: format_price_tick(v, precision) })
            .collect();
        let horizontal_grid = y_values
            .iter()
            .map(|&v| Line::horizontal(y.map(v), 0.0, width, self.palette.grid, GRID_OPACITY))
            .collect();

        let mut vertical_grid = Vec::with_capacity(bars.len());
        let mut candles = Vec::with_capacity(bars.len());
        let mut volumes = Vec::with_capacity(bars.len());

        for (i, bar) in bars.iter().enumerate() {
            let left = x.position(i).unwrap_or_default();
            let center = left + bandwidth / 2.0;

            vertical_grid.push(Line::vertical(center, 0.0, height, self.palette.grid, GRID_OPACITY));

            let tone = bar.tone();
            let body_y = y.map(bar.body_top());
            let body_height = (y.map(bar.open) - y.map(bar.close)).abs();
            candles.push(CandleGlyph {
                index: i,
                bar: *bar,
                stem: Line::vertical(center, y.map(bar.high), y.map(bar.low), self.palette.stem, 1.0),
                body: Rect::new(left, body_y, bandwidth, body_height),
                hit: hit_area(left, bandwidth, y.map(bar.high), y.map(bar.low)),
                tone,
                fill: self.palette.fill_for(tone),
            });

            // all-zero volume: keep bars flat instead of the collapsed-domain midpoint
            let volume_y = if max_volume == 0 { height } else { vy.map(bar.volume as f64) };
            let inset = bandwidth * (1.0 - VOLUME_WIDTH_RATIO) / 2.0;
            volumes.push(VolumeBar {
                index: i,
                rect: Rect::new(left + inset, volume_y, bandwidth * VOLUME_WIDTH_RATIO, height - volume_y),
                fill: self.palette.volume,
                opacity: VOLUME_OPACITY,
            });
        }

        let x_ticks = x_tick_indices(bars.len())
            .map(|i| AxisTick {
                position: x.center(i).unwrap_or_default(),
                label: format_day_of_month(bars[i].date),
            })
            .collect();

        let month_labels = group_by_month(bars, self.grouping)
            .iter()
            .map(|group| MonthLabel {
                x: x.center(group.middle_index()).unwrap_or_default(),
                y: height + MONTH_LABEL_OFFSET,
                text: format_month_label(bars[group.first_index()].date),
            })
            .collect();

        crate::log_debug!(
            LogComponent::Domain("ChartRendering"),
            "scene for {} bars, price domain {:?}",
            bars.len(),
            y.domain()
        );

        Some(ChartScene {
            dimensions: self.dimensions,
            raw_price_domain,
            price_domain: y.domain(),
            bandwidth,
            x_ticks,
            y_ticks,
            horizontal_grid,
            vertical_grid,
            candles,
            volumes,
            month_labels,
        })
    }
}

fn hit_area(left: f64, bandwidth: f64, top: f64, bottom: f64) -> Rect {
    let span = bottom - top;
    if span >= MIN_HIT_HEIGHT {
        Rect::new(left, top, bandwidth, span)
    } else {
        let center = top + span / 2.0;
        Rect::new(left, center - MIN_HIT_HEIGHT / 2.0, bandwidth, MIN_HIT_HEIGHT)
    }
}

/// Y tick text in d3's `,.Nf` shape: fixed decimals, thousands grouped, typographic minus
fn format_price_tick(value: f64, precision: usize) -> String {
    let fixed = format!("{:.*}", precision, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (fixed.as_str(), None),
    };

    let mut text = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    if value < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        text.push('\u{2212}');
    }
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            text.push(',');
        }
        text.push(digit);
    }
    if let Some(frac_part) = frac_part {
        text.push('.');
        text.push_str(frac_part);
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_tick_text() {
        assert_eq!(format_price_tick(95.0, 0), "95");
        assert_eq!(format_price_tick(9.9, 1), "9.9");
        assert_eq!(format_price_tick(10.0, 1), "10.0");
        assert_eq!(format_price_tick(10.1, 1), "10.1");
        assert_eq!(format_price_tick(0.25, 2), "0.25");
        assert_eq!(format_price_tick(1200.0, 0), "1,200");
        assert_eq!(format_price_tick(1_234_567.5, 1), "1,234,567.5");
        assert_eq!(format_price_tick(-1500.0, 0), "\u{2212}1,500");
        assert_eq!(format_price_tick(-0.0, 1), "0.0");
    }

    #[test]
    fn sparse_ticks_from_one_hundred_bars() {
        assert_eq!(x_tick_indices(99).count(), 99);
        assert_eq!(x_tick_indices(100).count(), 20);
        assert_eq!(x_tick_indices(101).count(), 21);
        assert_eq!(x_tick_indices(12).collect::<Vec<_>>().len(), 12);
    }
}
