pub use super::value_objects::{CandleTone, Ticker};
use chrono::NaiveDate;
use derive_more::Deref;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Domain entity - one trading day
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Bar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

impl Bar {
    pub fn new(date: NaiveDate, open: f64, high: f64, low: f64, close: f64, volume: u64) -> Self {
        Self { date, open, high, low, close, volume }
    }

    pub fn tone(&self) -> CandleTone {
        CandleTone::of(self.open, self.close)
    }

    pub fn body_top(&self) -> f64 {
        self.open.max(self.close)
    }
}

/// Wire form of a bar as the stock API sends it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BarRecord {
    pub date: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

/// Domain entity - bars ascending by date
#[derive(Debug, Clone, PartialEq, Default, Deref)]
pub struct Series(Vec<Bar>);

impl Series {
    pub fn new(bars: Vec<Bar>) -> Self {
        Self(bars)
    }

    pub fn bars(&self) -> &[Bar] {
        &self.0
    }

    /// Lowest low and highest high
    pub fn price_range(&self) -> Option<(f64, f64)> {
        if self.0.is_empty() {
            return None;
        }
        let min_low = self.0.iter().map(|b| b.low).fold(f64::INFINITY, f64::min);
        let max_high = self.0.iter().map(|b| b.high).fold(f64::NEG_INFINITY, f64::max);
        Some((min_low, max_high))
    }

    pub fn max_volume(&self) -> u64 {
        self.0.iter().map(|b| b.volume).max().unwrap_or(0)
    }
}

impl From<Vec<Bar>> for Series {
    fn from(bars: Vec<Bar>) -> Self {
        Self(bars)
    }
}

/// A validated series next to the response body it came from
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StockData {
    pub series: Series,
    raw: Value,
}

impl StockData {
    pub fn new(series: Series, raw: Value) -> Self {
        Self { series, raw }
    }

    /// The response as received, pretty printed with two-space indent and its own key order
    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(&self.raw).unwrap_or_default()
    }
}
