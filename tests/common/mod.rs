#![allow(dead_code)]

use chrono::NaiveDate;
use stonks_chart_wasm::domain::market_data::{Bar, Series};

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn bar(date: NaiveDate, open: f64, high: f64, low: f64, close: f64, volume: u64) -> Bar {
    Bar::new(date, open, high, low, close, volume)
}

/// The two-day January 2024 sample
pub fn two_day_series() -> Series {
    Series::new(vec![
        bar(day(2024, 1, 2), 100.0, 105.0, 98.0, 103.0, 1000),
        bar(day(2024, 1, 3), 103.0, 104.0, 99.0, 97.0, 2000),
    ])
}

/// `n` consecutive days starting 2024-01-01, alternating up and down
pub fn daily_series(n: usize) -> Series {
    let start = day(2024, 1, 1);
    Series::new(
        (0..n)
            .map(|i| {
                let base = 100.0 + (i % 7) as f64;
                let (open, close) = if i % 2 == 0 { (base, base + 1.5) } else { (base + 1.5, base) };
                bar(start + chrono::Duration::days(i as i64), open, base + 3.0, base - 2.0, close, 500 + i as u64)
            })
            .collect(),
    )
}
