use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value;

use super::entities::{Bar, BarRecord, Series, StockData};
use crate::domain::errors::{AppError, ValidationResult};

/// Calendar date format used on the wire
pub const WIRE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Validation of raw bar records
pub struct BarValidator;

impl BarValidator {
    /// Turn one record into a bar. `index` only feeds the error message.
    pub fn validate(index: usize, record: &BarRecord) -> ValidationResult<Bar> {
        let date = NaiveDate::parse_from_str(record.date.trim(), WIRE_DATE_FORMAT).map_err(|e| {
            AppError::Validation(format!("record {}: invalid date '{}': {}", index, record.date, e))
        })?;

        let prices = [
            ("Open", record.open),
            ("High", record.high),
            ("Low", record.low),
            ("Close", record.close),
        ];
        for (field, value) in prices {
            if !value.is_finite() || value <= 0.0 {
                return Err(AppError::Validation(format!(
                    "record {} ({}): {} must be a positive number, got {}",
                    index, record.date, field, value
                )));
            }
        }

        if !record.volume.is_finite() || record.volume < 0.0 || record.volume.fract() != 0.0 {
            return Err(AppError::Validation(format!(
                "record {} ({}): Volume must be a non-negative integer, got {}",
                index, record.date, record.volume
            )));
        }

        Ok(Bar::new(
            date,
            record.open,
            record.high,
            record.low,
            record.close,
            record.volume as u64,
        ))
    }

    /// All-or-nothing: the first bad record fails the whole series.
    pub fn validate_all(records: &[BarRecord]) -> ValidationResult<Series> {
        records
            .iter()
            .enumerate()
            .map(|(i, record)| Self::validate(i, record))
            .collect::<Result<Vec<_>, _>>()
            .map(Series::new)
    }
}

/// Parse a stock API body into a validated series, keeping the body for display
pub fn parse_stock_data(body: &str) -> ValidationResult<StockData> {
    let raw: Value = serde_json::from_str(body)?;
    let records = Vec::<BarRecord>::deserialize(&raw)?;
    let series = BarValidator::validate_all(&records)?;
    Ok(StockData::new(series, raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(date: &str, open: f64, volume: f64) -> BarRecord {
        BarRecord {
            date: date.to_string(),
            open,
            high: open + 2.0,
            low: open - 2.0,
            close: open + 1.0,
            volume,
        }
    }

    #[test]
    fn rejects_bad_date() {
        let err = BarValidator::validate(4, &record("2024-13-01", 10.0, 1.0)).unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg.starts_with("record 4")));
    }

    #[test]
    fn rejects_negative_volume_and_non_positive_price() {
        assert!(BarValidator::validate(0, &record("2024-01-02", 10.0, -1.0)).is_err());
        assert!(BarValidator::validate(0, &record("2024-01-02", 0.0, 1.0)).is_err());
        assert!(BarValidator::validate(0, &record("2024-01-02", f64::NAN, 1.0)).is_err());
    }

    #[test]
    fn rejects_fractional_volume() {
        let err = BarValidator::validate(2, &record("2024-01-02", 10.0, 1500.5)).unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg.contains("Volume")));
        let bar = BarValidator::validate(2, &record("2024-01-02", 10.0, 1500.0)).unwrap();
        assert_eq!(bar.volume, 1500);
    }

    #[test]
    fn one_bad_record_fails_everything() {
        let records = vec![record("2024-01-02", 10.0, 1.0), record("not-a-date", 10.0, 1.0)];
        assert!(BarValidator::validate_all(&records).is_err());
    }
}
