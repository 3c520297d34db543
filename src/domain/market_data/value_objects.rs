use derive_more::{Deref, Display};
use serde::{Deserialize, Serialize};

use crate::domain::errors::{AppError, ValidationResult};

/// Value Object - ticker symbol, trimmed and upper-cased
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deref, Display, Serialize, Deserialize)]
#[display(fmt = "{}", _0)]
pub struct Ticker(String);

impl Ticker {
    pub fn new(raw: &str) -> ValidationResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(AppError::Validation("Ticker cannot be empty".to_string()));
        }
        if trimmed.contains('/') {
            return Err(AppError::Validation(format!("Ticker '{}' contains '/'", trimmed)));
        }
        Ok(Self(trimmed.to_uppercase()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Ticker {
    fn from(value: &str) -> Self {
        Self(value.trim().to_uppercase())
    }
}

/// Direction of a trading day, decides the candle body fill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum::AsRefStr)]
pub enum CandleTone {
    #[strum(serialize = "gain")]
    Gain,
    #[strum(serialize = "loss")]
    Loss,
}

impl CandleTone {
    /// Loss only when the day closed strictly below its open.
    pub fn of(open: f64, close: f64) -> Self {
        if open > close { Self::Loss } else { Self::Gain }
    }
}
