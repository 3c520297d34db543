use crate::domain::errors::NetworkResult;
use crate::domain::market_data::{StockData, Ticker};

/// Source of daily bars for a ticker
#[allow(async_fn_in_trait)]
pub trait SeriesSource {
    /// One read per call. No retry, no timeout.
    async fn fetch_series(&self, ticker: &Ticker) -> NetworkResult<StockData>;
}

/// Source of the landing page greeting
#[allow(async_fn_in_trait)]
pub trait MessageSource {
    async fn fetch_message(&self) -> NetworkResult<String>;
}
