use crate::config::AppConfig;
use crate::domain::{
    errors::{AppError, NetworkResult},
    logging::{LogComponent, get_logger},
    market_data::{MessageSource, SeriesSource, StockData, Ticker, parse_stock_data},
};
use gloo::net::http::Request;
use serde::Deserialize;
use std::collections::HashMap;

/// Body of the landing health check
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LandingMessage {
    pub message: String,
}

/// HTTP client for the stock API, on top of gloo for WASM
#[derive(Clone)]
pub struct StockApiClient {
    config: AppConfig,
    default_headers: HashMap<String, String>,
}

impl StockApiClient {
    pub fn new(config: AppConfig) -> Self {
        let mut default_headers = HashMap::new();
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        Self { config, default_headers }
    }

    pub fn series_url(&self, ticker: &Ticker) -> String {
        self.config.stock_endpoint(&HttpUtils::encode_path_segment(ticker.value()))
    }

    /// GET, failing on transport errors and non-2xx statuses
    async fn get_text(&self, url: &str) -> NetworkResult<String> {
        get_logger().debug(
            LogComponent::Infrastructure("HTTP"),
            &format!("🌐 GET: {}", url)
        );

        let mut request = Request::get(url);
        for (key, value) in &self.default_headers {
            request = request.header(key, value);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AppError::Network(format!("Request failed: {:?}", e)))?;

        if !HttpUtils::is_success_status(response.status()) {
            return Err(AppError::Network(format!(
                "HTTP error: {} - {}",
                response.status(),
                response.status_text()
            )));
        }

        let text = response
            .text()
            .await
            .map_err(|e| AppError::Network(format!("Failed to read response: {:?}", e)))?;

        get_logger().debug(
            LogComponent::Infrastructure("HTTP"),
            &format!("✅ GET response: {} bytes", text.len())
        );

        Ok(text)
    }

    /// GET with JSON decoding of the body
    async fn get_json<T>(&self, url: &str) -> NetworkResult<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let text = self.get_text(url).await?;
        Ok(serde_json::from_str(&text)?)
    }
}

impl SeriesSource for StockApiClient {
    async fn fetch_series(&self, ticker: &Ticker) -> NetworkResult<StockData> {
        let url = self.series_url(ticker);
        let body = self.get_text(&url).await;
        let result = body.and_then(|text| parse_stock_data(&text));

        match &result {
            Ok(data) => get_logger().info(
                LogComponent::Infrastructure("StockApi"),
                &format!("✅ {} bars for {}", data.series.len(), ticker)
            ),
            Err(e) => get_logger().log_with_metadata(
                crate::domain::logging::LogLevel::Error,
                LogComponent::Infrastructure("StockApi"),
                &format!("❌ series read failed: {}", e),
                &format!("ticker={} url={}", ticker, url),
            ),
        }
        result
    }
}

impl MessageSource for StockApiClient {
    async fn fetch_message(&self) -> NetworkResult<String> {
        let result = self
            .get_json::<LandingMessage>(&self.config.landing_path)
            .await
            .map(|body| body.message);
        if let Err(e) = &result {
            get_logger().error(
                LogComponent::Infrastructure("StockApi"),
                &format!("❌ landing read failed: {}", e)
            );
        }
        result
    }
}

/// URL helpers
pub struct HttpUtils;

impl HttpUtils {
    pub fn is_success_status(status: u16) -> bool {
        (200..300).contains(&status)
    }

    /// Percent-encode everything outside the RFC 3986 unreserved set
    pub fn encode_path_segment(input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        for byte in input.bytes() {
            match byte {
                b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                    out.push(byte as char)
                }
                _ => out.push_str(&format!("%{:02X}", byte)),
            }
        }
        out
    }

    /// `None` on a malformed escape or invalid UTF-8
    pub fn decode_path_segment(input: &str) -> Option<String> {
        let bytes = input.as_bytes();
        let mut out = Vec::with_capacity(bytes.len());
        let mut i = 0;
        while i < bytes.len() {
            if bytes[i] == b'%' {
                let hex = input.get(i + 1..i + 3)?;
                out.push(u8::from_str_radix(hex, 16).ok()?);
                i += 3;
            } else {
                out.push(bytes[i]);
                i += 1;
            }
        }
        String::from_utf8(out).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_range() {
        assert!(HttpUtils::is_success_status(200));
        assert!(HttpUtils::is_success_status(204));
        assert!(!HttpUtils::is_success_status(304));
        assert!(!HttpUtils::is_success_status(404));
    }

    #[test]
    fn test_segment_encoding() {
        assert_eq!(HttpUtils::encode_path_segment("BRK.B"), "BRK.B");
        assert_eq!(HttpUtils::encode_path_segment("^GSPC"), "%5EGSPC");
        assert_eq!(HttpUtils::encode_path_segment("A B/C"), "A%20B%2FC");
        assert_eq!(HttpUtils::decode_path_segment("%5EGSPC").as_deref(), Some("^GSPC"));
        assert_eq!(HttpUtils::decode_path_segment("%zz"), None);
        assert_eq!(HttpUtils::decode_path_segment("%5"), None);
    }

    #[test]
    fn test_series_url() {
        let config = AppConfig::resolve(Some("http://localhost:5000".into()), None, None);
        let client = StockApiClient::new(config);
        assert_eq!(
            client.series_url(&Ticker::from("aapl")),
            "http://localhost:5000/api/stock/AAPL"
        );
    }
}
