use std::str::FromStr;

use crate::domain::chart::MonthGrouping;
use crate::domain::logging::LogComponent;
use crate::domain::surface::TITLE_PREFIX;

/// Window global read at load time for the API base URL
pub const API_URL_GLOBAL: &str = "STONKS_API_URL";
/// Window global selecting the month grouping (`year-month` or `month`)
pub const MONTH_GROUPING_GLOBAL: &str = "STONKS_MONTH_GROUPING";
/// Baked in by `STONKS_API_URL=... trunk build`
const BUILD_API_URL: Option<&str> = option_env!("STONKS_API_URL");

/// Health check path on the current origin
pub const LANDING_PATH: &str = "/api";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Prefix of the stock endpoint; empty means same origin
    pub api_base_url: String,
    pub landing_path: String,
    pub title_prefix: String,
    pub month_grouping: MonthGrouping,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            landing_path: LANDING_PATH.to_string(),
            title_prefix: TITLE_PREFIX.to_string(),
            month_grouping: MonthGrouping::default(),
        }
    }
}

impl AppConfig {
    /// Load-time values win over build-time ones. Unknown grouping names fall back to the default.
    pub fn resolve(
        load_time_url: Option<String>,
        build_time_url: Option<&str>,
        grouping: Option<String>,
    ) -> Self {
        let api_base_url = load_time_url
            .filter(|url| !url.trim().is_empty())
            .or_else(|| build_time_url.map(str::to_string))
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .unwrap_or_default();

        let month_grouping = match grouping.as_deref().map(MonthGrouping::from_str) {
            Some(Ok(parsed)) => parsed,
            Some(Err(_)) => {
                crate::log_warn!(
                    LogComponent::Application("Config"),
                    "unknown month grouping {:?}, using {}",
                    grouping,
                    MonthGrouping::default().as_ref()
                );
                MonthGrouping::default()
            }
            None => MonthGrouping::default(),
        };

        Self { api_base_url, month_grouping, ..Self::default() }
    }

    /// Reads the window globals, then the build-time environment.
    pub fn from_environment() -> Self {
        Self::resolve(
            read_global(API_URL_GLOBAL),
            BUILD_API_URL,
            read_global(MONTH_GROUPING_GLOBAL),
        )
    }

    pub fn stock_endpoint(&self, encoded_ticker: &str) -> String {
        format!("{}/api/stock/{}", self.api_base_url, encoded_ticker)
    }
}

#[cfg(target_arch = "wasm32")]
fn read_global(key: &str) -> Option<String> {
    use wasm_bindgen::JsValue;
    js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str(key))
        .ok()
        .and_then(|v| v.as_string())
}

#[cfg(not(target_arch = "wasm32"))]
fn read_global(_key: &str) -> Option<String> {
    None
}
