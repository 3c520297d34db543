use crate::domain::market_data::Ticker;
use crate::infrastructure::http::HttpUtils;

/// Pages the client knows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppRoute {
    /// `/`
    Landing,
    /// `/stock/:ticker`
    Stock(Ticker),
    NotFound,
}

impl AppRoute {
    /// Match a location pathname. A trailing slash is tolerated.
    pub fn resolve(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Self::Landing,
            ["stock", raw] => HttpUtils::decode_path_segment(raw)
                .and_then(|decoded| Ticker::new(&decoded).ok())
                .map(Self::Stock)
                .unwrap_or(Self::NotFound),
            _ => Self::NotFound,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Self::Landing | Self::NotFound => "/".to_string(),
            Self::Stock(ticker) => format!("/stock/{}", HttpUtils::encode_path_segment(ticker.value())),
        }
    }

    /// Text after `Stonks | ` in the document title
    pub fn title(&self) -> Option<String> {
        match self {
            Self::Landing => Some("Home".to_string()),
            Self::Stock(ticker) => Some(ticker.value().to_string()),
            Self::NotFound => Some("Not Found".to_string()),
        }
    }
}
