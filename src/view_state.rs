use crate::domain::errors::AppError;
use crate::domain::market_data::StockData;

/// Lifecycle of one read as a view sees it.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum LoadState<T> {
    #[default]
    Loading,
    /// Carries the user-facing message only
    Error(String),
    Ready(T),
}

/// Per-ticker view
pub type ViewState = LoadState<StockData>;
/// Landing page greeting
pub type LandingState = LoadState<String>;

impl<T> LoadState<T> {
    /// Terminal state for a finished read; errors keep only the static message.
    pub fn from_result(result: Result<T, AppError>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(err) => Self::Error(err.user_message().to_string()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::FETCH_ERROR_MESSAGE;

    #[test]
    fn errors_lose_their_detail() {
        let state: LandingState = LoadState::from_result(Err(AppError::Network("HTTP error: 502".into())));
        assert_eq!(state.error(), Some(FETCH_ERROR_MESSAGE));
        assert!(state.ready().is_none());
    }

    #[test]
    fn starts_loading() {
        assert!(ViewState::default().is_loading());
    }
}
