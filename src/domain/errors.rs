/// Message shown to the user for any failed read. Causes are logged, never displayed.
pub const FETCH_ERROR_MESSAGE: &str = "Error fetching data";

/// Simplified error system - one enum, no layering.
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    /// Transport failure or non-2xx status.
    Network(String),
    /// Body is not the JSON shape we expect.
    Parse(String),
    /// Body parsed but a bar record is unusable.
    Validation(String),
}

impl AppError {
    /// The static text a view shows for this error.
    pub fn user_message(&self) -> &'static str {
        FETCH_ERROR_MESSAGE
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Network(msg) => write!(f, "Network Error: {}", msg),
            AppError::Parse(msg) => write!(f, "Parse Error: {}", msg),
            AppError::Validation(msg) => write!(f, "Validation Error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Parse(err.to_string())
    }
}

// Simple convenience type aliases
pub type NetworkResult<T> = Result<T, AppError>;
pub type ValidationResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_collapses_to_the_same_message() {
        let errors = [
            AppError::Network("HTTP error: 500".into()),
            AppError::Parse("expected value".into()),
            AppError::Validation("bad date".into()),
        ];
        for err in errors {
            assert_eq!(err.user_message(), FETCH_ERROR_MESSAGE);
        }
    }

    #[test]
    fn display_keeps_the_detail() {
        let err = AppError::Validation("record 3: invalid date 'x'".into());
        assert_eq!(err.to_string(), "Validation Error: record 3: invalid date 'x'");
    }
}
