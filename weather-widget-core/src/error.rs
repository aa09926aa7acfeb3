//! Error types
//!
//! None of these escape a widget run: location errors are replaced by the
//! fallback coordinates and weather errors become [`WidgetState::Failed`].
//!
//! [`WidgetState::Failed`]: crate::model::WidgetState::Failed

use std::path::PathBuf;

/// Location service errors
#[derive(Debug, thiserror::Error)]
pub enum LocationError {
    #[error("location service not supported on this platform")]
    Unsupported,
    #[error("location permission denied")]
    PermissionDenied,
    #[error("location request timed out")]
    Timeout,
    #[error("location lookup failed: {0}")]
    Lookup(String),
}

impl From<reqwest::Error> for LocationError {
    fn from(e: reqwest::Error) -> Self {
        LocationError::Lookup(e.to_string())
    }
}

/// Weather fetch errors
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("weather request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("weather service returned HTTP {0}")]
    Status(reqwest::StatusCode),
    #[error("malformed weather payload: {0}")]
    Parse(String),
}

impl WeatherError {
    /// Transport failures and non-success statuses
    pub fn is_network(&self) -> bool {
        matches!(self, WeatherError::Network(_) | WeatherError::Status(_))
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, WeatherError::Parse(_))
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("{field}: {message}")]
    Invalid { field: String, message: String },
    #[error("unknown unit: {0:?}")]
    UnknownUnit(String),
}

impl ConfigError {
    pub(crate) fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        ConfigError::Invalid {
            field: field.into(),
            message: message.into(),
        }
    }
}
