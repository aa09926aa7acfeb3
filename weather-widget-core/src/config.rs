//! Widget configuration
//!
//! Layered as defaults, then an optional JSON file, then whatever the caller
//! overrides (the binary applies its command-line flags on top).

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::api::DEFAULT_ENDPOINT;
use crate::error::ConfigError;
use crate::model::{Coordinates, Units};

/// Used whenever live location is unavailable (Seattle, WA)
pub const FALLBACK_COORDINATES: Coordinates = Coordinates::new(47.6062, -122.3321);

/// 15 minutes
pub const DEFAULT_REFRESH_SECS: u64 = 15 * 60;

pub const DEFAULT_LOCATION_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Forecast endpoint (Open-Meteo compatible)
    pub endpoint: String,

    /// Coordinates used when the locator fails
    pub fallback: Coordinates,

    pub units: Units,

    /// Re-run the widget every `refresh_interval_secs`
    pub auto_refresh: bool,

    pub refresh_interval_secs: u64,

    /// Upper bound on a single location request
    pub location_timeout_secs: u64,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            fallback: FALLBACK_COORDINATES,
            units: Units::default(),
            auto_refresh: true,
            refresh_interval_secs: DEFAULT_REFRESH_SECS,
            location_timeout_secs: DEFAULT_LOCATION_TIMEOUT_SECS,
        }
    }
}

impl WidgetConfig {
    /// Read a JSON config file; missing keys keep their defaults
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&raw).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "Loaded config file");
        Ok(config)
    }

    /// `None` when auto-refresh is off
    pub fn refresh_interval(&self) -> Option<Duration> {
        self.auto_refresh
            .then(|| Duration::from_secs(self.refresh_interval_secs))
    }

    pub fn location_timeout(&self) -> Duration {
        Duration::from_secs(self.location_timeout_secs)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.endpoint.trim().is_empty() {
            return Err(ConfigError::invalid("endpoint", "must not be empty"));
        }
        if !self.fallback.is_valid() {
            return Err(ConfigError::invalid(
                "fallback",
                format!("coordinates out of range: {}", self.fallback),
            ));
        }
        if self.auto_refresh && self.refresh_interval_secs == 0 {
            return Err(ConfigError::invalid(
                "refresh_interval_secs",
                "must be greater than zero",
            ));
        }
        if self.location_timeout_secs == 0 {
            return Err(ConfigError::invalid(
                "location_timeout_secs",
                "must be greater than zero",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TemperatureUnit;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = WidgetConfig::default();
        assert_eq!(config.endpoint, "https://api.open-meteo.com/v1/forecast");
        assert_eq!(config.fallback, Coordinates::new(47.6062, -122.3321));
        assert_eq!(config.refresh_interval(), Some(Duration::from_secs(900)));
        assert_eq!(config.location_timeout(), Duration::from_secs(5));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_auto_refresh_off_has_no_interval() {
        let config = WidgetConfig {
            auto_refresh: false,
            refresh_interval_secs: 0,
            ..Default::default()
        };
        assert_eq!(config.refresh_interval(), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = WidgetConfig {
            fallback: Coordinates::new(120.0, 0.0),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { field, .. }) if field == "fallback"
        ));

        let config = WidgetConfig {
            refresh_interval_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = WidgetConfig {
            location_timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "units": {{ "temperature": "celsius" }}, "refresh_interval_secs": 60 }}"#
        )
        .unwrap();

        let config = WidgetConfig::load(file.path()).unwrap();
        assert_eq!(config.units.temperature, TemperatureUnit::Celsius);
        assert_eq!(config.refresh_interval(), Some(Duration::from_secs(60)));
        assert_eq!(config.fallback, FALLBACK_COORDINATES);
    }

    #[test]
    fn test_load_reports_bad_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(
            WidgetConfig::load(file.path()),
            Err(ConfigError::Json { .. })
        ));
    }

    #[test]
    fn test_load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            WidgetConfig::load(&dir.path().join("absent.json")),
            Err(ConfigError::Read { .. })
        ));
    }
}
