//! Widget data model
//!
//! Everything here is a plain value: coordinates are discarded after a fetch,
//! conditions are never persisted, and [`WidgetState`] lives only on the
//! surface that last rendered it.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// A point on the globe, in decimal degrees
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// True when both components are finite and inside their ranges
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

/// Temperature unit requested from the API
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    #[default]
    Fahrenheit,
    Celsius,
}

impl TemperatureUnit {
    /// Value of the `temperature_unit` query parameter
    pub fn as_query(&self) -> &'static str {
        match self {
            TemperatureUnit::Fahrenheit => "fahrenheit",
            TemperatureUnit::Celsius => "celsius",
        }
    }

    pub fn suffix(&self) -> &'static str {
        match self {
            TemperatureUnit::Fahrenheit => "°F",
            TemperatureUnit::Celsius => "°C",
        }
    }
}

impl FromStr for TemperatureUnit {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fahrenheit" | "f" => Ok(TemperatureUnit::Fahrenheit),
            "celsius" | "c" => Ok(TemperatureUnit::Celsius),
            other => Err(ConfigError::UnknownUnit(other.to_string())),
        }
    }
}

/// Wind speed unit requested from the API
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindSpeedUnit {
    #[default]
    Mph,
    Kmh,
}

impl WindSpeedUnit {
    /// Value of the `windspeed_unit` query parameter
    pub fn as_query(&self) -> &'static str {
        match self {
            WindSpeedUnit::Mph => "mph",
            WindSpeedUnit::Kmh => "kmh",
        }
    }

    pub fn suffix(&self) -> &'static str {
        match self {
            WindSpeedUnit::Mph => "mph",
            WindSpeedUnit::Kmh => "km/h",
        }
    }
}

impl FromStr for WindSpeedUnit {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mph" => Ok(WindSpeedUnit::Mph),
            "kmh" | "km/h" => Ok(WindSpeedUnit::Kmh),
            other => Err(ConfigError::UnknownUnit(other.to_string())),
        }
    }
}

/// Unit preferences sent with every request
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Units {
    #[serde(default)]
    pub temperature: TemperatureUnit,
    #[serde(default)]
    pub wind_speed: WindSpeedUnit,
}

impl Units {
    pub const IMPERIAL: Units = Units {
        temperature: TemperatureUnit::Fahrenheit,
        wind_speed: WindSpeedUnit::Mph,
    };

    pub const METRIC: Units = Units {
        temperature: TemperatureUnit::Celsius,
        wind_speed: WindSpeedUnit::Kmh,
    };
}

impl FromStr for Units {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "imperial" | "us" => Ok(Units::IMPERIAL),
            "metric" => Ok(Units::METRIC),
            other => Err(ConfigError::UnknownUnit(other.to_string())),
        }
    }
}

/// Point-in-time weather snapshot at one location
#[derive(Clone, Debug, PartialEq)]
pub struct CurrentConditions {
    pub temperature: f64,
    pub wind_speed: f64,
    /// WMO weather code
    pub weather_code: i32,
    pub observed_at: DateTime<Utc>,
    /// Units the values were requested in
    pub units: Units,
}

/// What the widget is currently showing
///
/// Always exactly one variant; there is no partially loaded state.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum WidgetState {
    #[default]
    Loading,
    Ready(CurrentConditions),
    /// Reason is kept for logs only, the surface shows a generic message
    Failed(String),
}

impl WidgetState {
    pub fn is_loading(&self) -> bool {
        matches!(self, WidgetState::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, WidgetState::Ready(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, WidgetState::Failed(_))
    }

    /// Short variant name for logging
    pub fn label(&self) -> &'static str {
        match self {
            WidgetState::Loading => "loading",
            WidgetState::Ready(_) => "ready",
            WidgetState::Failed(_) => "failed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinates_validity() {
        assert!(Coordinates::new(47.6062, -122.3321).is_valid());
        assert!(Coordinates::new(-90.0, 180.0).is_valid());
        assert!(!Coordinates::new(91.0, 0.0).is_valid());
        assert!(!Coordinates::new(0.0, -180.5).is_valid());
        assert!(!Coordinates::new(f64::NAN, 0.0).is_valid());
    }

    #[test]
    fn test_unit_query_values() {
        assert_eq!(TemperatureUnit::Fahrenheit.as_query(), "fahrenheit");
        assert_eq!(TemperatureUnit::Celsius.as_query(), "celsius");
        assert_eq!(WindSpeedUnit::Mph.as_query(), "mph");
        assert_eq!(WindSpeedUnit::Kmh.as_query(), "kmh");
    }

    #[test]
    fn test_units_from_str() {
        assert_eq!("metric".parse::<Units>().unwrap(), Units::METRIC);
        assert_eq!("Imperial".parse::<Units>().unwrap(), Units::IMPERIAL);
        assert_eq!(
            "C".parse::<TemperatureUnit>().unwrap(),
            TemperatureUnit::Celsius
        );
        assert_eq!("km/h".parse::<WindSpeedUnit>().unwrap(), WindSpeedUnit::Kmh);
        assert!("kelvin".parse::<TemperatureUnit>().is_err());
    }

    #[test]
    fn test_default_units_are_imperial() {
        assert_eq!(Units::default(), Units::IMPERIAL);
    }

    #[test]
    fn test_state_predicates() {
        assert!(WidgetState::default().is_loading());
        assert!(WidgetState::Failed("boom".into()).is_failed());
        assert_eq!(WidgetState::Failed("boom".into()).label(), "failed");
    }
}
