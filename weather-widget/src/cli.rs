//! Command-line arguments and configuration resolution
//!
//! Precedence: built-in defaults, then `--config` file, then flags.

use std::path::PathBuf;

use clap::Parser;
use weather_widget_core::{
    ConfigError, Coordinates, FixedLocator, IpLocator, LocationError, Locator, NoLocator,
    TemperatureUnit, Units, WidgetConfig, WindSpeedUnit,
};

/// Current-conditions weather widget for the terminal
#[derive(Parser, Debug)]
#[command(name = "weather-widget")]
#[command(about = "A current-conditions weather widget powered by Open-Meteo")]
pub struct Args {
    /// JSON config file (keys of WidgetConfig; missing keys keep defaults)
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Fixed latitude (skips location lookup)
    #[arg(long, requires = "lon", allow_negative_numbers = true)]
    pub lat: Option<f64>,

    /// Fixed longitude (skips location lookup)
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    pub lon: Option<f64>,

    /// Don't look up the location; always use the fallback coordinates
    #[arg(long, conflicts_with = "lat")]
    pub no_geolocate: bool,

    /// Latitude used when location lookup fails
    #[arg(long, allow_negative_numbers = true)]
    pub fallback_lat: Option<f64>,

    /// Longitude used when location lookup fails
    #[arg(long, allow_negative_numbers = true)]
    pub fallback_lon: Option<f64>,

    /// Unit preset: imperial or metric
    #[arg(long)]
    pub units: Option<Units>,

    /// fahrenheit or celsius (overrides --units)
    #[arg(long)]
    pub temperature_unit: Option<TemperatureUnit>,

    /// mph or kmh (overrides --units)
    #[arg(long)]
    pub wind_unit: Option<WindSpeedUnit>,

    /// Auto-refresh interval in minutes
    #[arg(long)]
    pub refresh_mins: Option<u64>,

    /// Fetch once at startup and never again
    #[arg(long)]
    pub no_auto_refresh: bool,

    /// Give up on location lookup after this many seconds
    #[arg(long)]
    pub location_timeout_secs: Option<u64>,

    /// Forecast endpoint (Open-Meteo compatible)
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Print the widget once as plain text and exit
    #[arg(long)]
    pub once: bool,

    /// Write logs to this file in interactive mode
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Args {
    /// Defaults, then config file, then flags; validated
    pub fn resolve_config(&self) -> Result<WidgetConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => WidgetConfig::load(path)?,
            None => WidgetConfig::default(),
        };

        if let Some(lat) = self.fallback_lat {
            config.fallback.latitude = lat;
        }
        if let Some(lon) = self.fallback_lon {
            config.fallback.longitude = lon;
        }
        if let Some(units) = self.units {
            config.units = units;
        }
        if let Some(unit) = self.temperature_unit {
            config.units.temperature = unit;
        }
        if let Some(unit) = self.wind_unit {
            config.units.wind_speed = unit;
        }
        if let Some(mins) = self.refresh_mins {
            config.refresh_interval_secs = mins.saturating_mul(60);
        }
        if self.no_auto_refresh {
            config.auto_refresh = false;
        }
        if let Some(secs) = self.location_timeout_secs {
            config.location_timeout_secs = secs;
        }
        if let Some(endpoint) = &self.endpoint {
            config.endpoint = endpoint.clone();
        }

        config.validate()?;
        Ok(config)
    }

    /// Which location service to use
    pub fn locator(&self) -> Result<SelectedLocator, LocationError> {
        if let (Some(lat), Some(lon)) = (self.lat, self.lon) {
            let coords = Coordinates::new(lat, lon);
            if !coords.is_valid() {
                return Err(LocationError::Lookup(format!("out of range: {coords}")));
            }
            return Ok(SelectedLocator::Fixed(FixedLocator(coords)));
        }
        if self.no_geolocate {
            return Ok(SelectedLocator::Disabled(NoLocator));
        }
        Ok(SelectedLocator::Ip(IpLocator::new()?))
    }
}

/// The locator picked on the command line
#[derive(Debug)]
pub enum SelectedLocator {
    Fixed(FixedLocator),
    Ip(IpLocator),
    Disabled(NoLocator),
}

impl Locator for SelectedLocator {
    async fn locate(&self) -> Result<Coordinates, LocationError> {
        match self {
            SelectedLocator::Fixed(locator) => locator.locate().await,
            SelectedLocator::Ip(locator) => locator.locate().await,
            SelectedLocator::Disabled(locator) => locator.locate().await,
        }
    }
}
