//! Open-Meteo forecast client
//!
//! One GET per widget run, asking only for the `current_weather` block.
//! Transport problems and non-success statuses are network errors; a body
//! that is not JSON or lacks a required field is a parse error.

use std::future::Future;
use std::time::Duration;

use chrono::{DateTime, NaiveDateTime, Utc};
use reqwest::Client;
use serde::Deserialize;

use crate::error::WeatherError;
use crate::model::{Coordinates, CurrentConditions, Units};

/// Public forecast endpoint (no key required)
pub const DEFAULT_ENDPOINT: &str = "https://api.open-meteo.com/v1/forecast";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Anything that can produce current conditions for a coordinate pair
pub trait ConditionsSource: Send + Sync {
    fn fetch_conditions(
        &self,
        coords: Coordinates,
        units: Units,
    ) -> impl Future<Output = Result<CurrentConditions, WeatherError>> + Send;
}

/// API response from Open-Meteo
#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current_weather: CurrentWeather,
}

#[derive(Debug, Deserialize)]
struct CurrentWeather {
    temperature: f64,
    windspeed: f64,
    weathercode: i32,
    /// ISO-8601 in GMT, minute precision (e.g. `2024-05-01T14:00`)
    #[serde(default)]
    time: Option<String>,
}

/// HTTP client for the Open-Meteo forecast endpoint
#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    client: Client,
    endpoint: String,
}

impl OpenMeteoClient {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, WeatherError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self::with_client(client, endpoint))
    }

    /// Reuse an existing `reqwest::Client`
    pub fn with_client(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl ConditionsSource for OpenMeteoClient {
    async fn fetch_conditions(
        &self,
        coords: Coordinates,
        units: Units,
    ) -> Result<CurrentConditions, WeatherError> {
        tracing::debug!(
            endpoint = %self.endpoint,
            latitude = coords.latitude,
            longitude = coords.longitude,
            "Fetching current conditions"
        );

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("latitude", coords.latitude.to_string()),
                ("longitude", coords.longitude.to_string()),
                ("current_weather", "true".to_string()),
                ("temperature_unit", units.temperature.as_query().to_string()),
                ("windspeed_unit", units.wind_speed.as_query().to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(WeatherError::Status(status));
        }

        let body = response.text().await?;
        let received_at = Utc::now();
        parse_conditions(&body, units, received_at)
    }
}

/// Decode a forecast body into [`CurrentConditions`]
///
/// `received_at` stands in for the observation time when the payload has none.
pub fn parse_conditions(
    body: &str,
    units: Units,
    received_at: DateTime<Utc>,
) -> Result<CurrentConditions, WeatherError> {
    let data: ForecastResponse =
        serde_json::from_str(body).map_err(|e| WeatherError::Parse(e.to_string()))?;
    let current = data.current_weather;

    let observed_at = match current.time.as_deref() {
        Some(time) => parse_observation_time(time)?,
        None => received_at,
    };

    Ok(CurrentConditions {
        temperature: current.temperature,
        wind_speed: current.windspeed,
        weather_code: current.weathercode,
        observed_at,
        units,
    })
}

fn parse_observation_time(time: &str) -> Result<DateTime<Utc>, WeatherError> {
    if let Ok(naive) = NaiveDateTime::parse_from_str(time, "%Y-%m-%dT%H:%M") {
        return Ok(naive.and_utc());
    }
    DateTime::parse_from_rfc3339(time)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| WeatherError::Parse(format!("bad observation time {time:?}: {e}")))
}
