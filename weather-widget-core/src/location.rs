//! Location acquisition
//!
//! A [`Locator`] may fail in several ways, but [`locate_or_fallback`] never
//! does: any error or timeout resolves to the fallback coordinates.

use std::future::Future;
use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use crate::error::LocationError;
use crate::model::Coordinates;

/// IP geolocation endpoint used by [`IpLocator::new`]
pub const DEFAULT_IP_ENDPOINT: &str = "https://ipapi.co/json/";

/// A platform location service
pub trait Locator: Send + Sync {
    fn locate(&self) -> impl Future<Output = Result<Coordinates, LocationError>> + Send;
}

/// Ask `locator` for a position, bounded by `timeout`
///
/// Unsupported platforms, denied permission, lookup failures and timeouts all
/// resolve to `fallback`.
pub async fn locate_or_fallback<L: Locator>(
    locator: &L,
    timeout: Duration,
    fallback: Coordinates,
) -> Coordinates {
    let error = match tokio::time::timeout(timeout, locator.locate()).await {
        Ok(Ok(coords)) => {
            tracing::debug!(%coords, "Location acquired");
            return coords;
        }
        Ok(Err(e)) => e,
        Err(_) => LocationError::Timeout,
    };

    tracing::warn!(error = %error, fallback = %fallback, "Location unavailable, using fallback");
    fallback
}

/// Coordinates known up front (e.g. given on the command line)
#[derive(Clone, Copy, Debug)]
pub struct FixedLocator(pub Coordinates);

impl Locator for FixedLocator {
    async fn locate(&self) -> Result<Coordinates, LocationError> {
        Ok(self.0)
    }
}

/// A platform with no location service
#[derive(Clone, Copy, Debug, Default)]
pub struct NoLocator;

impl Locator for NoLocator {
    async fn locate(&self) -> Result<Coordinates, LocationError> {
        Err(LocationError::Unsupported)
    }
}

#[derive(Debug, Deserialize)]
struct IpLookupResponse {
    latitude: Option<f64>,
    longitude: Option<f64>,
    #[serde(default)]
    error: bool,
    reason: Option<String>,
}

/// Approximate position from the public IP address
#[derive(Debug, Clone)]
pub struct IpLocator {
    client: Client,
    endpoint: String,
}

impl IpLocator {
    pub fn new() -> Result<Self, LocationError> {
        Self::with_endpoint(DEFAULT_IP_ENDPOINT)
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Result<Self, LocationError> {
        let client = Client::builder()
            .user_agent(concat!("weather-widget/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

impl Locator for IpLocator {
    async fn locate(&self) -> Result<Coordinates, LocationError> {
        let response = self.client.get(&self.endpoint).send().await?;

        let status = response.status();
        if status == reqwest::StatusCode::FORBIDDEN {
            return Err(LocationError::PermissionDenied);
        }
        if !status.is_success() {
            return Err(LocationError::Lookup(format!("HTTP {status}")));
        }

        let data: IpLookupResponse = response.json().await?;
        if data.error {
            let reason = data.reason.unwrap_or_else(|| "unknown error".to_string());
            return Err(LocationError::Lookup(reason));
        }

        match (data.latitude, data.longitude) {
            (Some(latitude), Some(longitude)) => {
                let coords = Coordinates::new(latitude, longitude);
                if coords.is_valid() {
                    Ok(coords)
                } else {
                    Err(LocationError::Lookup(format!("out of range: {coords}")))
                }
            }
            _ => Err(LocationError::Lookup("response has no coordinates".into())),
        }
    }
}
