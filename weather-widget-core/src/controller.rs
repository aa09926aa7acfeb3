//! Widget controller - one acquire → fetch → render cycle
//!
//! The controller owns its collaborators: a [`Locator`], a
//! [`ConditionsSource`] and the [`Surface`] it draws into. A run never fails;
//! every path ends with the surface showing Ready or Failed.

use crate::api::ConditionsSource;
use crate::config::WidgetConfig;
use crate::error::WeatherError;
use crate::glyph;
use crate::location::{locate_or_fallback, Locator};
use crate::model::{Coordinates, CurrentConditions, WidgetState};
use crate::surface::Surface;

pub struct WidgetController<L, C, S> {
    locator: L,
    source: C,
    surface: S,
    config: WidgetConfig,
}

impl<L, C, S> WidgetController<L, C, S>
where
    L: Locator,
    C: ConditionsSource,
    S: Surface,
{
    pub fn new(locator: L, source: C, surface: S, config: WidgetConfig) -> Self {
        Self {
            locator,
            source,
            surface,
            config,
        }
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Current position, or the configured fallback on any failure
    pub async fn acquire_location(&self) -> Coordinates {
        locate_or_fallback(
            &self.locator,
            self.config.location_timeout(),
            self.config.fallback,
        )
        .await
    }

    pub async fn fetch_conditions(
        &self,
        coords: Coordinates,
    ) -> Result<CurrentConditions, WeatherError> {
        self.source.fetch_conditions(coords, self.config.units).await
    }

    pub fn map_weather_code(&self, code: i32) -> &'static str {
        glyph::map_weather_code(code)
    }

    pub fn render(&self, state: &WidgetState) {
        self.surface.render(state);
    }

    /// Run one full cycle and return the state it left on the surface
    pub async fn run(&self) -> WidgetState {
        self.render(&WidgetState::Loading);

        let coords = self.acquire_location().await;
        let state = match self.fetch_conditions(coords).await {
            Ok(conditions) => {
                tracing::info!(
                    temperature = conditions.temperature,
                    wind_speed = conditions.wind_speed,
                    weather_code = conditions.weather_code,
                    "Weather updated"
                );
                WidgetState::Ready(conditions)
            }
            Err(e) => {
                tracing::warn!(error = %e, network = e.is_network(), "Weather fetch failed");
                WidgetState::Failed(e.to_string())
            }
        };

        self.render(&state);
        state
    }
}
