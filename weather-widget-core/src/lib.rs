//! Core of a small current-conditions weather widget
//!
//! The widget reads a location, asks Open-Meteo for the current conditions at
//! that point, and writes the result to a rendering surface. It optionally
//! repeats on a timer.
//!
//! # Core Concepts
//!
//! - **WidgetState**: exactly one of Loading, Ready or Failed
//! - **Locator**: where the coordinates come from (IP lookup, fixed, none)
//! - **ConditionsSource**: where the weather comes from ([`OpenMeteoClient`])
//! - **Surface**: explicit handle to whatever displays the widget
//! - **WidgetController**: one acquire → fetch → render cycle
//! - **RefreshLifecycle**: start/stop handle for the periodic refresh
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use weather_widget_core::prelude::*;
//!
//! let config = WidgetConfig::default();
//! let surface = Arc::new(TextSurface::new());
//! let controller = WidgetController::new(
//!     IpLocator::new()?,
//!     OpenMeteoClient::new(&config.endpoint)?,
//!     surface.clone(),
//!     config,
//! );
//!
//! controller.run().await;
//! println!("{}", surface.contents());
//! ```

pub mod api;
pub mod config;
pub mod controller;
pub mod display;
pub mod error;
pub mod glyph;
pub mod lifecycle;
pub mod location;
pub mod model;
pub mod surface;

pub use api::{ConditionsSource, OpenMeteoClient, DEFAULT_ENDPOINT};
pub use config::{WidgetConfig, FALLBACK_COORDINATES};
pub use controller::WidgetController;
pub use display::{WidgetDisplay, UNAVAILABLE_MESSAGE};
pub use error::{ConfigError, LocationError, WeatherError};
pub use glyph::{describe_weather_code, map_weather_code, DEFAULT_GLYPH};
pub use lifecycle::RefreshLifecycle;
pub use location::{FixedLocator, IpLocator, Locator, NoLocator};
pub use model::{
    Coordinates, CurrentConditions, TemperatureUnit, Units, WidgetState, WindSpeedUnit,
};
pub use surface::{Surface, TextSurface};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        ConditionsSource, Coordinates, CurrentConditions, FixedLocator, IpLocator, Locator,
        NoLocator, OpenMeteoClient, RefreshLifecycle, Surface, TextSurface, Units,
        WidgetConfig, WidgetController, WidgetDisplay, WidgetState,
    };
}
