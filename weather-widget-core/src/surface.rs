//! Rendering surfaces
//!
//! A surface is the single container the widget draws into. Each render
//! replaces its whole contents, so rendering the same state twice leaves it
//! byte-for-byte unchanged.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::display::WidgetDisplay;
use crate::model::WidgetState;

/// Render target handed to the controller at construction
///
/// Takes `&self` because overlapping refresh runs may render concurrently.
pub trait Surface: Send + Sync {
    fn render(&self, state: &WidgetState);
}

impl<S: Surface + ?Sized> Surface for Arc<S> {
    fn render(&self, state: &WidgetState) {
        (**self).render(state)
    }
}

/// Plain-text surface
#[derive(Debug, Default)]
pub struct TextSurface {
    contents: Mutex<String>,
}

impl TextSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current visible output
    pub fn contents(&self) -> String {
        self.contents.lock().clone()
    }
}

impl Surface for TextSurface {
    fn render(&self, state: &WidgetState) {
        let text = WidgetDisplay::from_state(state).lines().join("\n");
        *self.contents.lock() = text;
    }
}

/// Keeps every rendered state, oldest first
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingSurface {
    renders: Mutex<Vec<WidgetState>>,
}

#[cfg(test)]
impl RecordingSurface {
    pub(crate) fn labels(&self) -> Vec<&'static str> {
        self.renders.lock().iter().map(WidgetState::label).collect()
    }

    pub(crate) fn last(&self) -> Option<WidgetState> {
        self.renders.lock().last().cloned()
    }
}

#[cfg(test)]
impl Surface for RecordingSurface {
    fn render(&self, state: &WidgetState) {
        self.renders.lock().push(state.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CurrentConditions, Units};
    use chrono::{TimeZone, Utc};

    fn ready() -> WidgetState {
        WidgetState::Ready(CurrentConditions {
            temperature: 68.4,
            wind_speed: 5.2,
            weather_code: 2,
            observed_at: Utc.with_ymd_and_hms(2024, 5, 1, 14, 0, 0).unwrap(),
            units: Units::IMPERIAL,
        })
    }

    #[test]
    fn test_render_replaces_contents() {
        let surface = TextSurface::new();
        surface.render(&WidgetState::Loading);
        assert_eq!(surface.contents(), "Loading weather…");

        surface.render(&WidgetState::Failed("offline".into()));
        assert_eq!(surface.contents(), "Weather unavailable");
    }

    #[test]
    fn test_render_is_idempotent() {
        let surface = TextSurface::new();
        let state = ready();

        surface.render(&state);
        let first = surface.contents();
        surface.render(&state);
        let second = surface.contents();

        assert_eq!(first.as_bytes(), second.as_bytes());
        assert_eq!(
            first,
            "⛅ 68°F\nPartly cloudy\nWind 5.2 mph\nUpdated 14:00 UTC"
        );
    }

    #[test]
    fn test_arc_surface_forwards() {
        let surface = Arc::new(RecordingSurface::default());
        let handle: Arc<RecordingSurface> = surface.clone();
        handle.render(&WidgetState::Loading);
        handle.render(&ready());
        assert_eq!(surface.labels(), vec!["loading", "ready"]);
        assert_eq!(surface.last(), Some(ready()));
    }
}
