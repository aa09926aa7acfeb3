//! Display strings derived from a [`WidgetState`]
//!
//! Every surface formats through here so the terminal panel and the plain
//! text output agree on rounding and labels.

use crate::glyph::{describe_weather_code, map_weather_code};
use crate::model::{CurrentConditions, WidgetState};

pub const LOADING_MESSAGE: &str = "Loading weather…";

/// Shown for every failure, whatever the cause
pub const UNAVAILABLE_MESSAGE: &str = "Weather unavailable";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WidgetDisplay {
    Loading,
    Ready {
        glyph: &'static str,
        /// Rounded to a whole degree, e.g. `68°F`
        temperature: String,
        /// One decimal, e.g. `5.2 mph`
        wind: String,
        description: &'static str,
        /// e.g. `Updated 14:00 UTC`
        updated: String,
    },
    Failed,
}

impl WidgetDisplay {
    pub fn from_state(state: &WidgetState) -> Self {
        match state {
            WidgetState::Loading => WidgetDisplay::Loading,
            WidgetState::Ready(conditions) => Self::ready(conditions),
            WidgetState::Failed(_) => WidgetDisplay::Failed,
        }
    }

    fn ready(conditions: &CurrentConditions) -> Self {
        WidgetDisplay::Ready {
            glyph: map_weather_code(conditions.weather_code),
            temperature: format_temperature(conditions),
            wind: format!(
                "{:.1} {}",
                conditions.wind_speed,
                conditions.units.wind_speed.suffix()
            ),
            description: describe_weather_code(conditions.weather_code),
            updated: format!("Updated {}", conditions.observed_at.format("%H:%M UTC")),
        }
    }

    /// Plain-text lines, top to bottom
    pub fn lines(&self) -> Vec<String> {
        match self {
            WidgetDisplay::Loading => vec![LOADING_MESSAGE.to_string()],
            WidgetDisplay::Ready {
                glyph,
                temperature,
                wind,
                description,
                updated,
            } => vec![
                format!("{glyph} {temperature}"),
                description.to_string(),
                format!("Wind {wind}"),
                updated.clone(),
            ],
            WidgetDisplay::Failed => vec![UNAVAILABLE_MESSAGE.to_string()],
        }
    }
}

fn format_temperature(conditions: &CurrentConditions) -> String {
    let rounded = conditions.temperature.round();
    // avoid printing "-0"
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{rounded:.0}{}", conditions.units.temperature.suffix())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Units;
    use chrono::{TimeZone, Utc};

    fn conditions(temperature: f64, wind_speed: f64, weather_code: i32) -> CurrentConditions {
        CurrentConditions {
            temperature,
            wind_speed,
            weather_code,
            observed_at: Utc.with_ymd_and_hms(2024, 5, 1, 14, 0, 0).unwrap(),
            units: Units::IMPERIAL,
        }
    }

    #[test]
    fn test_ready_display() {
        let display = WidgetDisplay::from_state(&WidgetState::Ready(conditions(68.4, 5.2, 2)));
        assert_eq!(
            display,
            WidgetDisplay::Ready {
                glyph: "⛅",
                temperature: "68°F".into(),
                wind: "5.2 mph".into(),
                description: "Partly cloudy",
                updated: "Updated 14:00 UTC".into(),
            }
        );
        assert_eq!(
            display.lines(),
            vec!["⛅ 68°F", "Partly cloudy", "Wind 5.2 mph", "Updated 14:00 UTC"]
        );
    }

    #[test]
    fn test_temperature_rounding() {
        let cases = [(68.5, "69°F"), (-0.4, "0°F"), (-3.6, "-4°F"), (99.49, "99°F")];
        for (temp, expected) in cases {
            match WidgetDisplay::from_state(&WidgetState::Ready(conditions(temp, 0.0, 0))) {
                WidgetDisplay::Ready { temperature, .. } => assert_eq!(temperature, expected),
                other => panic!("unexpected display {other:?}"),
            }
        }
    }

    #[test]
    fn test_metric_suffixes() {
        let mut metric = conditions(20.0, 12.0, 0);
        metric.units = Units::METRIC;
        let lines = WidgetDisplay::from_state(&WidgetState::Ready(metric)).lines();
        assert_eq!(lines[0], "☀️ 20°C");
        assert_eq!(lines[2], "Wind 12.0 km/h");
    }

    #[test]
    fn test_failed_hides_reason() {
        let display = WidgetDisplay::from_state(&WidgetState::Failed("HTTP 500".into()));
        assert_eq!(display.lines(), vec!["Weather unavailable"]);
    }

    #[test]
    fn test_loading_display() {
        assert_eq!(
            WidgetDisplay::from_state(&WidgetState::Loading).lines(),
            vec![LOADING_MESSAGE]
        );
    }
}
