//! WMO weather code lookup
//!
//! See <https://open-meteo.com/en/docs#weathervariables> for the code list.

/// Shown for any code missing from the table
pub const DEFAULT_GLYPH: &str = "🌡️";

/// Map a WMO weather code to a display glyph
///
/// Total: unknown codes (including negative ones) get [`DEFAULT_GLYPH`].
pub fn map_weather_code(code: i32) -> &'static str {
    match code {
        0 => "☀️",
        1 => "🌤️",
        2 => "⛅",
        3 => "☁️",
        45 | 48 => "🌫️",
        51 | 53 | 55 => "🌦️",
        56 | 57 => "🌧️",
        61 | 63 | 65 => "🌧️",
        66 | 67 => "🌧️",
        71 | 73 | 75 | 77 => "🌨️",
        80..=82 => "🌦️",
        85 | 86 => "🌨️",
        95 | 96 | 99 => "⛈️",
        _ => DEFAULT_GLYPH,
    }
}

/// Convert WMO weather code to human-readable description
pub fn describe_weather_code(code: i32) -> &'static str {
    match code {
        0 => "Clear sky",
        1 => "Mainly clear",
        2 => "Partly cloudy",
        3 => "Overcast",
        45 | 48 => "Fog",
        51 | 53 | 55 => "Drizzle",
        56 | 57 => "Freezing drizzle",
        61 | 63 | 65 => "Rain",
        66 | 67 => "Freezing rain",
        71 | 73 | 75 => "Snow",
        77 => "Snow grains",
        80..=82 => "Rain showers",
        85 | 86 => "Snow showers",
        95 => "Thunderstorm",
        96 | 99 => "Thunderstorm with hail",
        _ => "Unknown",
    }
}
