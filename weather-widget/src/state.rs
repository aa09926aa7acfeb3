//! Application state - single source of truth
//!
//! Components receive `&AppState` as props; only the reducer mutates it.

use std::time::Duration;

use weather_widget_core::WidgetState;

/// Spinner frame interval while loading
pub const LOADING_ANIM_TICK_MS: u64 = 100;

#[derive(Clone, Debug)]
pub struct AppState {
    /// Whatever the widget controller rendered last
    pub widget: WidgetState,

    /// Shown in the help bar; `None` when auto-refresh is off
    pub auto_refresh: Option<Duration>,

    /// Animation frame counter (for loading spinner)
    pub tick_count: u32,

    pub terminal_size: (u16, u16),
}

impl AppState {
    pub fn new(auto_refresh: Option<Duration>) -> Self {
        Self {
            widget: WidgetState::Loading,
            auto_refresh,
            tick_count: 0,
            terminal_size: (80, 24), // updated on resize
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Some(Duration::from_secs(
            weather_widget_core::config::DEFAULT_REFRESH_SECS,
        )))
    }
}
