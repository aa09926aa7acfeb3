//! Actions
//!
//! Naming follows intent/result: `WidgetRefresh` asks for a run,
//! `WidgetDidRender` carries back whatever the controller drew.

use tui_dispatch::ActionSummary;
use weather_widget_core::WidgetState;

/// # Categories (inferred from naming):
/// - `widget`: WidgetRefresh, WidgetDidRender
/// - `ui`: UiTerminalResize
/// - `uncategorized`: Tick, Quit
#[derive(tui_dispatch::Action, Clone, Debug, PartialEq)]
#[action(infer_categories)]
pub enum Action {
    /// Intent: run the widget now (outside the refresh timer)
    WidgetRefresh,

    /// Result: the controller rendered a new widget state
    WidgetDidRender(WidgetState),

    UiTerminalResize(u16, u16),

    /// Periodic tick for loading animation
    Tick,

    Quit,
}

/// Concise form for action logging
impl ActionSummary for Action {
    fn summary(&self) -> String {
        match self {
            Action::WidgetDidRender(WidgetState::Ready(c)) => format!(
                "WidgetDidRender(Ready {{ temp: {:.1}, wind: {:.1}, code: {} }})",
                c.temperature, c.wind_speed, c.weather_code
            ),
            Action::WidgetDidRender(WidgetState::Failed(reason)) => {
                let msg = if reason.chars().count() > 40 {
                    format!("{}...", reason.chars().take(37).collect::<String>())
                } else {
                    reason.clone()
                };
                format!("WidgetDidRender(Failed({msg:?}))")
            }
            _ => format!("{:?}", self),
        }
    }
}
