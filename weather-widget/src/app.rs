//! Runtime glue: render, event mapping and effect handling
//!
//! These are the closures handed to `EffectRuntime::run`, kept here so the
//! whole event → action → effect → render path can be driven from tests.

use std::sync::Arc;

use ratatui::{layout::Rect, Frame};
use tui_dispatch::{ActionSummary, EventKind, EventOutcome, Middleware, TaskManager};
use weather_widget_core::{ConditionsSource, Locator, WidgetController};

use crate::action::Action;
use crate::components::{Component, WeatherPanel, WeatherPanelProps};
use crate::effect::Effect;
use crate::state::AppState;
use crate::surface::ActionSurface;

/// Controller whose renders come back as actions
pub type AppController<L, C> = WidgetController<L, C, ActionSurface>;

/// Task key for user-requested runs; a new request replaces one in flight
pub const WIDGET_TASK: &str = "widget";

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    WeatherPanel.render(frame, area, WeatherPanelProps { state });
}

pub fn map_event(event: &EventKind, state: &AppState) -> EventOutcome<Action> {
    if let EventKind::Resize(width, height) = event {
        return EventOutcome::action(Action::UiTerminalResize(*width, *height)).with_render();
    }

    EventOutcome::from_actions(WeatherPanel.handle_event(event, WeatherPanelProps { state }))
}

/// The final state arrives twice (surface render, then task result); the
/// reducer drops the repeat.
pub fn handle_effect<L, C>(
    effect: Effect,
    tasks: &mut TaskManager<Action>,
    controller: &Arc<AppController<L, C>>,
) where
    L: Locator + 'static,
    C: ConditionsSource + 'static,
{
    match effect {
        Effect::RunWidget => {
            let controller = Arc::clone(controller);
            tasks.spawn(WIDGET_TASK, async move {
                Action::WidgetDidRender(controller.run().await)
            });
        }
    }
}

/// Logs processed actions through `tracing`, skipping animation ticks
#[derive(Debug, Default, Clone, Copy)]
pub struct ActionLog;

impl Middleware<Action> for ActionLog {
    fn before(&mut self, _action: &Action) {}

    fn after(&mut self, action: &Action, state_changed: bool) {
        if !matches!(action, Action::Tick) {
            tracing::debug!(action = %action.summary(), state_changed, "Action processed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_dispatch::testing::*;

    #[test]
    fn test_resize_maps_to_action_and_render() {
        let state = AppState::default();
        let outcome = map_event(&EventKind::Resize(100, 40), &state);

        assert_eq!(outcome.actions, vec![Action::UiTerminalResize(100, 40)]);
        assert!(outcome.needs_render);
    }

    #[test]
    fn test_keys_map_through_panel() {
        let state = AppState::default();

        let outcome = map_event(&EventKind::Key(key("r")), &state);
        assert_eq!(outcome.actions, vec![Action::WidgetRefresh]);
        assert!(!outcome.needs_render);

        let outcome = map_event(&EventKind::Key(key("x")), &state);
        assert!(outcome.actions.is_empty());
    }
}
