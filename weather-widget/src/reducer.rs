//! Reducer - (state, action) -> changed + effects
//!
//! All state mutations happen here. Async work is only ever requested, as an
//! [`Effect`], never performed.

use tui_dispatch::DispatchResult;

use crate::action::Action;
use crate::effect::Effect;
use crate::state::AppState;

pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== Widget actions =====
        Action::WidgetRefresh => DispatchResult::effect(Effect::RunWidget),

        Action::WidgetDidRender(widget) => {
            if state.widget == widget {
                DispatchResult::unchanged()
            } else {
                state.widget = widget;
                DispatchResult::changed()
            }
        }

        // ===== UI actions =====
        Action::UiTerminalResize(width, height) => {
            if state.terminal_size != (width, height) {
                state.terminal_size = (width, height);
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        // ===== Global actions =====
        Action::Tick => {
            state.tick_count = state.tick_count.wrapping_add(1);
            // only the spinner animates
            if state.widget.is_loading() {
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        // handled by the runtime's quit check
        Action::Quit => DispatchResult::unchanged(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use weather_widget_core::{CurrentConditions, Units, WidgetState};

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
    fn test_refresh_emits_run_effect() {
        let mut state = AppState::default();
        let result = reducer(&mut state, Action::WidgetRefresh);

        assert!(!result.changed);
        assert_eq!(result.effects, vec![Effect::RunWidget]);
    }

    #[test]
    fn test_did_render_replaces_widget_state() {
        let mut state = AppState::default();
        assert!(state.widget.is_loading());

        let result = reducer(&mut state, Action::WidgetDidRender(ready()));
        assert!(result.changed);
        assert!(state.widget.is_ready());

        let result = reducer(
            &mut state,
            Action::WidgetDidRender(WidgetState::Failed("HTTP 500".into())),
        );
        assert!(result.changed);
        assert!(state.widget.is_failed());
    }

    #[test]
    fn test_identical_render_does_not_redraw() {
        let mut state = AppState::default();
        reducer(&mut state, Action::WidgetDidRender(ready()));

        let result = reducer(&mut state, Action::WidgetDidRender(ready()));
        assert!(!result.changed);
        assert!(result.effects.is_empty());
    }

    #[test]
    fn test_terminal_resize() {
        let mut state = AppState::default();
        assert_eq!(state.terminal_size, (80, 24));

        assert!(reducer(&mut state, Action::UiTerminalResize(100, 40)).changed);
        assert_eq!(state.terminal_size, (100, 40));

        assert!(!reducer(&mut state, Action::UiTerminalResize(100, 40)).changed);
    }

    #[test]
    fn test_tick_only_rerenders_when_loading() {
        let mut state = AppState::default();
        assert!(reducer(&mut state, Action::Tick).changed);
        assert_eq!(state.tick_count, 1);

        state.widget = ready();
        assert!(!reducer(&mut state, Action::Tick).changed);
        assert_eq!(state.tick_count, 2);
    }

    #[test]
    fn test_quit_is_noop() {
        let mut state = AppState::default();
        assert_eq!(
            reducer(&mut state, Action::Quit),
            DispatchResult::unchanged()
        );
    }
}
