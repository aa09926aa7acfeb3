//! Surface that feeds widget renders into the action loop

use tokio::sync::mpsc;
use weather_widget_core::{Surface, WidgetState};

use crate::action::Action;

/// Each render becomes an [`Action::WidgetDidRender`]
///
/// The terminal panel then draws from `AppState`, so the visible widget is
/// always a pure function of the last state rendered here.
#[derive(Clone, Debug)]
pub struct ActionSurface {
    action_tx: mpsc::UnboundedSender<Action>,
}

impl ActionSurface {
    pub fn new(action_tx: mpsc::UnboundedSender<Action>) -> Self {
        Self { action_tx }
    }
}

impl Surface for ActionSurface {
    fn render(&self, state: &WidgetState) {
        // receiver gone means the app is shutting down
        if self
            .action_tx
            .send(Action::WidgetDidRender(state.clone()))
            .is_err()
        {
            tracing::debug!("Action channel closed, dropping widget render");
        }
    }
}
