//! Outer widget panel: border, title, body and key hints

use crossterm::event::KeyCode;
use ratatui::prelude::{Frame, Rect};
use ratatui::{
    layout::{Alignment, Constraint, Layout},
    style::{Color, Style, Stylize},
    widgets::{Block, Borders},
};
use tui_dispatch::EventKind;

use super::{Component, ConditionsBody, ConditionsBodyProps, HelpBar, HelpBarProps};
use crate::action::Action;
use crate::state::AppState;

pub const ERROR_ICON: &str = "⚠️";
pub const SPINNERS: [&str; 4] = ["◐", "◓", "◑", "◒"];

pub struct WeatherPanelProps<'a> {
    pub state: &'a AppState,
}

#[derive(Default)]
pub struct WeatherPanel;

impl Component<Action> for WeatherPanel {
    type Props<'a> = WeatherPanelProps<'a>;

    fn handle_event<'a>(
        &mut self,
        event: &EventKind,
        _props: WeatherPanelProps<'a>,
    ) -> Vec<Action>
    where
        // Makes `'a` early-bound, matching the trait's `impl IntoIterator` signature.
        'a: 'a,
    {
        match event {
            EventKind::Key(key) => match key.code {
                KeyCode::Char('r') | KeyCode::F(5) => vec![Action::WidgetRefresh],
                KeyCode::Char('q') | KeyCode::Esc => vec![Action::Quit],
                _ => vec![],
            },
            _ => vec![],
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: WeatherPanelProps<'_>) {
        let state = props.state;

        let loading_indicator = if state.widget.is_loading() {
            format!(" {} ", spinner(state.tick_count))
        } else {
            String::new()
        };

        let outer_block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Rgb(80, 80, 100)))
            .title(format!(" ☁ Weather{}", loading_indicator))
            .title_style(Style::default().fg(Color::Cyan).bold())
            .title_alignment(Alignment::Center);

        let inner = outer_block.inner(area);
        frame.render_widget(outer_block, area);

        let chunks = Layout::vertical([
            Constraint::Min(1),    // conditions, centered by the body
            Constraint::Length(1), // help bar
        ])
        .split(inner);

        ConditionsBody.render(frame, chunks[0], ConditionsBodyProps { state });
        HelpBar.render(
            frame,
            chunks[1],
            HelpBarProps {
                auto_refresh: state.auto_refresh,
            },
        );
    }
}

pub(crate) fn spinner(tick_count: u32) -> &'static str {
    SPINNERS[(tick_count as usize / 2) % SPINNERS.len()]
}
