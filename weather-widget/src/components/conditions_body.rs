use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use weather_widget_core::{TemperatureUnit, WidgetDisplay, WidgetState, UNAVAILABLE_MESSAGE};

use super::weather_panel::spinner;
use super::{Component, ERROR_ICON};
use crate::action::Action;
use crate::state::AppState;

pub struct ConditionsBody;

pub struct ConditionsBodyProps<'a> {
    pub state: &'a AppState,
}

impl Component<Action> for ConditionsBody {
    type Props<'a> = ConditionsBodyProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let lines = lines_for_state(props.state);

        let chunks = Layout::vertical(lines.iter().map(|_| Constraint::Length(1)))
            .flex(Flex::Center)
            .split(area);

        for (line, area) in lines.into_iter().zip(chunks.iter().copied()) {
            frame.render_widget(Paragraph::new(line), area);
        }
    }
}

fn lines_for_state(state: &AppState) -> Vec<Line<'static>> {
    match WidgetDisplay::from_state(&state.widget) {
        WidgetDisplay::Loading => vec![Line::from(vec![
            Span::styled(spinner(state.tick_count), Style::default().fg(Color::Cyan)),
            Span::styled(" Loading weather…", Style::default().fg(Color::Gray)),
        ])
        .centered()],
        WidgetDisplay::Ready {
            glyph,
            temperature,
            wind,
            description,
            updated,
        } => {
            let temp_color = match &state.widget {
                WidgetState::Ready(c) => temp_to_color(celsius(c.temperature, c.units.temperature)),
                _ => Color::White,
            };

            vec![
                Line::from(glyph).centered(),
                blank_line(),
                Line::from(Span::styled(temperature, Style::default().fg(temp_color).bold()))
                    .centered(),
                Line::from(Span::styled(description, Style::default().fg(Color::Gray)))
                    .centered(),
                Line::from(vec![
                    Span::styled("Wind ", Style::default().fg(Color::DarkGray)),
                    Span::styled(wind, Style::default().fg(Color::White)),
                ])
                .centered(),
                blank_line(),
                Line::from(Span::styled(updated, Style::default().fg(Color::DarkGray))).centered(),
            ]
        }
        WidgetDisplay::Failed => vec![
            Line::from(ERROR_ICON).centered(),
            Line::from(Span::styled(
                UNAVAILABLE_MESSAGE,
                Style::default().fg(Color::Red).bold(),
            ))
            .centered(),
            blank_line(),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::DarkGray)),
                Span::styled("r", Style::default().fg(Color::Cyan).bold()),
                Span::styled(" to retry", Style::default().fg(Color::DarkGray)),
            ])
            .centered(),
        ],
    }
}

fn blank_line() -> Line<'static> {
    Line::from("")
}

fn celsius(temperature: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Celsius => temperature,
        TemperatureUnit::Fahrenheit => (temperature - 32.0) * 5.0 / 9.0,
    }
}

/// Get temperature-based color
fn temp_to_color(celsius: f64) -> Color {
    match celsius.round() as i32 {
        ..=-10 => Color::Rgb(150, 200, 255),  // Very cold - light blue
        -9..=0 => Color::Rgb(100, 180, 255),  // Cold - blue
        1..=10 => Color::Rgb(100, 220, 200),  // Cool - cyan
        11..=20 => Color::Rgb(150, 230, 150), // Mild - green
        21..=30 => Color::Rgb(255, 220, 100), // Warm - yellow
        31..=40 => Color::Rgb(255, 150, 80),  // Hot - orange
        _ => Color::Rgb(255, 100, 100),       // Very hot - red
    }
}
