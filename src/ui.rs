//! UI building blocks - pure functions from view state to renderable text

use ratatui::{prelude::*, widgets::*};

use crate::app::state::ViewState;
use crate::constants::{EMPTY_TEXT, ERROR_PREFIX, HEADER_TEXT, LOADING_TEXT, RETRY_TEXT};
use crate::messages::RenderState;

/// Title of the content block.
///
/// Carries the state marker (`loading` / `error` / `user-data`) so terminal
/// automation can identify the rendered state.
pub fn content_title(view: &ViewState) -> String {
    match view.marker() {
        Some(marker) => format!(" {} [{}] ", HEADER_TEXT, marker),
        None => format!(" {} ", HEADER_TEXT),
    }
}

/// Lines of the content area.
///
/// Loading wins over everything, then error, then the empty view; the user
/// record renders last.
pub fn content_lines(view: &ViewState) -> Vec<Line<'static>> {
    match view {
        ViewState::Loading => vec![Line::from(Span::styled(
            LOADING_TEXT,
            Style::default().fg(Color::Yellow),
        ))],
        ViewState::Failed(message) => vec![
            Line::from(Span::styled(
                format!("{}{}", ERROR_PREFIX, message),
                Style::default().fg(Color::Red),
            )),
            Line::from(""),
            Line::from(Span::styled(
                format!("[ {} ] (r)", RETRY_TEXT),
                Style::default().fg(Color::Yellow).bold(),
            )),
        ],
        ViewState::Idle => vec![Line::from(Span::styled(
            EMPTY_TEXT,
            Style::default().fg(Color::DarkGray),
        ))],
        ViewState::Loaded(user) => vec![
            field_line("Name", &user.name),
            field_line("Email", &user.email),
            field_line("Phone", &user.phone),
            field_line("Website", &user.website),
        ],
    }
}

fn field_line(label: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{}: ", label),
            Style::default().fg(Color::Cyan).bold(),
        ),
        Span::raw(value.to_string()),
    ])
}

/// Border color of the content block
pub fn view_color(view: &ViewState) -> Color {
    match view {
        ViewState::Idle => Color::DarkGray,
        ViewState::Loading => Color::Yellow,
        ViewState::Loaded(_) => Color::Green,
        ViewState::Failed(_) => Color::Red,
    }
}

/// Status bar line with endpoint, key hints and the last round-trip time
pub fn status_text(state: &RenderState) -> String {
    let hints = if state.view.can_retry() {
        "r retry | q quit"
    } else {
        "q quit"
    };

    if state.time_ms > 0 {
        format!(" {} | {} | {}ms ", state.endpoint, hints, state.time_ms)
    } else {
        format!(" {} | {} ", state.endpoint, hints)
    }
}

/// Content paragraph for the given view, ready to render
pub fn content_widget(view: &ViewState) -> Paragraph<'static> {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(view_color(view)))
        .title(content_title(view));

    Paragraph::new(content_lines(view)).block(block)
}
