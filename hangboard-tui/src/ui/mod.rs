use crate::app::{App, View};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Padding, Paragraph},
    Frame,
};

mod delete_dialog;
mod editor_view;
mod exit_dialog;
mod history_view;
mod protocols_view;
mod timer_view;
pub(super) mod utils;

pub fn render(frame: &mut Frame, app: &mut App) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(frame.area());

    render_title_bar(frame, root[0], app);

    let body = root[1];
    match app.current_view {
        View::Protocols => protocols_view::render_protocols_view(frame, app, body),
        View::Timer => timer_view::render_timer_view(frame, app, body),
        View::History => history_view::render_history_view(frame, app, body),
        View::Editor => editor_view::render_editor_view(frame, app, body),
        View::ConfirmExit => exit_dialog::render_exit_dialog(frame, app, body),
        View::ConfirmDelete => delete_dialog::render_delete_confirm_dialog(frame, app, body),
    }
}

fn render_title_bar(frame: &mut Frame, area: Rect, app: &mut App) {
    let content_row = Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: 1,
    };

    const LABEL: &str = " Hangboard";
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(2 + LABEL.len() as u16),
            Constraint::Min(0),
        ])
        .split(content_row);

    let ticking = app.session.as_ref().is_some_and(|s| s.is_ticking());
    let throbber_area = Rect {
        x: cols[0].x + 1,
        y: cols[0].y,
        width: 1,
        height: 1,
    };
    let label_area = Rect {
        x: throbber_area.x + 1,
        y: cols[0].y,
        width: cols[0].width.saturating_sub(2),
        height: 1,
    };
    let throbber = throbber_widgets_tui::Throbber::default()
        .style(Style::default().fg(Color::Yellow))
        .throbber_style(Style::default().fg(Color::Yellow))
        .throbber_set(throbber_widgets_tui::BRAILLE_SIX)
        .use_type(if ticking {
            throbber_widgets_tui::WhichUse::Spin
        } else {
            throbber_widgets_tui::WhichUse::Full
        });
    frame.render_stateful_widget(throbber, throbber_area, &mut app.throbber_state);
    frame.render_widget(
        Paragraph::new(Span::styled(LABEL, Style::default().fg(Color::Yellow))),
        label_area,
    );

    let muted = Style::default().fg(Color::DarkGray);
    let sound = if app.sound_enabled { "on" } else { "off" };
    let right = Line::from(vec![
        Span::styled(" | ", muted),
        Span::styled("History:", Style::default().fg(Color::Yellow)),
        Span::styled(format!(" {} ", app.history.len()), Style::default().fg(Color::White)),
        Span::styled(" | ", muted),
        Span::styled("Sound:", Style::default().fg(Color::Yellow)),
        Span::styled(format!(" {} ", sound), Style::default().fg(Color::White)),
    ]);
    frame.render_widget(Paragraph::new(right).alignment(Alignment::Right), cols[1]);
}

/// Status box shared by the list views.
pub fn render_status(frame: &mut Frame, area: Rect, app: &App) {
    let contextual_status = app.get_contextual_status();
    let status_text = app.status_message.as_deref().unwrap_or(&contextual_status);

    let status_lower = status_text.to_lowercase();
    let is_error = status_lower.contains("warning")
        || status_lower.contains("cannot")
        || status_lower.contains("read-only");
    let is_success = status_lower.contains("saved")
        || status_lower.contains("deleted")
        || status_lower.contains("completed");

    let (border_style, text_color) = if is_error {
        (Style::default().fg(Color::Red), Color::Red)
    } else if is_success {
        (Style::default().fg(Color::Green), Color::Green)
    } else {
        (Style::default().fg(Color::White), Color::White)
    };

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(text_color))
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Status ")
                .border_style(border_style)
                .padding(Padding::horizontal(1)),
        );

    frame.render_widget(status, area);
}

/// Key hints box: pairs of (key, description).
pub fn render_controls(frame: &mut Frame, area: Rect, hints: &[(&str, &str)]) {
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (i, (key, desc)) in hints.iter().enumerate() {
        spans.push(Span::styled(*key, Style::default().fg(Color::Yellow)));
        let sep = if i + 1 < hints.len() { "  " } else { "" };
        spans.push(Span::raw(format!(": {}{}", desc, sep)));
    }

    let controls = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(Span::styled(
                    " Controls ",
                    Style::default().fg(Color::DarkGray),
                ))
                .padding(Padding::horizontal(1)),
        );

    frame.render_widget(controls, area);
}
