use super::*;
use crate::time_utils::format_record_date;
use hangboard::format_clock;
use ratatui::widgets::ListState;

pub fn render_history_view(frame: &mut Frame, app: &App, body: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Min(0),    // Records
            Constraint::Length(3), // Status
            Constraint::Length(3), // Controls
        ])
        .split(body);

    if app.history.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "No sessions yet",
                Style::default().fg(Color::White),
            )),
            Line::from(Span::styled(
                "Finish or stop a session to see it here",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" History "));
        frame.render_widget(empty, chunks[0]);
    } else {
        let items: Vec<ListItem> = app
            .history
            .records()
            .enumerate()
            .map(|(i, record)| {
                let focused = app.focused_history_index == Some(i);
                let name_style = if focused {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };
                let status_color = if record.completed {
                    Color::Green
                } else {
                    Color::Red
                };
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("{}  ", format_record_date(record.date)),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::styled(format!("{:<28}", record.protocol_name), name_style),
                    Span::styled(
                        format!("{}  ", format_clock(record.duration)),
                        Style::default().fg(Color::White),
                    ),
                    Span::styled(record.status_label(), Style::default().fg(status_color)),
                ]))
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" History ({}) ", app.history.len()))
                .padding(Padding::horizontal(1)),
        );
        let mut state = ListState::default().with_selected(app.focused_history_index);
        frame.render_stateful_widget(list, chunks[0], &mut state);
    }

    render_status(frame, chunks[1], app);
    render_controls(
        frame,
        chunks[2],
        &[
            ("↑↓ / j/k", "Navigate"),
            ("D", "Delete"),
            ("Esc / H", "Back"),
            ("Q", "Quit"),
        ],
    );
}
