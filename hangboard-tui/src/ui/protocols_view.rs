use super::*;
use hangboard::catalog::Origin;
use hangboard::{format_clock, Protocol};
use ratatui::widgets::ListState;

pub fn render_protocols_view(frame: &mut Frame, app: &App, body: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(3), // Search input
            Constraint::Min(0),    // Protocol list
            Constraint::Length(3), // Status
            Constraint::Length(3), // Controls
        ])
        .split(body);

    let search_text = if app.search_input.value.is_empty() {
        "█  type to search".to_string()
    } else {
        let (before, after) = app.search_input.split_at_cursor();
        format!("{}█{}", before, after)
    };
    let search_box = Paragraph::new(search_text)
        .style(Style::default().fg(Color::White))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Search ")
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(search_box, chunks[0]);

    let items: Vec<ListItem> = app
        .filtered_protocols
        .iter()
        .enumerate()
        .map(|(i, (origin, protocol))| {
            protocol_item(*origin, protocol, i == app.selected_protocol_index)
        })
        .collect();

    let title = if app.search_input.value.is_empty() {
        format!(" Protocols ({}) ", app.catalog.len())
    } else {
        format!(
            " Protocols ({}/{}) ",
            app.filtered_protocols.len(),
            app.catalog.len()
        )
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .padding(Padding::horizontal(1)),
    );
    let mut state = ListState::default().with_selected(Some(app.selected_protocol_index));
    frame.render_stateful_widget(list, chunks[1], &mut state);

    render_status(frame, chunks[2], app);
    render_controls(
        frame,
        chunks[3],
        &[
            ("Type", "Filter"),
            ("↑↓", "Navigate"),
            ("Enter", "Open"),
            ("Ctrl+N", "New"),
            ("Ctrl+E", "Edit"),
            ("Ctrl+D", "Delete"),
            ("Ctrl+H", "History"),
            ("Ctrl+S", "Sound"),
            ("Esc", "Quit"),
        ],
    );
}

fn protocol_item(origin: Origin, protocol: &Protocol, selected: bool) -> ListItem<'static> {
    let name_style = if selected {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    let tag = match origin {
        Origin::Builtin => Span::styled("   ", Style::default()),
        Origin::Custom => Span::styled(" ★ ", Style::default().fg(Color::Cyan)),
    };

    let muted = Style::default().fg(Color::DarkGray);
    let header = Line::from(vec![
        tag,
        Span::styled(protocol.name().to_string(), name_style),
        Span::styled(
            format!("  {}", format_clock(protocol.total_duration())),
            Style::default().fg(Color::Green),
        ),
    ]);
    let detail = Line::from(Span::styled(
        format!(
            "   {}s hang / {}s rest × {}  ·  {} sets  ·  {}s between sets",
            protocol.hang_time(),
            protocol.rest_time(),
            protocol.reps_per_set(),
            protocol.number_of_sets(),
            protocol.rest_between_sets()
        ),
        muted,
    ));
    ListItem::new(vec![header, detail])
}
