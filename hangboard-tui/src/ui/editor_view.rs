use super::*;
use crate::app::EditorField;
use hangboard::format_clock;

pub fn render_editor_view(frame: &mut Frame, app: &App, body: Rect) {
    let Some(editor) = app.editor.as_ref() else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(EditorField::ALL.len() as u16 + 2), // Fields
            Constraint::Length(3),                                 // Estimate
            Constraint::Length(3),                                 // Validation
            Constraint::Min(0),
            Constraint::Length(3), // Controls
        ])
        .split(body);

    let lines: Vec<Line> = EditorField::ALL
        .iter()
        .map(|&field| {
            let focused = field == editor.focused_field;
            let input = editor.input(field);
            let value = if focused {
                let (before, after) = input.split_at_cursor();
                format!("{}█{}", before, after)
            } else {
                input.value.clone()
            };
            let label_style = if focused {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Line::from(vec![
                Span::styled(format!("{:<24}", field.label()), label_style),
                Span::styled(value, Style::default().fg(Color::White)),
            ])
        })
        .collect();

    let title = if editor.is_new() {
        " New Protocol "
    } else {
        " Edit Protocol "
    };
    let form = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta))
            .title(title)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(form, chunks[0]);

    let estimate = editor.draft().estimate();
    let estimate_widget = Paragraph::new(Line::from(vec![
        Span::styled("Total duration: ", Style::default().fg(Color::Yellow)),
        Span::styled(
            format_clock(estimate),
            Style::default().fg(Color::Green),
        ),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(estimate_widget, chunks[1]);

    if let Some(err) = &editor.validation_error {
        let error = Paragraph::new(Span::styled(err.as_str(), Style::default().fg(Color::Red)))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Red))
                    .padding(Padding::horizontal(1)),
            );
        frame.render_widget(error, chunks[2]);
    }

    render_controls(
        frame,
        chunks[4],
        &[
            ("Tab / ↑↓", "Next field"),
            ("←→", "Move cursor"),
            ("Enter", "Save"),
            ("Esc", "Cancel"),
        ],
    );
}
