use super::timer_view::render_timer_view;
use super::utils::centered_rect;
use super::*;
use hangboard::format_clock;

pub fn render_exit_dialog(frame: &mut Frame, app: &App, body: Rect) {
    render_timer_view(frame, app, body);

    let elapsed = app
        .session
        .as_ref()
        .map(|s| s.snapshot().total_elapsed)
        .unwrap_or_default();

    let area = centered_rect(52, 9, frame.area());
    frame.render_widget(Clear, area);

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Stop this session?",
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            format!("{} trained, saved to history as stopped", format_clock(elapsed)),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("[y] Stop", Style::default().fg(Color::Red)),
            Span::raw("    "),
            Span::styled("[n] Keep going", Style::default().fg(Color::White)),
        ]),
    ];

    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Stop Session? ")
                .padding(Padding::horizontal(1)),
        )
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}
