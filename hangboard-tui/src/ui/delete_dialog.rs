use super::utils::centered_rect;
use super::*;

pub fn render_delete_confirm_dialog(frame: &mut Frame, app: &App, body: Rect) {
    let Some(ctx) = app.delete_context.as_ref() else {
        return;
    };

    // Render the originating view in the background
    match ctx.origin() {
        View::History => super::history_view::render_history_view(frame, app, body),
        _ => super::protocols_view::render_protocols_view(frame, app, body),
    }

    let area = centered_rect(56, 9, frame.area());
    frame.render_widget(Clear, area);

    let title = match ctx.origin() {
        View::History => " Delete Record? ",
        _ => " Delete Protocol? ",
    };
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            ctx.display_label.as_str(),
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            ctx.display_detail.as_str(),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("[y] Yes", Style::default().fg(Color::Red)),
            Span::raw("    "),
            Span::styled("[n] No", Style::default().fg(Color::White)),
        ]),
    ];

    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .padding(Padding::horizontal(1)),
        )
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}
