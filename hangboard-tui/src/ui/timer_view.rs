use super::utils::phase_color;
use super::*;
use hangboard::{format_clock, Phase, Session};
use ratatui::widgets::Gauge;

pub fn render_timer_view(frame: &mut Frame, app: &App, body: Rect) {
    let Some(session) = app.session.as_ref() else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(3),  // Protocol + phase
            Constraint::Length(9),  // Countdown
            Constraint::Length(3),  // Set / rep / elapsed
            Constraint::Length(3),  // Progress
            Constraint::Min(0),     // Spacer
            Constraint::Length(3),  // Controls
        ])
        .split(body);

    let accent = phase_color(session.phase());
    render_phase(frame, chunks[0], session, accent);
    render_countdown(frame, chunks[1], session, accent);
    render_counters(frame, chunks[2], session);
    render_progress(frame, chunks[3], session, accent);
    render_controls(frame, chunks[5], &timer_hints(session, app.sound_enabled));
}

fn render_phase(frame: &mut Frame, area: Rect, session: &Session, accent: Color) {
    let state = session.snapshot();
    let suffix = if session.abort_pending() || (state.paused && !session.is_finished()) {
        "  (paused)"
    } else {
        ""
    };
    let line = Line::from(vec![
        Span::styled(
            session.phase().label(),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ),
        Span::styled(suffix, Style::default().fg(Color::DarkGray)),
    ]);
    let widget = Paragraph::new(line).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(accent))
            .title(format!(" {} ", session.protocol().name())),
    );
    frame.render_widget(widget, area);
}

fn render_countdown(frame: &mut Frame, area: Rect, session: &Session, accent: Color) {
    let remaining = format_clock(session.snapshot().time_remaining);
    let mut lines = vec![Line::from("")];
    lines.extend(
        render_large_time(&remaining)
            .into_iter()
            .map(|row| Line::from(Span::styled(row, Style::default().fg(accent)))),
    );

    let widget = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(accent)),
    );
    frame.render_widget(widget, area);
}

fn render_counters(frame: &mut Frame, area: Rect, session: &Session) {
    let state = session.snapshot();
    let protocol = session.protocol();
    let label = Style::default().fg(Color::Yellow);
    let value = Style::default().fg(Color::White);
    let muted = Style::default().fg(Color::DarkGray);

    let line = Line::from(vec![
        Span::styled("Set ", label),
        Span::styled(
            format!("{}/{}", state.current_set, protocol.number_of_sets()),
            value,
        ),
        Span::styled("  |  ", muted),
        Span::styled("Rep ", label),
        Span::styled(
            format!("{}/{}", state.current_rep, protocol.reps_per_set()),
            value,
        ),
        Span::styled("  |  ", muted),
        Span::styled("Elapsed ", label),
        Span::styled(format_clock(state.total_elapsed), value),
        Span::styled(
            format!(" / {}", format_clock(session.planned_duration())),
            muted,
        ),
    ]);
    let widget = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(widget, area);
}

fn render_progress(frame: &mut Frame, area: Rect, session: &Session, accent: Color) {
    let ratio = session.progress();
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(" Progress "))
        .gauge_style(Style::default().fg(accent).bg(Color::Black))
        .ratio(ratio)
        .label(format!("{:.0}%", ratio * 100.0));
    frame.render_widget(gauge, area);
}

fn timer_hints(session: &Session, sound: bool) -> Vec<(&'static str, &'static str)> {
    let toggle = if !session.has_started() {
        "Start"
    } else if session.is_ticking() {
        "Pause"
    } else {
        "Resume"
    };
    let sound = if sound { "Mute" } else { "Unmute" };
    if session.phase() == Phase::Finished {
        vec![("Enter / Esc", "Back to protocols"), ("M", sound)]
    } else {
        vec![("Space", toggle), ("Esc / X", "Stop"), ("M", sound)]
    }
}

/// Block glyphs for `0`-`9`, five rows each.
#[rustfmt::skip]
const DIGITS: [[&str; 5]; 10] = [
    ["█████", "██ ██", "██ ██", "██ ██", "█████"],
    ["   ██", "   ██", "   ██", "   ██", "   ██"],
    ["█████", "   ██", "█████", "██   ", "█████"],
    ["█████", "   ██", "█████", "   ██", "█████"],
    ["██ ██", "██ ██", "█████", "   ██", "   ██"],
    ["█████", "██   ", "█████", "   ██", "█████"],
    ["█████", "██   ", "█████", "██ ██", "█████"],
    ["█████", "   ██", "   ██", "   ██", "   ██"],
    ["█████", "██ ██", "█████", "██ ██", "█████"],
    ["█████", "██ ██", "█████", "   ██", "█████"],
];

const COLON: [&str; 5] = ["    ", " ██ ", "    ", " ██ ", "    "];

/// Render a `MM:SS` string as five rows of block digits.
fn render_large_time(time_str: &str) -> Vec<String> {
    let mut rows = vec![String::new(); 5];
    for ch in time_str.chars() {
        let glyph = match ch {
            ':' => &COLON,
            d => match d.to_digit(10) {
                Some(n) => &DIGITS[n as usize],
                None => continue,
            },
        };
        for (row, part) in rows.iter_mut().zip(glyph.iter()) {
            row.push_str(part);
            row.push(' ');
        }
    }
    rows
}
