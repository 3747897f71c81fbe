use hangboard::Phase;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Color;

/// Helper function to create a centered rectangle
pub fn centered_rect(width: u16, height: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((r.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((r.height.saturating_sub(height)) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((r.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((r.width.saturating_sub(width)) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Accent color for each phase of a session.
pub fn phase_color(phase: Phase) -> Color {
    match phase {
        Phase::Prepare => Color::Yellow,
        Phase::Hang => Color::Red,
        Phase::Rest => Color::Green,
        Phase::SetRest => Color::Blue,
        Phase::Finished => Color::Magenta,
    }
}
