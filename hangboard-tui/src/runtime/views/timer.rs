use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent};
use std::time::Instant;

pub(super) fn handle_timer_key(key: KeyEvent, app: &mut App) {
    let now = Instant::now();
    let finished = app.session.as_ref().is_some_and(|s| s.is_finished());

    match key.code {
        KeyCode::Char(' ') | KeyCode::Char('p') | KeyCode::Char('P') => app.toggle_session(now),
        KeyCode::Enter if finished => app.request_exit(now),
        KeyCode::Enter => app.toggle_session(now),
        KeyCode::Esc | KeyCode::Char('x') | KeyCode::Char('X') => app.request_exit(now),
        KeyCode::Char('m') | KeyCode::Char('M') => app.toggle_sound(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::test_app;
    use crate::app::View;
    use crossterm::event::KeyModifiers;

    fn press(app: &mut App, code: KeyCode) {
        handle_timer_key(KeyEvent::new(code, KeyModifiers::NONE), app);
    }

    #[test]
    fn space_starts_then_esc_asks_before_leaving() {
        let (mut app, _) = test_app();
        app.open_selected_protocol();

        press(&mut app, KeyCode::Char(' '));
        assert!(app.session.as_ref().unwrap().is_ticking());

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.current_view, View::ConfirmExit);
        assert!(app.session.as_ref().unwrap().abort_pending());

        // Space does nothing while the dialog decision is pending.
        press(&mut app, KeyCode::Char(' '));
        assert!(!app.session.as_ref().unwrap().is_ticking());
    }

    #[test]
    fn esc_before_start_goes_straight_back() {
        let (mut app, _) = test_app();
        app.open_selected_protocol();
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.current_view, View::Protocols);
    }
}
