use crate::app::{self, App};
use crossterm::event::{KeyCode, KeyEvent};

pub(super) fn handle_history_key(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => app.history_focus_down(),
        KeyCode::Up | KeyCode::Char('k') => app.history_focus_up(),
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Delete => {
            app.enter_history_delete_confirm()
        }
        KeyCode::Esc | KeyCode::Char('h') | KeyCode::Char('H') => {
            app.navigate_to(app::View::Protocols)
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        _ => {}
    }
}
