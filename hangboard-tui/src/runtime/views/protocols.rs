use crate::app::{self, App};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// The list has a search box on top: typing filters, the arrows move the
/// selection and letters with Ctrl run commands.
pub(super) fn handle_protocols_key(key: KeyEvent, app: &mut App) {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('n') => app.open_new_protocol_editor(),
            KeyCode::Char('e') => app.open_edit_protocol_editor(),
            KeyCode::Char('d') => app.enter_protocol_delete_confirm(),
            KeyCode::Char('h') => app.navigate_to(app::View::History),
            KeyCode::Char('s') => app.toggle_sound(),
            KeyCode::Char('x') => app.search_input_clear(),
            KeyCode::Char('q') => app.quit(),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Down | KeyCode::Tab => app.select_next(),
        KeyCode::Up | KeyCode::BackTab => app.select_previous(),
        KeyCode::Left => app.search_move_cursor(true),
        KeyCode::Right => app.search_move_cursor(false),
        KeyCode::Enter => app.open_selected_protocol(),
        KeyCode::Backspace => app.search_input_backspace(),
        KeyCode::Esc => {
            if app.search_input.value.is_empty() {
                app.quit();
            } else {
                app.search_input_clear();
            }
        }
        KeyCode::Char(c) => app.search_input_char(c),
        _ => {}
    }
}
