use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::action_queue::{Action, ActionTx};
use super::enqueue_action;

pub(super) fn handle_editor_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match key.code {
        KeyCode::Tab | KeyCode::Down => app.editor_next_field(),
        KeyCode::BackTab | KeyCode::Up => app.editor_prev_field(),
        KeyCode::Left => app.editor_move_cursor(true),
        KeyCode::Right => app.editor_move_cursor(false),
        KeyCode::Home => app.editor_cursor_home_end(true),
        KeyCode::End => app.editor_cursor_home_end(false),
        KeyCode::Backspace => app.editor_backspace(),
        KeyCode::Enter => {
            if let Some((protocol, is_new)) = app.editor_submit() {
                enqueue_action(action_tx, Action::SaveProtocol { protocol, is_new });
            }
        }
        KeyCode::Esc => app.close_editor(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.editor_input_char(c)
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::test_app;
    use crate::app::View;

    use super::super::super::action_queue::channel;

    fn press(app: &mut App, tx: &ActionTx, code: KeyCode) {
        handle_editor_key(KeyEvent::new(code, KeyModifiers::NONE), app, tx);
    }

    #[test]
    fn invalid_form_queues_nothing() {
        let (mut app, _) = test_app();
        app.open_new_protocol_editor();
        let (tx, mut rx) = channel();
        press(&mut app, &tx, KeyCode::Enter);

        assert!(rx.try_recv().is_err());
        assert_eq!(app.current_view, View::Editor);
        assert!(app.editor.as_ref().unwrap().validation_error.is_some());
    }

    #[test]
    fn valid_form_queues_save() {
        let (mut app, _) = test_app();
        app.open_new_protocol_editor();
        let (tx, mut rx) = channel();
        for c in "Half crimp".chars() {
            press(&mut app, &tx, KeyCode::Char(c));
        }
        press(&mut app, &tx, KeyCode::Tab);
        press(&mut app, &tx, KeyCode::Backspace);
        press(&mut app, &tx, KeyCode::Char('9'));
        press(&mut app, &tx, KeyCode::Enter);

        match rx.try_recv() {
            Ok(Action::SaveProtocol { protocol, is_new }) => {
                assert!(is_new);
                assert_eq!(protocol.name(), "Half crimp");
                assert_eq!(protocol.hang_time(), 9);
            }
            other => panic!("unexpected action: {other:?}"),
        }
    }

    #[test]
    fn esc_discards_the_form() {
        let (mut app, _) = test_app();
        app.open_new_protocol_editor();
        let (tx, _rx) = channel();
        press(&mut app, &tx, KeyCode::Esc);
        assert_eq!(app.current_view, View::Protocols);
        assert!(app.editor.is_none());
    }
}
