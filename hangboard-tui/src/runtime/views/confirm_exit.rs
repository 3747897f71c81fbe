use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent};
use std::time::Instant;

use super::super::action_queue::{Action, ActionTx};
use super::enqueue_action;

pub(super) fn handle_confirm_exit_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
            if let Some(summary) = app.confirm_exit() {
                enqueue_action(action_tx, Action::RecordSession(summary));
            }
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.cancel_exit(Instant::now());
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::test_app;
    use crate::app::View;
    use crossterm::event::KeyModifiers;

    use super::super::super::action_queue::channel;

    fn running_app_in_dialog() -> App {
        let (mut app, _) = test_app();
        app.open_selected_protocol();
        app.toggle_session(Instant::now());
        for _ in 0..12 {
            app.tick_session();
        }
        app.request_exit(Instant::now());
        app
    }

    #[test]
    fn cancel_resumes_training() {
        let mut app = running_app_in_dialog();
        let (tx, mut rx) = channel();
        handle_confirm_exit_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE), &mut app, &tx);

        assert_eq!(app.current_view, View::Timer);
        assert!(app.session.as_ref().unwrap().is_ticking());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn confirm_queues_an_incomplete_record() {
        let mut app = running_app_in_dialog();
        let (tx, mut rx) = channel();
        handle_confirm_exit_key(
            KeyEvent::new(KeyCode::Char('y'), KeyModifiers::NONE),
            &mut app,
            &tx,
        );

        assert_eq!(app.current_view, View::Protocols);
        assert!(app.session.is_none());
        match rx.try_recv() {
            Ok(Action::RecordSession(summary)) => {
                assert!(!summary.completed);
                assert_eq!(summary.elapsed, 12);
                assert_eq!(summary.protocol_name, "Repeaters");
            }
            other => panic!("unexpected action: {other:?}"),
        }
    }
}
