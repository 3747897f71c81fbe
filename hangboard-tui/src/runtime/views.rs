use crate::app::{self, App};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::action_queue::{Action, ActionTx};

mod confirm_delete;
mod confirm_exit;
mod editor;
mod history;
mod protocols;
mod timer;

fn enqueue_action(action_tx: &ActionTx, action: Action) {
    let _ = action_tx.send(action);
}

pub(super) fn handle_view_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        quit_or_confirm(app);
        return;
    }

    match &app.current_view {
        app::View::Protocols => protocols::handle_protocols_key(key, app),
        app::View::Timer => timer::handle_timer_key(key, app),
        app::View::History => history::handle_history_key(key, app),
        app::View::Editor => editor::handle_editor_key(key, app, action_tx),
        app::View::ConfirmExit => confirm_exit::handle_confirm_exit_key(key, app, action_tx),
        app::View::ConfirmDelete => {
            confirm_delete::handle_confirm_delete_key(key, app, action_tx)
        }
    }
}

/// Quit right away unless a session is underway, which goes through the
/// exit dialog first.
fn quit_or_confirm(app: &mut App) {
    let underway = app
        .session
        .as_ref()
        .is_some_and(|s| s.has_started() && !s.is_finished());
    if underway {
        app.request_exit(std::time::Instant::now());
    } else {
        app.quit();
    }
}
