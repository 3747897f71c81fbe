use crate::app::{App, DeleteTarget, View};
use hangboard::history::HistoryRecord;
use hangboard::store::{HistoryRepository, ProtocolRepository, Store};
use hangboard::{Protocol, SessionSummary};
use time::OffsetDateTime;

use super::action_queue::Action;

/// Persistence failures never end the app: the change stays in memory and
/// the user gets a warning on the status line.
pub(super) async fn run_action(action: Action, app: &mut App, store: &dyn Store) {
    match action {
        Action::RecordSession(summary) => {
            record_session(summary, app, store).await;
        }
        Action::SaveProtocol { protocol, is_new } => {
            save_protocol(protocol, is_new, app, store).await;
        }
        Action::ConfirmDelete => {
            handle_confirm_delete(app, store).await;
        }
    }
}

async fn record_session(summary: SessionSummary, app: &mut App, store: &dyn Store) {
    let record = HistoryRecord::from_summary(&summary, OffsetDateTime::now_utc());
    app.push_history(record.clone());

    match store.append(&record).await {
        Ok(()) => {
            tracing::info!(
                protocol = %record.protocol_name,
                duration = record.duration,
                completed = record.completed,
                "session recorded"
            );
            let verb = if record.completed { "completed" } else { "stopped" };
            app.set_status(format!("{} {}, saved to history", record.protocol_name, verb));
        }
        Err(e) => {
            tracing::warn!(error = %e, "failed to persist history record");
            app.set_status(format!("Warning: history not saved: {}", e));
        }
    }
}

async fn save_protocol(protocol: Protocol, is_new: bool, app: &mut App, store: &dyn Store) {
    let result = if is_new {
        store.create_custom(&protocol).await
    } else {
        store.update_custom(&protocol).await
    };
    let name = protocol.name().to_string();
    app.apply_saved_protocol(protocol);

    match result {
        Ok(()) => {
            tracing::info!(protocol = %name, is_new, "protocol saved");
            app.set_status(format!("Saved {}", name));
        }
        Err(e) => {
            tracing::warn!(error = %e, protocol = %name, "failed to persist protocol");
            app.set_status(format!("Warning: {} not saved: {}", name, e));
        }
    }
}

async fn handle_confirm_delete(app: &mut App, store: &dyn Store) {
    let Some(ctx) = app.delete_context.take() else {
        app.navigate_to(View::Protocols);
        return;
    };
    let origin = ctx.origin();

    let result = match &ctx.target {
        DeleteTarget::Protocol { id } => {
            app.remove_custom_protocol(id);
            store.delete_custom(id).await
        }
        DeleteTarget::History { id } => {
            app.remove_history(id);
            store.delete(id).await
        }
    };

    app.navigate_to(origin);
    match result {
        Ok(_) => {
            tracing::info!(deleted = ?ctx.target, "deleted");
            app.set_status(format!("Deleted {}", ctx.display_label));
        }
        Err(e) => {
            tracing::warn!(error = %e, "failed to persist delete");
            app.set_status(format!("Warning: delete not saved: {}", e));
        }
    }
}
