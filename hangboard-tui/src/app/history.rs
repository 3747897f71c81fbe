use super::*;
use crate::time_utils::format_record_date;
use hangboard::format_clock;
use hangboard::history::HistoryRecord;

impl App {
    /// Move focus up in History view
    pub fn history_focus_up(&mut self) {
        if self.history.is_empty() {
            return;
        }
        self.focused_history_index = Some(match self.focused_history_index {
            Some(idx) => idx.saturating_sub(1),
            None => self.history.len() - 1,
        });
    }

    /// Move focus down in History view
    pub fn history_focus_down(&mut self) {
        if self.history.is_empty() {
            return;
        }
        self.focused_history_index = Some(match self.focused_history_index {
            Some(idx) => (idx + 1).min(self.history.len() - 1),
            None => 0,
        });
    }

    pub fn focused_history_record(&self) -> Option<&HistoryRecord> {
        self.history.get(self.focused_history_index?)
    }

    /// Keep the in-memory log in step after a session ends.
    pub fn push_history(&mut self, record: HistoryRecord) {
        self.history.record(record);
        if let Some(idx) = self.focused_history_index {
            self.focused_history_index = Some(idx + 1);
        }
    }

    pub fn remove_history(&mut self, id: &str) -> Option<HistoryRecord> {
        let removed = self.history.delete(id)?;
        self.focused_history_index = match self.focused_history_index {
            _ if self.history.is_empty() => None,
            Some(idx) => Some(idx.min(self.history.len() - 1)),
            None => None,
        };
        Some(removed)
    }

    /// Ask before deleting the focused history record.
    pub fn enter_history_delete_confirm(&mut self) {
        let Some(record) = self.focused_history_record() else {
            return;
        };
        let ctx = DeleteContext {
            target: DeleteTarget::History {
                id: record.id.clone(),
            },
            display_label: record.protocol_name.clone(),
            display_detail: format!(
                "{}  ·  {}  ·  {}",
                format_record_date(record.date),
                format_clock(record.duration),
                record.status_label()
            ),
        };
        self.delete_context = Some(ctx);
        self.navigate_to(View::ConfirmDelete);
    }

    /// Ask before deleting the selected custom protocol.
    pub fn enter_protocol_delete_confirm(&mut self) {
        let Some((origin, protocol)) = self.selected_protocol() else {
            return;
        };
        if *origin == Origin::Builtin {
            self.set_status("Built-in protocols cannot be deleted".to_string());
            return;
        }
        let ctx = DeleteContext {
            target: DeleteTarget::Protocol {
                id: protocol.id().to_string(),
            },
            display_label: protocol.name().to_string(),
            display_detail: format!(
                "{} hangs  ·  {}",
                protocol.hang_count(),
                format_clock(protocol.total_duration())
            ),
        };
        self.delete_context = Some(ctx);
        self.navigate_to(View::ConfirmDelete);
    }

    /// Close the delete dialog and return to where it was opened.
    pub fn cancel_delete(&mut self) {
        let origin = self
            .delete_context
            .take()
            .map(|c| c.origin())
            .unwrap_or(View::Protocols);
        self.navigate_to(origin);
    }
}
