use super::*;
use hangboard::new_protocol_id;

/// Longest value a numeric field accepts. Nine digits always fit in a u32.
const MAX_NUMERIC_DIGITS: usize = 9;

impl App {
    pub fn open_new_protocol_editor(&mut self) {
        self.editor = Some(EditorState::new_protocol());
        self.navigate_to(View::Editor);
    }

    /// Edit the selected protocol. Built-ins are read-only.
    pub fn open_edit_protocol_editor(&mut self) {
        let Some((origin, protocol)) = self.selected_protocol() else {
            return;
        };
        if *origin == Origin::Builtin {
            self.set_status("Built-in protocols are read-only, press n for a new one".to_string());
            return;
        }
        self.editor = Some(EditorState::edit(protocol));
        self.navigate_to(View::Editor);
    }

    pub fn close_editor(&mut self) {
        self.editor = None;
        self.navigate_to(View::Protocols);
    }

    pub fn editor_next_field(&mut self) {
        if let Some(editor) = self.editor.as_mut() {
            editor.focused_field = editor.focused_field.next();
        }
    }

    pub fn editor_prev_field(&mut self) {
        if let Some(editor) = self.editor.as_mut() {
            editor.focused_field = editor.focused_field.prev();
        }
    }

    /// Numeric fields only accept digits.
    pub fn editor_input_char(&mut self, c: char) {
        let Some(editor) = self.editor.as_mut() else {
            return;
        };
        let numeric = editor.focused_field.is_numeric();
        if numeric && !c.is_ascii_digit() {
            return;
        }
        let input = editor.focused_input_mut();
        if numeric && input.value.len() >= MAX_NUMERIC_DIGITS {
            return;
        }
        input.insert(c);
        editor.validation_error = None;
    }

    pub fn editor_backspace(&mut self) {
        if let Some(editor) = self.editor.as_mut() {
            editor.focused_input_mut().backspace();
            editor.validation_error = None;
        }
    }

    pub fn editor_move_cursor(&mut self, left: bool) {
        if let Some(editor) = self.editor.as_mut() {
            let input = editor.focused_input_mut();
            if left {
                input.move_left();
            } else {
                input.move_right();
            }
        }
    }

    pub fn editor_cursor_home_end(&mut self, home: bool) {
        if let Some(editor) = self.editor.as_mut() {
            let input = editor.focused_input_mut();
            if home {
                input.home();
            } else {
                input.end();
            }
        }
    }

    /// Live estimate of the protocol being typed.
    pub fn editor_estimate(&self) -> Option<u64> {
        self.editor.as_ref().map(|e| e.draft().estimate())
    }

    /// Validate the form. On success returns the protocol and whether it is
    /// new; on failure the error is shown in the form and nothing is returned.
    pub fn editor_submit(&mut self) -> Option<(Protocol, bool)> {
        let editor = self.editor.as_mut()?;
        let is_new = editor.is_new();
        let id = editor.editing_id.clone().unwrap_or_else(new_protocol_id);
        match editor.draft().build(id) {
            Ok(protocol) => Some((protocol, is_new)),
            Err(e) => {
                editor.validation_error = Some(e.to_string());
                None
            }
        }
    }

    /// Apply a saved protocol to the catalog and leave the editor.
    pub fn apply_saved_protocol(&mut self, protocol: Protocol) {
        let id = protocol.id().to_string();
        self.catalog.upsert_custom(protocol);
        self.editor = None;
        self.search_input.clear();
        self.filter_protocols();
        if let Some(idx) = self.filtered_protocols.iter().position(|(_, p)| p.id() == id) {
            self.selected_protocol_index = idx;
        }
        self.navigate_to(View::Protocols);
    }

    /// Drop a deleted protocol from the catalog.
    pub fn remove_custom_protocol(&mut self, id: &str) -> Option<Protocol> {
        let removed = self.catalog.remove_custom(id)?;
        let selected = self.selected_protocol_index;
        self.filter_protocols();
        self.selected_protocol_index = selected.min(self.filtered_protocols.len().saturating_sub(1));
        Some(removed)
    }
}
