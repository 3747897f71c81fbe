use hangboard::{Protocol, ProtocolDraft};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Protocols,
    Timer,
    History,
    Editor,
    ConfirmExit,
    ConfirmDelete,
}

/// A text input with mid-string cursor support.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextInput {
    pub value: String,
    pub cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_str(s: &str) -> Self {
        Self {
            value: s.to_string(),
            cursor: s.len(),
        }
    }

    /// Insert a character at the cursor position.
    pub fn insert(&mut self, c: char) {
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete the character immediately before the cursor (backspace).
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let new_cursor = self.prev_boundary(self.cursor);
        self.value.drain(new_cursor..self.cursor);
        self.cursor = new_cursor;
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.prev_boundary(self.cursor);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.value.len() {
            self.cursor = self.next_boundary(self.cursor);
        }
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }
    pub fn end(&mut self) {
        self.cursor = self.value.len();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Returns the string split at the cursor: (before, after).
    pub fn split_at_cursor(&self) -> (&str, &str) {
        (&self.value[..self.cursor], &self.value[self.cursor..])
    }

    fn prev_boundary(&self, pos: usize) -> usize {
        self.value[..pos]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    fn next_boundary(&self, pos: usize) -> usize {
        self.value[pos..]
            .chars()
            .next()
            .map(|c| pos + c.len_utf8())
            .unwrap_or(pos)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorField {
    Name,
    HangTime,
    RestTime,
    RepsPerSet,
    NumberOfSets,
    RestBetweenSets,
}

impl EditorField {
    pub const ALL: [EditorField; 6] = [
        EditorField::Name,
        EditorField::HangTime,
        EditorField::RestTime,
        EditorField::RepsPerSet,
        EditorField::NumberOfSets,
        EditorField::RestBetweenSets,
    ];

    pub fn label(self) -> &'static str {
        match self {
            EditorField::Name => "Name",
            EditorField::HangTime => "Hang time (s)",
            EditorField::RestTime => "Rest time (s)",
            EditorField::RepsPerSet => "Reps per set",
            EditorField::NumberOfSets => "Number of sets",
            EditorField::RestBetweenSets => "Rest between sets (s)",
        }
    }

    pub fn is_numeric(self) -> bool {
        self != EditorField::Name
    }

    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Create/edit form for a custom protocol.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorState {
    /// `None` when creating a new protocol.
    pub editing_id: Option<String>,
    pub name: TextInput,
    pub hang_time: TextInput,
    pub rest_time: TextInput,
    pub reps_per_set: TextInput,
    pub number_of_sets: TextInput,
    pub rest_between_sets: TextInput,
    pub focused_field: EditorField,
    pub validation_error: Option<String>,
}

impl EditorState {
    pub fn new_protocol() -> Self {
        Self::from_draft(None, &ProtocolDraft::default())
    }

    pub fn edit(protocol: &Protocol) -> Self {
        Self::from_draft(
            Some(protocol.id().to_string()),
            &ProtocolDraft::from(protocol),
        )
    }

    fn from_draft(editing_id: Option<String>, draft: &ProtocolDraft) -> Self {
        Self {
            editing_id,
            name: TextInput::from_str(&draft.name),
            hang_time: TextInput::from_str(&draft.hang_time),
            rest_time: TextInput::from_str(&draft.rest_time),
            reps_per_set: TextInput::from_str(&draft.reps_per_set),
            number_of_sets: TextInput::from_str(&draft.number_of_sets),
            rest_between_sets: TextInput::from_str(&draft.rest_between_sets),
            focused_field: EditorField::Name,
            validation_error: None,
        }
    }

    pub fn draft(&self) -> ProtocolDraft {
        ProtocolDraft {
            name: self.name.value.clone(),
            hang_time: self.hang_time.value.clone(),
            rest_time: self.rest_time.value.clone(),
            reps_per_set: self.reps_per_set.value.clone(),
            number_of_sets: self.number_of_sets.value.clone(),
            rest_between_sets: self.rest_between_sets.value.clone(),
        }
    }

    pub fn input(&self, field: EditorField) -> &TextInput {
        match field {
            EditorField::Name => &self.name,
            EditorField::HangTime => &self.hang_time,
            EditorField::RestTime => &self.rest_time,
            EditorField::RepsPerSet => &self.reps_per_set,
            EditorField::NumberOfSets => &self.number_of_sets,
            EditorField::RestBetweenSets => &self.rest_between_sets,
        }
    }

    pub fn focused_input_mut(&mut self) -> &mut TextInput {
        match self.focused_field {
            EditorField::Name => &mut self.name,
            EditorField::HangTime => &mut self.hang_time,
            EditorField::RestTime => &mut self.rest_time,
            EditorField::RepsPerSet => &mut self.reps_per_set,
            EditorField::NumberOfSets => &mut self.number_of_sets,
            EditorField::RestBetweenSets => &mut self.rest_between_sets,
        }
    }

    pub fn is_new(&self) -> bool {
        self.editing_id.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteTarget {
    Protocol { id: String },
    History { id: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteContext {
    pub target: DeleteTarget,
    pub display_label: String,
    pub display_detail: String,
}

impl DeleteContext {
    /// The view the dialog was opened from.
    pub fn origin(&self) -> View {
        match self.target {
            DeleteTarget::Protocol { .. } => View::Protocols,
            DeleteTarget::History { .. } => View::History,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_input_edits_at_cursor() {
        let mut input = TextInput::from_str("hng");
        input.move_left();
        input.move_left();
        input.insert('a');
        assert_eq!(input.value, "hang");
        assert_eq!(input.split_at_cursor(), ("ha", "ng"));

        input.end();
        input.backspace();
        assert_eq!(input.value, "han");
        input.home();
        input.backspace();
        assert_eq!(input.value, "han");
    }

    #[test]
    fn text_input_handles_multibyte() {
        let mut input = TextInput::from_str("hä");
        input.move_left();
        assert_eq!(input.cursor, 1);
        input.move_right();
        assert_eq!(input.cursor, 3);
        input.backspace();
        assert_eq!(input.value, "h");
    }

    #[test]
    fn editor_fields_cycle() {
        assert_eq!(EditorField::Name.prev(), EditorField::RestBetweenSets);
        assert_eq!(EditorField::RestBetweenSets.next(), EditorField::Name);
        assert_eq!(EditorField::HangTime.next(), EditorField::RestTime);
    }

    #[test]
    fn editor_round_trips_protocol_values() {
        let protocol = Protocol::new("c1", "Campus", 8, 4, 4, 120, 2).unwrap();
        let editor = EditorState::edit(&protocol);
        assert!(!editor.is_new());
        assert_eq!(editor.draft().build("c1").unwrap(), protocol);
        assert!(EditorState::new_protocol().is_new());
    }
}
