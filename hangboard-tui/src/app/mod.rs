use crate::config::HangboardConfig;
use crate::cues::TerminalBell;
use hangboard::catalog::{Catalog, Origin};
use hangboard::history::HistoryLog;
use hangboard::{CueSink, Metronome, Protocol, Session, SessionEvent};

mod edit;
mod history;
mod navigation;
mod session;
mod state;
pub use state::{DeleteContext, DeleteTarget, EditorField, EditorState, TextInput, View};

pub struct App {
    pub running: bool,
    pub status_message: Option<String>,
    pub current_view: View,

    // Protocols
    pub catalog: Catalog,
    pub search_input: TextInput,
    pub filtered_protocols: Vec<(Origin, Protocol)>,
    pub selected_protocol_index: usize,

    // Active session and its tick source
    pub session: Option<Session>,
    pub metronome: Metronome,
    pub cues: Box<dyn CueSink>,
    pub sound_enabled: bool,
    pub prepare_seconds: u32,

    // History view
    pub history: HistoryLog,
    pub focused_history_index: Option<usize>,

    pub editor: Option<EditorState>,
    pub delete_context: Option<DeleteContext>,

    // Spinner next to the title while a session is ticking
    pub throbber_state: throbber_widgets_tui::ThrobberState,
}

impl App {
    pub fn new(cfg: &HangboardConfig) -> Self {
        Self::with_cues(cfg, Box::new(TerminalBell::new(cfg.sound)))
    }

    pub fn with_cues(cfg: &HangboardConfig, cues: Box<dyn CueSink>) -> Self {
        let catalog = Catalog::default();
        let filtered_protocols = catalog.all().map(|(o, p)| (o, p.clone())).collect();
        Self {
            running: true,
            status_message: None,
            current_view: View::Protocols,
            catalog,
            search_input: TextInput::new(),
            filtered_protocols,
            selected_protocol_index: 0,
            session: None,
            metronome: Metronome::new(),
            cues,
            sound_enabled: cfg.sound,
            prepare_seconds: cfg.prepare_seconds,
            history: HistoryLog::new(),
            focused_history_index: None,
            editor: None,
            delete_context: None,
            throbber_state: throbber_widgets_tui::ThrobberState::default(),
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Navigate to a different view
    pub fn navigate_to(&mut self, view: View) {
        self.current_view = view;
        self.clear_status();

        match view {
            View::History => {
                if self.history.is_empty() {
                    self.focused_history_index = None;
                } else if self
                    .focused_history_index
                    .is_none_or(|i| i >= self.history.len())
                {
                    self.focused_history_index = Some(0);
                }
            }
            View::Protocols => {
                if self.selected_protocol_index >= self.filtered_protocols.len() {
                    self.selected_protocol_index = self.filtered_protocols.len().saturating_sub(1);
                }
            }
            _ => {}
        }
    }

    /// Replace the custom protocols, e.g. after loading them from the store.
    pub fn set_custom_protocols(&mut self, custom: Vec<Protocol>) {
        self.catalog = Catalog::new(custom);
        self.filter_protocols();
    }

    pub fn selected_protocol(&self) -> Option<&(Origin, Protocol)> {
        self.filtered_protocols.get(self.selected_protocol_index)
    }

    pub fn toggle_sound(&mut self) {
        self.sound_enabled = !self.sound_enabled;
        self.cues = Box::new(TerminalBell::new(self.sound_enabled));
        let state = if self.sound_enabled { "on" } else { "off" };
        self.set_status(format!("Sound {}", state));
    }

    /// Hand every cue in `events` to the cue sink.
    fn play_cues(&mut self, events: &[SessionEvent]) {
        for cue in events.iter().filter_map(SessionEvent::cue) {
            self.cues.play(cue);
        }
    }

    /// Status line text when no explicit message is set.
    pub fn get_contextual_status(&self) -> String {
        match self.current_view {
            View::Protocols => {
                if self.search_input.value.is_empty() {
                    format!("{} protocols", self.catalog.len())
                } else {
                    format!(
                        "{} of {} protocols match",
                        self.filtered_protocols.len(),
                        self.catalog.len()
                    )
                }
            }
            View::Timer | View::ConfirmExit => match &self.session {
                Some(s) if s.is_finished() => "Session complete".to_string(),
                Some(s) if s.abort_pending() => "Paused, waiting for decision".to_string(),
                Some(s) if s.is_ticking() => "Training".to_string(),
                Some(s) if s.has_started() => "Paused".to_string(),
                Some(_) => "Press Space to start".to_string(),
                None => String::new(),
            },
            View::History => {
                let stats = self.history.stats();
                format!(
                    "{} sessions, {} completed, {} trained",
                    stats.sessions,
                    stats.completed,
                    hangboard::format_clock(stats.total_seconds)
                )
            }
            View::Editor | View::ConfirmDelete => String::new(),
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use hangboard::Cue;
    use std::sync::{Arc, Mutex};

    /// Cue sink that remembers what it was asked to play.
    #[derive(Clone, Default)]
    pub struct RecordingCues(pub Arc<Mutex<Vec<Cue>>>);

    impl RecordingCues {
        pub fn played(&self) -> Vec<Cue> {
            self.0.lock().unwrap().clone()
        }
    }

    impl CueSink for RecordingCues {
        fn play_tick_cue(&mut self) {
            self.0.lock().unwrap().push(Cue::Tick);
        }
        fn play_finish_cue(&mut self) {
            self.0.lock().unwrap().push(Cue::Finish);
        }
    }

    pub fn test_app() -> (App, RecordingCues) {
        let cues = RecordingCues::default();
        let app = App::with_cues(&HangboardConfig::default(), Box::new(cues.clone()));
        (app, cues)
    }
}
