use super::*;
use hangboard::{Phase, SessionSummary};
use std::time::Instant;

impl App {
    /// Load the selected protocol into a fresh, not yet started session.
    pub fn open_selected_protocol(&mut self) {
        let Some((_, protocol)) = self.selected_protocol().cloned() else {
            return;
        };
        tracing::debug!(protocol = protocol.id(), "opening timer");
        self.session = Some(Session::with_prepare_seconds(
            protocol,
            self.prepare_seconds,
        ));
        self.metronome = Metronome::new();
        self.navigate_to(View::Timer);
    }

    /// Space on the timer: start, pause or resume.
    pub fn toggle_session(&mut self, now: Instant) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if session.is_finished() || session.abort_pending() {
            return;
        }

        if !session.has_started() {
            let events = session.start();
            self.metronome = Metronome::new();
            self.metronome.start(now);
            self.play_cues(&events);
        } else if session.is_ticking() {
            session.pause();
            self.metronome.pause(now);
        } else {
            session.resume();
            self.metronome.resume(now);
        }
    }

    /// Apply one elapsed second. Returns the summary when this tick finished
    /// the session, so it can be written to history.
    pub fn tick_session(&mut self) -> Option<SessionSummary> {
        let session = self.session.as_mut()?;
        let events = session.tick();
        let finished = events.iter().any(|e| {
            matches!(
                e,
                SessionEvent::PhaseChanged {
                    to: Phase::Finished,
                    ..
                }
            )
        });
        let summary = finished.then(|| session.summary());
        self.play_cues(&events);

        if finished {
            self.metronome.stop();
        }
        summary
    }

    /// Esc or `x` on the timer. Unstarted and finished sessions close right
    /// away; anything else asks for confirmation first.
    pub fn request_exit(&mut self, now: Instant) {
        let Some(session) = self.session.as_mut() else {
            self.navigate_to(View::Protocols);
            return;
        };
        if !session.has_started() || session.is_finished() {
            self.close_session();
            return;
        }
        if session.request_abort() {
            self.metronome.pause(now);
        }
        self.navigate_to(View::ConfirmExit);
    }

    /// Back to training from the exit dialog.
    pub fn cancel_exit(&mut self, now: Instant) {
        if let Some(session) = self.session.as_mut() {
            session.cancel_abort();
            if session.is_ticking() {
                self.metronome.resume(now);
            }
        }
        self.navigate_to(View::Timer);
    }

    /// Leave the session for good. Returns what should go into history.
    pub fn confirm_exit(&mut self) -> Option<SessionSummary> {
        let session = self.session.take()?;
        self.metronome.stop();
        let summary = session.confirm_abort();
        self.navigate_to(View::Protocols);
        Some(summary)
    }

    fn close_session(&mut self) {
        self.session = None;
        self.metronome.stop();
        self.navigate_to(View::Protocols);
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::test_app;
    use super::*;
    use hangboard::{Cue, Phase};

    fn open(app: &mut App, id: &str) {
        let idx = app
            .filtered_protocols
            .iter()
            .position(|(_, p)| p.id() == id)
            .unwrap();
        app.selected_protocol_index = idx;
        app.open_selected_protocol();
    }

    #[test]
    fn opening_a_protocol_does_not_start_it() {
        let (mut app, cues) = test_app();
        open(&mut app, "max-hangs");
        assert_eq!(app.current_view, View::Timer);
        let session = app.session.as_ref().unwrap();
        assert!(!session.has_started());
        assert_eq!(session.protocol().id(), "max-hangs");
        assert!(app.tick_session().is_none());
        assert!(cues.played().is_empty());
    }

    #[test]
    fn space_starts_pauses_and_resumes() {
        let (mut app, cues) = test_app();
        open(&mut app, "repeaters");
        let now = Instant::now();

        app.toggle_session(now);
        assert!(app.session.as_ref().unwrap().is_ticking());
        assert!(app.metronome.is_running());
        assert_eq!(cues.played(), vec![Cue::Tick]);

        app.toggle_session(now);
        assert!(!app.session.as_ref().unwrap().is_ticking());
        assert!(!app.metronome.is_running());

        app.toggle_session(now);
        assert!(app.session.as_ref().unwrap().is_ticking());
        assert!(app.metronome.is_running());
    }

    #[test]
    fn closing_an_unstarted_session_skips_the_dialog() {
        let (mut app, _) = test_app();
        open(&mut app, "repeaters");
        app.request_exit(Instant::now());
        assert_eq!(app.current_view, View::Protocols);
        assert!(app.session.is_none());
    }

    #[test]
    fn exit_dialog_cancel_resumes_a_running_session() {
        let (mut app, _) = test_app();
        open(&mut app, "repeaters");
        let now = Instant::now();
        app.toggle_session(now);
        app.tick_session();

        app.request_exit(now);
        assert_eq!(app.current_view, View::ConfirmExit);
        assert!(!app.session.as_ref().unwrap().is_ticking());
        assert!(!app.metronome.is_running());
        assert!(app.tick_session().is_none());
        assert_eq!(app.session.as_ref().unwrap().snapshot().total_elapsed, 1);

        app.cancel_exit(now);
        assert_eq!(app.current_view, View::Timer);
        assert!(app.session.as_ref().unwrap().is_ticking());
        assert!(app.metronome.is_running());
    }

    #[test]
    fn exit_dialog_cancel_keeps_a_paused_session_paused() {
        let (mut app, _) = test_app();
        open(&mut app, "repeaters");
        let now = Instant::now();
        app.toggle_session(now);
        app.toggle_session(now);

        app.request_exit(now);
        app.cancel_exit(now);
        assert!(!app.session.as_ref().unwrap().is_ticking());
        assert!(!app.metronome.is_running());
    }

    #[test]
    fn confirming_exit_returns_an_incomplete_summary() {
        let (mut app, _) = test_app();
        open(&mut app, "max-hangs");
        app.toggle_session(Instant::now());
        for _ in 0..7 {
            app.tick_session();
        }
        app.request_exit(Instant::now());
        let summary = app.confirm_exit().unwrap();

        assert!(!summary.completed);
        assert_eq!(summary.elapsed, 7);
        assert_eq!(summary.final_phase, Phase::Hang);
        assert_eq!(summary.protocol_name, "Max Hangs");
        assert!(app.session.is_none());
        assert!(app.metronome.is_stopped());
        assert_eq!(app.current_view, View::Protocols);
    }

    #[test]
    fn ticks_after_the_finish_yield_nothing() {
        let (mut app, _) = test_app();
        open(&mut app, "max-hangs");
        app.toggle_session(Instant::now());
        let finished_at = (0..800).find(|_| app.tick_session().is_some());
        assert_eq!(finished_at, Some(774));

        assert!(app.session.as_ref().unwrap().is_finished());
        for _ in 0..5 {
            assert!(app.tick_session().is_none());
        }
    }

    #[test]
    fn finishing_yields_a_completed_summary_once() {
        let (mut app, cues) = test_app();
        open(&mut app, "max-hangs");
        app.toggle_session(Instant::now());

        let mut summaries = Vec::new();
        for _ in 0..800 {
            if let Some(s) = app.tick_session() {
                summaries.push(s);
            }
        }
        assert_eq!(summaries.len(), 1);
        assert!(summaries[0].completed);
        assert_eq!(summaries[0].elapsed, 775);
        assert!(app.metronome.is_stopped());
        assert_eq!(cues.played().last(), Some(&Cue::Finish));

        // The finished screen closes without asking.
        app.request_exit(Instant::now());
        assert_eq!(app.current_view, View::Protocols);
        assert!(app.session.is_none());
    }
}
