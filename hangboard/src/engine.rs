use std::fmt;

use crate::{Cue, Protocol};

/// Seconds of "get ready" countdown before the first hang.
pub const PREPARE_SECONDS: u32 = 5;

/// A cue fires while this many seconds (or fewer, but more than zero) remain.
const COUNTDOWN_CUE_SECONDS: i64 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Prepare,
    Hang,
    Rest,
    SetRest,
    Finished,
}

impl Phase {
    /// Label shown above the countdown.
    pub fn label(self) -> &'static str {
        match self {
            Phase::Prepare => "GET READY",
            Phase::Hang => "HANG",
            Phase::Rest => "REST",
            Phase::SetRest => "SET REST",
            Phase::Finished => "COMPLETE!",
        }
    }

    /// Stable key for theming and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Prepare => "prepare",
            Phase::Hang => "hang",
            Phase::Rest => "rest",
            Phase::SetRest => "set-rest",
            Phase::Finished => "finished",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read-only view of a session, handed to the renderer after every tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerState {
    pub phase: Phase,
    /// Seconds left in the current phase. Briefly zero or negative right
    /// before a transition is processed.
    pub time_remaining: i64,
    pub current_set: u32,
    /// Zero only during [`Phase::Prepare`].
    pub current_rep: u32,
    pub total_elapsed: u64,
    pub running: bool,
    pub paused: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    Cue(Cue),
    PhaseChanged { from: Phase, to: Phase },
}

impl SessionEvent {
    pub fn cue(&self) -> Option<Cue> {
        match self {
            SessionEvent::Cue(cue) => Some(*cue),
            SessionEvent::PhaseChanged { .. } => None,
        }
    }
}

/// What is left of a session once it has ended, used to write history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub protocol_name: String,
    pub elapsed: u64,
    pub completed: bool,
    pub final_phase: Phase,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingAbort {
    resume_on_cancel: bool,
}

/// One run of a protocol, from the prepare countdown to finish or abort.
///
/// The session never waits on a clock. Whoever owns it calls [`Session::tick`]
/// once per elapsed second while [`Session::is_ticking`] is true.
#[derive(Debug, Clone)]
pub struct Session {
    protocol: Protocol,
    prepare_seconds: u32,
    state: TimerState,
    pending_abort: Option<PendingAbort>,
}

impl Session {
    pub fn new(protocol: Protocol) -> Self {
        Self::with_prepare_seconds(protocol, PREPARE_SECONDS)
    }

    pub fn with_prepare_seconds(protocol: Protocol, prepare_seconds: u32) -> Self {
        Self {
            protocol,
            prepare_seconds,
            state: TimerState {
                phase: Phase::Prepare,
                time_remaining: i64::from(prepare_seconds),
                current_set: 1,
                current_rep: 0,
                total_elapsed: 0,
                running: false,
                paused: false,
            },
            pending_abort: None,
        }
    }

    pub fn protocol(&self) -> &Protocol {
        &self.protocol
    }

    pub fn snapshot(&self) -> TimerState {
        self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn is_finished(&self) -> bool {
        self.state.phase == Phase::Finished
    }

    pub fn has_started(&self) -> bool {
        self.state.running || self.state.total_elapsed > 0 || self.is_finished()
    }

    pub fn abort_pending(&self) -> bool {
        self.pending_abort.is_some()
    }

    /// Whether ticks are currently applied.
    pub fn is_ticking(&self) -> bool {
        self.state.running && !self.state.paused && self.pending_abort.is_none()
    }

    /// Begin the countdown. Emits the start cue.
    pub fn start(&mut self) -> Vec<SessionEvent> {
        if self.state.running || self.is_finished() {
            return Vec::new();
        }
        self.state.running = true;
        self.state.paused = false;
        tracing::info!(
            protocol = self.protocol.name(),
            total_seconds = self.protocol.total_duration(),
            "session started"
        );
        vec![SessionEvent::Cue(Cue::Tick)]
    }

    /// Stop applying ticks. Pausing twice is the same as pausing once.
    pub fn pause(&mut self) -> bool {
        if !self.state.running || self.state.paused {
            return false;
        }
        self.state.paused = true;
        tracing::debug!(elapsed = self.state.total_elapsed, "session paused");
        true
    }

    pub fn resume(&mut self) -> bool {
        if !self.state.running || !self.state.paused || self.pending_abort.is_some() {
            return false;
        }
        self.state.paused = false;
        tracing::debug!(elapsed = self.state.total_elapsed, "session resumed");
        true
    }

    /// Advance the session by one second.
    ///
    /// Returns the cues and phase changes this second produced. Ignored while
    /// paused, not yet started, finished, or waiting on an abort decision.
    pub fn tick(&mut self) -> Vec<SessionEvent> {
        let mut events = Vec::new();
        if !self.is_ticking() {
            return events;
        }

        self.state.total_elapsed += 1;
        self.state.time_remaining -= 1;

        if (1..=COUNTDOWN_CUE_SECONDS).contains(&self.state.time_remaining) {
            events.push(SessionEvent::Cue(Cue::Tick));
        }

        if self.state.time_remaining <= 0 {
            self.transition(&mut events);
        }

        events
    }

    fn transition(&mut self, events: &mut Vec<SessionEvent>) {
        let from = self.state.phase;
        let reps_per_set = self.protocol.reps_per_set();
        let number_of_sets = self.protocol.number_of_sets();

        let to = match from {
            Phase::Prepare => {
                self.state.current_rep = 1;
                self.enter_hang()
            }
            Phase::Hang if self.state.current_rep < reps_per_set => {
                self.state.time_remaining = i64::from(self.protocol.rest_time());
                Phase::Rest
            }
            Phase::Hang if self.state.current_set < number_of_sets => {
                self.state.time_remaining = i64::from(self.protocol.rest_between_sets());
                Phase::SetRest
            }
            Phase::Hang => {
                self.state.running = false;
                Phase::Finished
            }
            Phase::Rest => {
                self.state.current_rep += 1;
                self.enter_hang()
            }
            Phase::SetRest => {
                self.state.current_set += 1;
                self.state.current_rep = 1;
                self.enter_hang()
            }
            Phase::Finished => return,
        };

        self.state.phase = to;
        tracing::debug!(
            %from,
            %to,
            set = self.state.current_set,
            rep = self.state.current_rep,
            elapsed = self.state.total_elapsed,
            "phase transition"
        );
        events.push(SessionEvent::PhaseChanged { from, to });

        if to == Phase::Finished {
            tracing::info!(
                protocol = self.protocol.name(),
                elapsed = self.state.total_elapsed,
                "session finished"
            );
            events.push(SessionEvent::Cue(Cue::Finish));
        } else {
            events.push(SessionEvent::Cue(Cue::Tick));
        }
    }

    fn enter_hang(&mut self) -> Phase {
        self.state.time_remaining = i64::from(self.protocol.hang_time());
        Phase::Hang
    }

    /// First step of leaving a session: pause and wait for a decision.
    pub fn request_abort(&mut self) -> bool {
        if self.pending_abort.is_some() {
            return false;
        }
        let resume_on_cancel = self.is_ticking();
        if self.state.running {
            self.state.paused = true;
        }
        self.pending_abort = Some(PendingAbort { resume_on_cancel });
        true
    }

    /// Keep training. Ticking resumes only if it was active when the abort
    /// was requested.
    pub fn cancel_abort(&mut self) -> bool {
        let Some(pending) = self.pending_abort.take() else {
            return false;
        };
        if pending.resume_on_cancel {
            self.state.paused = false;
        }
        true
    }

    /// Discard the session. `completed` is true only if it had already finished.
    pub fn confirm_abort(self) -> SessionSummary {
        tracing::info!(
            protocol = self.protocol.name(),
            phase = %self.state.phase,
            elapsed = self.state.total_elapsed,
            "session aborted"
        );
        self.summary()
    }

    /// Consume a finished session. Returns `None` while it is still underway.
    pub fn finish(self) -> Option<SessionSummary> {
        self.is_finished().then(|| self.summary())
    }

    /// Summary of the session as it stands now.
    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            completed: self.is_finished(),
            final_phase: self.state.phase,
            elapsed: self.state.total_elapsed,
            protocol_name: self.protocol.name().to_string(),
        }
    }

    /// Planned length including the prepare countdown.
    pub fn planned_duration(&self) -> u64 {
        u64::from(self.prepare_seconds).saturating_add(self.protocol.total_duration())
    }

    /// Share of the planned duration already elapsed, in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        if self.is_finished() {
            return 1.0;
        }
        let planned = self.planned_duration().max(1) as f64;
        (self.state.total_elapsed as f64 / planned).clamp(0.0, 1.0)
    }
}
