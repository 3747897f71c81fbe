use std::time::{Duration, Instant};

pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Beat {
    Idle,
    Running { next_due: Instant },
    Paused { remaining: Duration },
    Stopped,
}

/// One-second tick source for a [`crate::Session`], driven by the caller's
/// event loop.
///
/// The loop calls [`Metronome::poll`] as often as it likes; at most one tick
/// is reported per call. Missed seconds are dropped, not replayed.
#[derive(Debug, Clone)]
pub struct Metronome {
    beat: Beat,
    interval: Duration,
}

impl Default for Metronome {
    fn default() -> Self {
        Self::new()
    }
}

impl Metronome {
    pub fn new() -> Self {
        Self::with_interval(TICK_INTERVAL)
    }

    pub fn with_interval(interval: Duration) -> Self {
        Self {
            beat: Beat::Idle,
            interval,
        }
    }

    pub fn start(&mut self, now: Instant) -> bool {
        if self.beat != Beat::Idle {
            return false;
        }
        self.beat = Beat::Running {
            next_due: now + self.interval,
        };
        true
    }

    /// Freeze the current second, keeping whatever part of it is left.
    pub fn pause(&mut self, now: Instant) -> bool {
        let Beat::Running { next_due } = self.beat else {
            return false;
        };
        self.beat = Beat::Paused {
            remaining: next_due.saturating_duration_since(now),
        };
        true
    }

    pub fn resume(&mut self, now: Instant) -> bool {
        let Beat::Paused { remaining } = self.beat else {
            return false;
        };
        self.beat = Beat::Running {
            next_due: now + remaining,
        };
        true
    }

    /// Tear the source down. Returns true only for the call that actually
    /// stopped an active source.
    pub fn stop(&mut self) -> bool {
        let was_active = matches!(self.beat, Beat::Running { .. } | Beat::Paused { .. });
        self.beat = Beat::Stopped;
        was_active
    }

    /// Whether a tick is due at `now`.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Beat::Running { next_due } = self.beat else {
            return false;
        };
        if now < next_due {
            return false;
        }

        let mut following = next_due + self.interval;
        if following <= now {
            tracing::debug!(
                behind_ms = (now - next_due).as_millis() as u64,
                "tick source fell behind, skipping missed ticks"
            );
            following = now + self.interval;
        }
        self.beat = Beat::Running {
            next_due: following,
        };
        true
    }

    pub fn is_running(&self) -> bool {
        matches!(self.beat, Beat::Running { .. })
    }

    pub fn is_stopped(&self) -> bool {
        self.beat == Beat::Stopped
    }
}
