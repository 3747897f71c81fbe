/// An audio signal the engine asks its surroundings to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// Short beep: session start, phase changes and the last seconds of a phase.
    Tick,
    /// Longer, higher beep when the final hang ends.
    Finish,
}

/// Plays cues emitted by a [`crate::Session`].
pub trait CueSink {
    fn play_tick_cue(&mut self);
    fn play_finish_cue(&mut self);

    fn play(&mut self, cue: Cue) {
        match cue {
            Cue::Tick => self.play_tick_cue(),
            Cue::Finish => self.play_finish_cue(),
        }
    }
}

/// Silent sink.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCues;

impl CueSink for NoCues {
    fn play_tick_cue(&mut self) {}
    fn play_finish_cue(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Counter {
        ticks: usize,
        finishes: usize,
    }

    impl CueSink for Counter {
        fn play_tick_cue(&mut self) {
            self.ticks += 1;
        }
        fn play_finish_cue(&mut self) {
            self.finishes += 1;
        }
    }

    #[test]
    fn play_dispatches_by_kind() {
        let mut sink = Counter::default();
        sink.play(Cue::Tick);
        sink.play(Cue::Tick);
        sink.play(Cue::Finish);
        assert_eq!(sink.ticks, 2);
        assert_eq!(sink.finishes, 1);
    }
}
