use hangboard::CueSink;
use std::io::Write;

/// Rings the terminal bell: once for a tick, three times at the finish.
#[derive(Debug, Clone, Copy)]
pub struct TerminalBell {
    enabled: bool,
}

impl TerminalBell {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    fn ring(&self, times: usize) {
        if !self.enabled {
            return;
        }
        let mut out = std::io::stdout();
        if let Err(e) = out.write_all(&b"\x07".repeat(times)).and_then(|_| out.flush()) {
            tracing::debug!(error = %e, "failed to ring terminal bell");
        }
    }
}

impl CueSink for TerminalBell {
    fn play_tick_cue(&mut self) {
        self.ring(1);
    }

    fn play_finish_cue(&mut self) {
        self.ring(3);
    }
}
