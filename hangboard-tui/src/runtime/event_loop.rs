use crate::app::App;
use crate::ui;
use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use hangboard::store::Store;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

use super::action_queue::{channel, Action};
use super::actions::run_action;
use super::views::handle_view_key;

/// Keyboard poll timeout; also bounds how late a tick can be noticed.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

pub async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    store: &dyn Store,
) -> Result<()> {
    let (action_tx, mut action_rx) = channel();

    loop {
        terminal.draw(|f| ui::render(f, app))?;

        if app.session.as_ref().is_some_and(|s| s.is_ticking()) {
            app.throbber_state.calc_next();
        }

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_view_key(key, app, &action_tx);
                }
            }
        }

        if app.metronome.poll(Instant::now()) {
            if let Some(summary) = app.tick_session() {
                let _ = action_tx.send(Action::RecordSession(summary));
            }
        }

        while let Ok(action) = action_rx.try_recv() {
            run_action(action, app, store).await;
        }

        if !app.running {
            break;
        }
    }

    if app.metronome.stop() {
        tracing::debug!("tick source stopped on quit");
    }

    Ok(())
}
