mod app;
mod bootstrap;
mod cli;
mod config;
mod cues;
mod logging;
mod runtime;
mod time_utils;
mod ui;

use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use cli::{Cli, Commands, EstimateArgs};
use config::HangboardConfig;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use hangboard::catalog::{Catalog, Origin};
use hangboard::store::{HistoryRepository, JsonFileStore, MemoryStore, ProtocolRepository, Store};
use hangboard::{format_clock, Protocol};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let cfg = HangboardConfig::load()?;
    let data_dir = cfg.data_dir()?;

    let _log_guard = match logging::init(&data_dir) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Warning: logging disabled: {:#}", e);
            None
        }
    };

    let store: Arc<dyn Store> = if cli.ephemeral {
        tracing::info!("using in-memory store");
        Arc::new(MemoryStore::new())
    } else {
        tracing::info!(dir = %data_dir.display(), "using file store");
        Arc::new(JsonFileStore::new(&data_dir))
    };

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run(&cfg, store.as_ref()).await,
        Commands::List => list(store.as_ref()).await,
        Commands::History => history(store.as_ref()).await,
        Commands::Estimate(args) => estimate(&args),
        Commands::ConfigPath => config_path(),
    }
}

async fn run(cfg: &HangboardConfig, store: &dyn Store) -> Result<()> {
    let mut app = App::new(cfg);
    bootstrap::initialize_app_state(&mut app, store).await;

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = runtime::run_app(&mut terminal, &mut app, store).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        tracing::error!(error = %err, "app exited with error");
    }
    res
}

async fn list(store: &dyn Store) -> Result<()> {
    let custom = store
        .list_custom()
        .await
        .context("Failed to load custom protocols")?;
    let catalog = Catalog::new(custom);
    for (origin, protocol) in catalog.all() {
        let tag = match origin {
            Origin::Builtin => "built-in",
            Origin::Custom => "custom",
        };
        println!("{}", describe(protocol, tag));
    }
    Ok(())
}

fn describe(protocol: &Protocol, tag: &str) -> String {
    format!(
        "{:<24} {:>6}  {}s/{}s x{}  {} sets, {}s between  [{}]",
        protocol.name(),
        format_clock(protocol.total_duration()),
        protocol.hang_time(),
        protocol.rest_time(),
        protocol.reps_per_set(),
        protocol.number_of_sets(),
        protocol.rest_between_sets(),
        tag
    )
}

async fn history(store: &dyn Store) -> Result<()> {
    let records = store.list().await.context("Failed to load history")?;
    if records.is_empty() {
        println!("No sessions yet.");
    }
    for record in records {
        println!(
            "{}  {:<24} {:>6}  {}",
            time_utils::format_record_date(record.date),
            record.protocol_name,
            format_clock(record.duration),
            record.status_label()
        );
    }
    Ok(())
}

fn estimate(args: &EstimateArgs) -> Result<()> {
    let protocol = Protocol::new(
        "estimate",
        "Estimate",
        args.hang,
        args.rest,
        args.reps,
        args.set_rest,
        args.sets,
    )?;
    println!(
        "{} ({} hangs)",
        format_clock(protocol.total_duration()),
        protocol.hang_count()
    );
    Ok(())
}

fn config_path() -> Result<()> {
    let path = HangboardConfig::config_path()?;
    if !path.exists() {
        HangboardConfig::default().save()?;
        println!("Created default config at {}", path.display());
    }
    println!("{}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_shows_total_and_origin() {
        let protocol = hangboard::catalog::builtin().remove(0);
        let line = describe(&protocol, "built-in");
        assert!(line.starts_with("Repeaters"));
        assert!(line.contains("08:51"));
        assert!(line.ends_with("[built-in]"));
    }
}
