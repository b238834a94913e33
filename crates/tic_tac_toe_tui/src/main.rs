//! Tic-Tac-Toe - terminal frontend.

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tic_tac_toe_tui::{App, Cli, Tui, TuiConfig, draw, map_key, restore_terminal, setup_terminal};
use tracing::{debug, error, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = TuiConfig::load(cli.config.as_deref()).context("Failed to load config")?;
    if let Some(log_file) = cli.log_file {
        config = config.with_log_file(log_file);
    }

    init_logging(&config)?;
    info!("Starting Tic-Tac-Toe TUI");

    let mut terminal = setup_terminal().context("Failed to set up terminal")?;

    let app = App::new(*config.show_help());
    let res = run_app(&mut terminal, app);

    restore_terminal(&mut terminal)?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("Exiting");

    res
}

/// Logs to a file; the terminal belongs to the UI.
fn init_logging(config: &TuiConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    Ok(())
}

#[instrument(skip_all)]
fn run_app(terminal: &mut Tui, mut app: App) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|f| draw(f, &app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            match map_key(key.code) {
                Some(action) => app.handle(action),
                None => debug!(code = ?key.code, "Unbound key"),
            }
        }
    }

    Ok(())
}
