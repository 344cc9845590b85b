mod audio;
mod config;
mod controller;
mod logging;
mod model;
mod view;

use std::io;
use std::time::Duration;
use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use view::AppView;
use audio::EngineHandle;
use config::Cli;
use controller::AppController;
use model::{AppModel, Catalog};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Keep the guard alive so buffered log lines are flushed on exit
    let _log_guard = match logging::init_logging(&cli.log_dir) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Warning: Failed to initialize logging: {:#}", e);
            None
        }
    };

    tracing::info!("=== Spotify Clone Starting ===");

    let catalog = match &cli.catalog {
        Some(path) => Catalog::from_path(path)
            .with_context(|| format!("could not load catalog from {}", path.display()))?,
        None => Catalog::builtin().context("built-in catalog is invalid")?,
    };
    tracing::info!(
        tracks = catalog.tracks().len(),
        playlists = catalog.playlists().len(),
        "Catalog loaded"
    );

    let mut app_model = AppModel::new(catalog);
    app_model.playback.set_volume(cli.volume);

    let mut controller = AppController::new(EngineHandle::spawn(cli.tick()));
    controller.sync_engine(&app_model);

    tracing::info!("Starting TUI...");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app_model, &mut controller);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        tracing::error!(error = ?err, "Application error");
    }

    controller.into_engine().shutdown().await;

    tracing::info!("Spotify Clone shutting down");
    res.map_err(Into::into)
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    model: &mut AppModel,
    controller: &mut AppController,
) -> io::Result<()> {
    loop {
        controller.process_player_events(model);

        terminal.draw(|f| {
            AppView::render(f, model);
        })?;

        // Short poll keeps the progress bar moving between key presses
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                controller.handle_key_event(model, key);
            }
        }

        if model.should_quit() {
            break;
        }
    }

    Ok(())
}
