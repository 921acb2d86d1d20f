mod app;
mod cli;
mod config;
mod logging;
mod runtime;
mod time_utils;
mod ui;

use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tracker_client::TrackerClient;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    if let Some(cli::Commands::ConfigPath) = cli.command {
        let path = config::TrackerConfig::config_path()?;
        if !path.exists() {
            config::TrackerConfig::default().save()?;
            println!("Created default config at {}", path.display());
        } else {
            println!("{}", path.display());
        }
        return Ok(());
    }

    let mut cfg = config::TrackerConfig::load()?;
    if let Some(api_url) = cli.api_url {
        cfg.api_url = api_url;
    }

    logging::init(&config::TrackerConfig::log_path()?)?;
    tracing::info!(api_url = %cfg.api_url, timeout_secs = cfg.timeout_secs, "starting");

    let mut client = TrackerClient::new(&cfg.api_url, cfg.timeout())
        .context("Failed to build HTTP client")?;
    let mut app = App::new(client.base_url().as_str());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = runtime::run_app(&mut terminal, &mut app, &mut client).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        tracing::error!(error = ?err, "event loop failed");
    }
    tracing::info!("exiting");
    res
}
