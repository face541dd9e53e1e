//! Field Report TUI - service execution report form
//!
//! A Ratatui-based form for recording field-service work orders, sending
//! them to the report endpoint and exporting them to xlsx.

mod app;
mod config;
mod platform;
mod report;
mod state;
mod submit;
mod ui;

use anyhow::Result;
use app::App;
use config::ReportConfig;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::{self, File};
use std::io;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use submit::HttpReportSink;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Open the log file; the terminal itself belongs to the UI
fn open_log_file() -> Option<File> {
    let dir = config::log_dir()?;
    fs::create_dir_all(&dir).ok()?;
    File::options()
        .create(true)
        .append(true)
        .open(dir.join("field-report.log"))
        .ok()
}

fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "field_report=info".into());

    let fmt_layer = match open_log_file() {
        Some(file) => tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .boxed(),
        None => tracing_subscriber::fmt::layer()
            .with_writer(io::sink)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let config = ReportConfig::load()?;
    let sink = Arc::new(HttpReportSink::new(
        config.endpoint_url.clone(),
        config.delivery_mode(),
    ));
    let mut app = App::new(&config, sink);
    tracing::info!(mode = ?config.delivery_mode(), "Starting field report form");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        tracing::error!(error = ?err, "Application error");
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        app.tick();
        app.poll_submission().await;

        terminal.draw(|frame| ui::draw(frame, app))?;

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                    return Ok(());
                }

                app.handle_key(key)?;
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
