// ABOUTME: Main entry point for intern-form with TUI and CLI support
//
// Binary: intern-form
// Usage: intern-form [COMMAND]
// - No command / tui [--view MODE]: launches the stepper TUI
// - show: print the latest submission
// - lookup: print a submission by form id
// - clear: reset saved progress

#![allow(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::Backend, prelude::*, Terminal};
use std::{
    io::{self, IsTerminal},
    path::Path,
    sync::Arc,
    time::{Duration, Instant},
};

use intern_form::app::{App, EventHandler};
use intern_form::cli;
use intern_form::components::LayoutComponent;
use intern_form::config::AppConfig;
use intern_form::storage::{FileStorage, Storage};

/// Terminal cleanup utility to ensure proper restoration
fn cleanup_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}

/// Unified terminal cleanup that works with a terminal instance
fn cleanup_terminal_with_instance<B: Backend + std::io::Write>(
    terminal: &mut Terminal<B>,
) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    let config = AppConfig::load()?;
    let data_dir = config.resolve_data_dir(args.data_dir.as_deref())?;

    setup_logging(&data_dir)?;
    setup_panic_handler();

    let storage: Arc<dyn Storage> = Arc::new(
        FileStorage::open(&data_dir)
            .with_context(|| format!("Failed to open storage in {}", data_dir.display()))?,
    );
    tracing::info!("Using storage directory {}", data_dir.display());

    let result = match args.command {
        Some(cli::Commands::Show) => cli::show::execute_show(storage.as_ref(), args.format),
        Some(cli::Commands::Lookup(lookup_args)) => {
            cli::show::execute_lookup(storage.as_ref(), lookup_args.form_id, args.format)
        }
        Some(cli::Commands::Clear) => cli::clear::execute(storage, config.state_options()),

        // TUI mode (explicit or default)
        Some(cli::Commands::Tui(tui_args)) => launch_tui(storage, &config, &tui_args),
        None => launch_tui(storage, &config, &cli::TuiArgs::default()),
    };

    // Ensure terminal is cleaned up on any error
    if result.is_err() {
        cleanup_terminal();
    }

    result
}

fn launch_tui(storage: Arc<dyn Storage>, config: &AppConfig, args: &cli::TuiArgs) -> Result<()> {
    let mut options = config.state_options();
    if let Some(view) = args.view {
        options.view_mode = view;
    }

    let mut app = App::new(storage, options);
    let mut layout = LayoutComponent::new();
    run_tui(&mut app, &mut layout)
}

fn run_tui(app: &mut App, layout: &mut LayoutComponent) -> Result<()> {
    // Check if we have a proper TTY
    if !IsTerminal::is_terminal(&io::stdout()) {
        return Err(anyhow::anyhow!(
            "No TTY detected. This application requires a terminal.\n\
             Try running directly in a terminal instead of redirecting output."
        ));
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Ensure terminal cleanup happens even if there's an error
    let result = run_tui_loop(app, layout, &mut terminal);

    if let Err(e) = cleanup_terminal_with_instance(&mut terminal) {
        tracing::error!("Failed to cleanup terminal: {}", e);
        cleanup_terminal();
    }

    result
}

fn run_tui_loop(
    app: &mut App,
    layout: &mut LayoutComponent,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    const STARTUP_GUARD_MS: u64 = 100;

    let tick_rate = Duration::from_millis(250);
    let mut last_tick = Instant::now();

    // Ignore key events for the first 100ms so buffered keypresses don't type into the form
    let startup_time = Instant::now();

    loop {
        terminal.draw(|frame| {
            layout.render(frame, &app.state);
        })?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key_event) = event::read()? {
                if key_event.kind != KeyEventKind::Press {
                    continue;
                }
                if startup_time.elapsed() < Duration::from_millis(STARTUP_GUARD_MS) {
                    tracing::debug!(
                        "Ignoring key event {:?} during startup guard period",
                        key_event.code
                    );
                    continue;
                }

                if let Some(app_event) = EventHandler::handle_key_event(key_event, &mut app.state) {
                    EventHandler::process_event(app_event, &mut app.state);
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
        }

        if app.state.should_quit {
            tracing::info!("Quit requested");
            break;
        }
    }

    Ok(())
}

fn setup_logging(data_dir: &Path) -> Result<()> {
    use std::fs::OpenOptions;
    use tracing_subscriber::prelude::*;

    let log_dir = data_dir.join("logs");
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    // Create JSONL log file with timestamp
    let log_file = log_dir.join(format!(
        "intern-form-{}.jsonl",
        chrono::Local::now().format("%Y%m%d-%H%M%S")
    ));

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json() // Output in JSON Lines format
                .with_target(true)
                .with_writer(file)
                .with_ansi(false),
        )
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "intern_form=info".into()),
        )
        .init();

    Ok(())
}

fn setup_panic_handler() {
    use tracing::error;

    std::panic::set_hook(Box::new(|panic_info| {
        // Ensure terminal is restored before logging the panic
        cleanup_terminal();

        error!("Application panicked: {}", panic_info);
        eprintln!("Application panicked: {}", panic_info);
        eprintln!("Please check the logs for more details.");
    }));
}
