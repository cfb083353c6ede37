//! DinoDessert - pick a letter, spin, meet your dinosaur dessert
//!
//! # Usage
//!
//! ```sh
//! # Start on the first letter
//! cargo run -p dinodessert
//!
//! # Start on T and log to a file
//! RUST_LOG=debug cargo run -p dinodessert -- --letter t --log-file dinodessert.log
//! ```

use std::cell::RefCell;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tui_dispatch::EffectRuntime;

use dinodessert::{
    logging, reel_store, Action, AppConfig, ConfigError, NameCatalog, ReelState, Reels, ReelsUi,
    StdRandom,
};

/// Slot-machine name generator pairing dinosaurs with desserts
#[derive(Parser, Debug)]
#[command(name = "dinodessert")]
#[command(about = "Spin the reels to find a roaringly sweet name")]
struct Args {
    /// Letter to start on (case insensitive)
    #[arg(long, short)]
    letter: Option<char>,

    /// Append tracing output to this file (filter with RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = Args::parse();

    // Validate everything before entering TUI mode
    let catalog = match NameCatalog::builtin() {
        Ok(catalog) => Arc::new(catalog),
        Err(e) => {
            eprintln!("Error: built-in name tables are invalid: {}", e);
            std::process::exit(1);
        }
    };
    let config = match AppConfig::new(args.letter, args.log_file, &catalog) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            if let ConfigError::UnknownLetter(_) = e {
                let letters: String = catalog.letters().map(|l| l.as_char()).collect();
                eprintln!("Available letters: {}", letters);
            }
            std::process::exit(1);
        }
    };
    let _log_guard = match config.log_file.as_deref().map(logging::init).transpose() {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let state = match config.start_letter {
        Some(letter) => ReelState::starting_at(catalog, letter),
        None => ReelState::new(catalog),
    };
    tracing::info!(letter = %state.letter(), "Starting");

    // ===== Terminal setup =====
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, state).await;

    // ===== Cleanup =====
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    state: ReelState,
) -> io::Result<()> {
    let mut runtime = EffectRuntime::from_store(reel_store(state));
    let reels = Reels::new(StdRandom::from_entropy());
    let ui = RefCell::new(ReelsUi::new());

    let result = runtime
        .run(
            terminal,
            |frame, area, state, render_ctx| {
                ui.borrow_mut().render(frame, area, state, render_ctx);
            },
            |event, state| ui.borrow_mut().map_event(event, state),
            |action| matches!(action, Action::Quit),
            |effect, ctx| reels.handle_effect(effect, ctx),
        )
        .await;
    tracing::info!(last = ?runtime.state().final_result, "Quit");
    result
}
