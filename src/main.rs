use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use connect_four::config::AppConfig;
use connect_four::game::{GameState, GameStatus};
use connect_four::ui::App;

/// Play Connect Four in the terminal.
#[derive(Parser, Debug)]
#[command(name = "connect-four", version, about = "Two-player Connect Four")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect-four.toml")]
    config: PathBuf,

    /// Override board width (columns)
    #[arg(long)]
    width: Option<usize>,

    /// Override board height (rows)
    #[arg(long)]
    height: Option<usize>,

    /// Play these 0-based columns in order without the UI, e.g. "3,3,4"
    #[arg(long, value_delimiter = ',')]
    moves: Option<Vec<usize>>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    // Validation waits until the CLI overrides are in
    let config_found = cli.config.exists();
    let mut config = if config_found {
        AppConfig::read(&cli.config)
            .with_context(|| format!("loading config from {}", cli.config.display()))?
    } else {
        AppConfig::default()
    };

    // Apply CLI overrides
    if let Some(width) = cli.width {
        config.board.width = width;
    }
    if let Some(height) = cli.height {
        config.board.height = height;
    }
    config.validate().context("invalid configuration")?;

    init_logging(&cli, &config)?;
    if !config_found {
        tracing::warn!(
            "config file '{}' not found, using defaults",
            cli.config.display()
        );
    }

    let state = GameState::with_dimensions(config.board.width, config.board.height)?;

    match cli.moves {
        Some(moves) => run_headless(state, &moves),
        None => run_tui(state, &config),
    }
}

fn init_logging(cli: &Cli, config: &AppConfig) -> Result<()> {
    let filter = if cli.debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log.filter))
    };

    if cli.moves.is_some() {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init();
    } else {
        // The TUI owns the terminal, so logs go to a file
        let file = File::create(&config.log.file)
            .with_context(|| format!("creating log file {}", config.log.file.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    }
    Ok(())
}

fn run_headless(mut state: GameState, moves: &[usize]) -> Result<()> {
    tracing::info!(
        width = state.board().width(),
        height = state.board().height(),
        moves = moves.len(),
        "playing scripted moves"
    );

    for &column in moves {
        let player = state.current_player();
        match state.play(column) {
            Ok(placement) => {
                tracing::debug!(row = placement.row, column, "piece placed");
            }
            Err(err) => {
                tracing::warn!(column, "move rejected: {err}");
                println!("{} cannot play column {column}: {err}", player.name());
            }
        }
    }

    print!("{}", state.board());
    match state.status() {
        GameStatus::InProgress => {
            println!("In progress, {} to move", state.current_player().name());
        }
        GameStatus::Won(player) => {
            println!("{} won after {} moves", player.name(), state.moves_played());
        }
        GameStatus::Draw => println!("Tie after {} moves", state.moves_played()),
    }
    Ok(())
}

fn run_tui(state: GameState, config: &AppConfig) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(state, config.ui.clone());
    let res = app.run(&mut terminal);

    // Restore terminal, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res.context("terminal UI failed")
}
