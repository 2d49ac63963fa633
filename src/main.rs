//! Guessing Game - CLI
//!
//! Number guessing game with TUI and CLI modes, plus a bisection simulator.

use anyhow::{Result, anyhow};
use clap::{Parser, Subcommand};
use guessing_game::{
    commands::{SimulationConfig, run_simple, run_simulation},
    core::GuessSession,
    interactive::{App, run_tui},
    output::print_simulation_result,
};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Log file used while the TUI owns the terminal
const TUI_LOG_FILE: &str = "guessing_game.log";

#[derive(Parser)]
#[command(
    name = "guessing_game",
    about = "Guess the secret number between 1 and 100",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Seed for the secret number (same seed, same numbers)
    #[arg(short, long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// Let a bisection player run many games and report statistics
    Simulate {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "10000")]
        games: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    init_logging(matches!(command, Commands::Play))?;

    match command {
        Commands::Play => {
            let app = App::new(new_session(cli.seed));
            run_tui(app)
        }
        Commands::Simple => run_simple(&mut new_session(cli.seed)),
        Commands::Simulate { games } => {
            let seed = cli.seed.unwrap_or(0);
            println!("Simulating {games} games (seed {seed})...");
            let result = run_simulation(&SimulationConfig::new(games, seed));
            print_simulation_result(&result);
            Ok(())
        }
    }
}

fn new_session(seed: Option<u64>) -> GuessSession {
    match seed {
        Some(seed) => {
            info!(seed, "using seeded session");
            GuessSession::seeded(seed)
        }
        None => GuessSession::from_entropy(),
    }
}

/// Configure `tracing` from `RUST_LOG`
///
/// The TUI logs to a file, and only when `RUST_LOG` is set, so nothing is
/// written over the alternate screen. Other modes log to stderr at `warn`
/// by default.
fn init_logging(tui: bool) -> Result<()> {
    let result = if tui {
        let Ok(filter) = EnvFilter::try_from_default_env() else {
            return Ok(());
        };
        let log_file = std::fs::File::create(TUI_LOG_FILE)?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(Arc::new(log_file))
            .with_ansi(false)
            .try_init()
    } else {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
    };

    result.map_err(|e| anyhow!(e))
}
