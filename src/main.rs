//! Amazons command line
//!
//! - `play` runs a session between two players and prints the result
//! - `show` prints the board after a sequence of moves
//! - `init-config` writes a default settings file

use amazons::config::{load_settings, save_settings, settings_path, Settings};
use amazons::Session;
use amazons_engine::api::{do_move, get_game_state, new_game};
use amazons_engine::{GameState, Move};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "amazons")]
#[command(version, about = "Game of the Amazons engine", long_about = None)]
struct Cli {
    /// Log filter used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game between the configured players
    Play {
        /// Settings file; defaults to the user config location
        #[arg(long)]
        config: Option<PathBuf>,

        /// Stop after this many plies
        #[arg(long)]
        max_plies: Option<u32>,

        /// Override the random players' seed
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print the board after playing the given moves
    Show {
        /// Moves such as `d1-d7(g7)`
        #[arg(long, num_args = 0..)]
        opening: Vec<String>,
    },

    /// Write default settings
    InitConfig {
        path: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cli.log_level))
        .context("invalid log level")?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Commands::Play {
            config,
            max_plies,
            seed,
        } => play(config, max_plies, seed),
        Commands::Show { opening } => show(&opening),
        Commands::InitConfig { path } => {
            let path = path.unwrap_or_else(settings_path);
            save_settings(&Settings::default(), &path)?;
            println!("Wrote {}", path.display());
            Ok(())
        }
    }
}

fn play(config: Option<PathBuf>, max_plies: Option<u32>, seed: Option<u64>) -> Result<()> {
    let path = config.unwrap_or_else(settings_path);
    let mut settings = load_settings(&path);
    if max_plies.is_some() {
        settings.max_plies = max_plies;
    }
    if let Some(seed) = seed {
        settings.seed = seed;
    }

    let report = Session::from_settings(&settings)?.play()?;
    print!("{}", report.final_board);
    let moves: Vec<String> = report.moves.iter().map(Move::to_string).collect();
    println!("{}", moves.join(" "));
    match report.winner {
        Some(winner) => println!("{} wins after {} moves", winner, report.moves.len()),
        None => println!("No result after {} moves", report.moves.len()),
    }
    Ok(())
}

fn show(opening: &[String]) -> Result<()> {
    let mut board = new_game();
    for text in opening {
        let mv: Move = text.parse()?;
        do_move(&mut board, mv).with_context(|| format!("cannot play {text}"))?;
    }
    print!("{board}");
    match get_game_state(&board) {
        GameState::Playing { turn } => println!("{turn} to move"),
        GameState::Won { winner } => println!("{winner} has won"),
    }
    Ok(())
}
