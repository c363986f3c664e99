//! CLI frontend for the Memora memory trainer.

mod commands;
mod palette;
mod tui;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "memora",
    about = "Memora — memory training games in your terminal",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the exercise catalog
    Exercises {
        /// Print the catalog as JSON
        #[arg(long)]
        json: bool,
    },

    /// Play an exercise interactively
    Play {
        /// Exercise id (e.g. n-back, paired-associates)
        exercise: String,

        /// RNG seed for a reproducible cue sequence
        #[arg(short, long)]
        seed: Option<u64>,

        /// TOML session config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Run an n-back game on a virtual clock with scripted match presses
    Simulate {
        /// RNG seed for the cue sequence
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Item indices at which to press match (repeat an index to press twice)
        #[arg(short, long, value_delimiter = ',')]
        press: Vec<usize>,

        /// Number of games to play in the same session
        #[arg(short, long, default_value = "1")]
        runs: usize,

        /// TOML session config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Show every presented item
        #[arg(short, long)]
        verbose: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Render one screen of the app for the given stats
    Show {
        /// Screen to render
        #[arg(value_enum, default_value = "home")]
        screen: commands::show::Screen,

        /// Experience points
        #[arg(long, default_value = "0")]
        xp: u64,

        /// Smoothed accuracy (0.0-1.0)
        #[arg(long, default_value = "0.85")]
        accuracy: f64,

        /// Completed sessions
        #[arg(long, default_value = "0")]
        sessions: u32,

        /// Print the screen data as JSON
        #[arg(long)]
        json: bool,
    },

    /// Preview one progression step for a given score
    Progress {
        /// Starting experience points
        #[arg(long, default_value = "0")]
        xp: u64,

        /// Game score to apply (0-100)
        #[arg(long)]
        score: u32,

        /// Starting smoothed accuracy (0.0-1.0)
        #[arg(long, default_value = "0.85")]
        accuracy: f64,

        /// Completed sessions so far
        #[arg(long, default_value = "0")]
        sessions: u32,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("MEMORA_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Exercises { json } => commands::exercises::run(json),
        Commands::Play {
            exercise,
            seed,
            config,
        } => commands::play::run(&exercise, seed, config.as_deref()),
        Commands::Simulate {
            seed,
            press,
            runs,
            config,
            verbose,
            json,
        } => commands::simulate::run(seed, &press, runs, config.as_deref(), verbose, json),
        Commands::Show {
            screen,
            xp,
            accuracy,
            sessions,
            json,
        } => commands::show::run(screen, xp, accuracy, sessions, json),
        Commands::Progress {
            xp,
            score,
            accuracy,
            sessions,
            json,
        } => commands::progress::run(xp, score, accuracy, sessions, json),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
