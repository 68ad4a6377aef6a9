//! CLI frontend for Golden Detector, a financial-literacy game about
//! spotting scams.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "gd",
    about = "Golden Detector: learn to spot financial scams",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log engine transitions to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a content file and report every issue
    Check {
        /// Content file (JSON)
        content: PathBuf,
    },

    /// List the levels of a content file
    Levels {
        /// Content file (JSON)
        content: PathBuf,
    },

    /// Play through a content file, reading commands from stdin
    Play {
        /// Content file (JSON)
        content: PathBuf,

        /// Coins to start with
        #[arg(long, default_value = "5")]
        coins: u32,

        /// Forget session counters on reset
        #[arg(long)]
        clear_counters: bool,
    },

    /// Show what an offer really costs
    Loss {
        /// Offer number (default: compare all offers)
        #[arg(short, long)]
        scenario: Option<usize>,

        /// Amount invested
        #[arg(short, long, default_value = "10000")]
        amount: f64,

        /// Term in months (1-60)
        #[arg(short, long, default_value = "12")]
        months: u32,
    },
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Check { content } => commands::check::run(&content),
        Commands::Levels { content } => commands::levels::run(&content),
        Commands::Play {
            content,
            coins,
            clear_counters,
        } => commands::play::run(&content, coins, clear_counters),
        Commands::Loss {
            scenario,
            amount,
            months,
        } => commands::loss::run(scenario, amount, months),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
