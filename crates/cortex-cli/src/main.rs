//! CLI frontend for the Cortex Prime dice engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "cortex",
    about = "Cortex Prime dice pools: roll traits and raw dice against a difficulty",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log each pipeline stage to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Roll a dice pool for a character
    Roll {
        /// Character sheet (JSON)
        sheet: PathBuf,

        /// Traits and dice, optionally followed by `vs <difficulty>`
        #[arg(required = true, num_args = 1..)]
        request: Vec<String>,

        /// RNG seed for a reproducible roll
        #[arg(short, long)]
        seed: Option<u64>,

        /// Use these values instead of rolling (comma-separated, in pool order)
        #[arg(long, value_delimiter = ',')]
        rolls: Option<Vec<u32>>,

        /// Largest pool allowed (1-10)
        #[arg(long, default_value = "10")]
        max_dice: usize,

        /// Print the full report as JSON
        #[arg(long)]
        json: bool,

        /// Do not warn about several traits from one category
        #[arg(long)]
        quiet_notices: bool,
    },

    /// List a character's traits by category
    Traits {
        /// Character sheet (JSON)
        sheet: PathBuf,
    },

    /// Show the named difficulty ladder
    Difficulties,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Roll {
            sheet,
            request,
            seed,
            rolls,
            max_dice,
            json,
            quiet_notices,
        } => commands::roll::run(
            &sheet,
            &request,
            &commands::roll::RollOptions {
                seed,
                rolls,
                max_dice,
                json,
                quiet_notices,
            },
        ),
        Commands::Traits { sheet } => commands::traits::run(&sheet),
        Commands::Difficulties => commands::difficulties::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "cortex=debug,cortex_dice=debug"
    } else {
        "cortex=warn,cortex_dice=warn"
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
