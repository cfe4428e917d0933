//! CLI frontend for the treasure odds engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, Subcommand};
use odds_engine::{ChartFormat, ChartLayout, OutputConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "odds",
    about = "Treasure odds: expected openings and drop chances for escalating loot",
    version,
    propagate_version = true
)]
struct Cli {
    /// JSON file with custom "1 in N" odds per tier (default: built-in game tables)
    #[arg(long, global = true)]
    odds: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Expected number of boxes to open before the item drops
    ExpectedValue {
        /// Rarity of the item (rare, very-rare, ultra-rare)
        tier: String,

        /// Treasures already opened without a drop (the client's opening number minus one)
        #[arg(short, long, default_value = "0", allow_negative_numbers = true)]
        start: i64,

        /// Decimal places to print
        #[arg(short, long, default_value = "6")]
        precision: usize,
    },

    /// Probability of the item dropping within a number of boxes
    Probability {
        /// Rarity of the item (rare, very-rare, ultra-rare)
        tier: String,

        /// Number of boxes you will open
        #[arg(allow_negative_numbers = true)]
        additional: i64,

        /// Treasures already opened without a drop (the client's opening number minus one)
        #[arg(short, long, default_value = "0", allow_negative_numbers = true)]
        start: i64,

        /// Decimal places to print
        #[arg(short, long, default_value = "6")]
        precision: usize,
    },

    /// Tabulate expected values and probabilities for charting
    Chart {
        /// Rarity of the item (rare, very-rare, ultra-rare)
        tier: String,

        /// Largest number of treasures already opened to include
        #[arg(allow_negative_numbers = true)]
        max_start: i64,

        /// Largest number of additional boxes to include
        #[arg(allow_negative_numbers = true)]
        max_additional: i64,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Row layout: long (one row per cell) or wide (one row per start)
        #[arg(long, default_value = "long")]
        layout: ChartLayout,

        /// Output format: csv, json
        #[arg(long, default_value = "csv")]
        format: ChartFormat,

        /// Decimal places for numbers in the chart
        #[arg(short, long, default_value = "6")]
        precision: usize,
    },

    /// Show the odds schedule summary for every tier
    Tiers,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = commands::load_engine(cli.odds.as_deref()).and_then(|engine| {
        match cli.command {
            Commands::ExpectedValue {
                tier,
                start,
                precision,
            } => commands::expected_value::run(
                &engine,
                &tier,
                start,
                &OutputConfig::default().with_precision(precision),
            ),
            Commands::Probability {
                tier,
                additional,
                start,
                precision,
            } => commands::probability::run(
                &engine,
                &tier,
                start,
                additional,
                &OutputConfig::default().with_precision(precision),
            ),
            Commands::Chart {
                tier,
                max_start,
                max_additional,
                output,
                layout,
                format,
                precision,
            } => commands::chart::run(
                &engine,
                &tier,
                max_start,
                max_additional,
                output.as_deref(),
                &OutputConfig::default()
                    .with_precision(precision)
                    .with_layout(layout)
                    .with_format(format),
            ),
            Commands::Tiers => commands::tiers::run(&engine),
        }
    });

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

/// Log to stderr so stdout stays machine-readable.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
